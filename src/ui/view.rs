use crate::pager::{Item, PageNumber, PagerState};

/// Which navigation control a view flag refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    First,
    Prev,
    Next,
    Last,
}

impl NavControl {
    pub const ALL: [NavControl; 4] = [
        NavControl::First,
        NavControl::Prev,
        NavControl::Next,
        NavControl::Last,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavControl::First => "First",
            NavControl::Prev => "Prev",
            NavControl::Next => "Next",
            NavControl::Last => "Last",
        }
    }
}

/// Everything the renderer needs, read once per frame from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct PagerView {
    pub items: Vec<Item>,
    pub total: u64,
    pub page_size: u64,
    pub page_number: PageNumber,
    pub total_pages: u64,
    pub can_go_first_page: bool,
    pub can_go_prev_page: bool,
    pub can_go_next_page: bool,
    pub can_go_last_page: bool,
    pub fetching: bool,
    pub last_error: Option<String>,
}

impl PagerView {
    pub fn from_state(state: &PagerState) -> Self {
        Self {
            items: state.items().to_vec(),
            total: state.total(),
            page_size: state.page_size(),
            page_number: state.page_number(),
            total_pages: state.total_pages(),
            can_go_first_page: state.can_go_first_page(),
            can_go_prev_page: state.can_go_prev_page(),
            can_go_next_page: state.can_go_next_page(),
            can_go_last_page: state.can_go_last_page(),
            fetching: state.is_fetching(),
            last_error: state.last_error().map(str::to_string),
        }
    }

    pub fn is_enabled(&self, control: NavControl) -> bool {
        match control {
            NavControl::First => self.can_go_first_page,
            NavControl::Prev => self.can_go_prev_page,
            NavControl::Next => self.can_go_next_page,
            NavControl::Last => self.can_go_last_page,
        }
    }

    /// "page / pages", with "?" while the page count is unknown.
    pub fn position(&self) -> String {
        if self.total_pages == 0 {
            format!("{} / ?", self.page_number)
        } else {
            format!("{} / {}", self.page_number, self.total_pages)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_view_disables_every_control() {
        let view = PagerView::from_state(&PagerState::default());
        for control in NavControl::ALL {
            assert!(!view.is_enabled(control), "{:?} enabled", control);
        }
        assert_eq!(view.position(), "1 / ?");
    }
}
