use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
};
use crate::ui::view::PagerView;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, view: &PagerView) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color) = if view.fetching {
            ("● loading", STATUS_PENDING)
        } else if view.last_error.is_some() {
            ("● error", STATUS_ERROR)
        } else {
            ("● ready", STATUS_OK)
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Todos",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Total: {}", view.total), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Page size: {}", view.page_size), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
