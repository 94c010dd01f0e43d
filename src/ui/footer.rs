use crate::ui::theme::{CONTROL_DISABLED, CONTROL_ENABLED, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use crate::ui::view::{NavControl, PagerView};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " Home: First │ ←: Prev │ →: Next │ End: Last │ r: Reload │ q: Quit";

/// Navigation controls plus a status line.
pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, view: &PagerView, area: Rect) -> Paragraph<'static> {
        let mut controls = Vec::new();
        for control in NavControl::ALL {
            if control == NavControl::Next {
                controls.push(Span::styled(
                    format!("  {}  ", view.position()),
                    Style::default().fg(HEADER_TEXT),
                ));
            }
            controls.push(control_span(control, view.is_enabled(control)));
            controls.push(Span::raw(" "));
        }

        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let status = match &view.last_error {
            Some(error) => Line::from(Span::styled(
                format!(" {}", error),
                Style::default().fg(STATUS_ERROR),
            )),
            None => {
                let version = format!("v{} ", VERSION);
                let content_width = area.width.saturating_sub(2) as usize;
                let padding = content_width
                    .saturating_sub(HINTS.chars().count())
                    .saturating_sub(version.chars().count());
                Line::from(vec![
                    Span::styled(HINTS, dim),
                    Span::styled(" ".repeat(padding), dim),
                    Span::styled(version, dim),
                ])
            }
        };

        Paragraph::new(vec![
            Line::from(controls).alignment(Alignment::Center),
            status,
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn control_span(control: NavControl, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default()
            .fg(CONTROL_ENABLED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(CONTROL_DISABLED)
            .add_modifier(Modifier::CROSSED_OUT)
    };
    Span::styled(format!("[ {} ]", control.label()), style)
}
