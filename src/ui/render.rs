use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, ROW_STRIPE, STATUS_OK};
use crate::ui::view::PagerView;
use ratatui::layout::{Alignment, Constraint};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

const COLUMNS: [&str; 3] = ["ID", "Title", "Completed"];

pub fn draw(frame: &mut Frame<'_>, view: &PagerView) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(view), header);
    frame.render_widget(Clear, body);

    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if view.items.is_empty() {
        let message = if view.fetching {
            "Loading..."
        } else {
            "No items on this page."
        };
        let placeholder = Paragraph::new(message)
            .style(Style::default().fg(HEADER_SEPARATOR))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, body);
    } else {
        frame.render_widget(todo_table(view).block(block), body);
    }

    frame.render_widget(Footer::new().widget(view, footer), footer);
}

fn todo_table(view: &PagerView) -> Table<'static> {
    let header = Row::new(COLUMNS.iter().map(|title| Cell::from(*title))).style(
        Style::default()
            .fg(ACCENT)
            .add_modifier(Modifier::BOLD),
    );

    let rows = view.items.iter().enumerate().map(|(idx, item)| {
        let checkbox = if item.completed {
            Cell::from("[x]").style(Style::default().fg(STATUS_OK))
        } else {
            Cell::from("[ ]")
        };
        let row = Row::new(vec![
            Cell::from(item.id.to_string()),
            Cell::from(item.title.clone()),
            checkbox,
        ])
        .style(Style::default().fg(HEADER_TEXT));
        if idx % 2 == 1 {
            row.style(Style::default().fg(HEADER_TEXT).bg(ROW_STRIPE))
        } else {
            row
        }
    });

    Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Min(10),
            Constraint::Length(11),
        ],
    )
    .header(header)
    .column_spacing(2)
}
