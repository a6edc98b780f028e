//! Feedback board
//!
//! Static list of feedback cards.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use roomboard_app::FEEDBACK_ENTRIES;

/// Render the feedback cards.
pub fn render(frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = FEEDBACK_ENTRIES
        .iter()
        .flat_map(|entry| {
            [
                ListItem::new(Line::from(Span::styled(
                    entry.title,
                    Style::default().add_modifier(Modifier::BOLD),
                ))),
                ListItem::new(Line::from(Span::styled(
                    entry.description,
                    Style::default().fg(Color::Gray),
                ))),
                ListItem::new(Line::from(Span::styled(
                    format!("[{}]", entry.category),
                    Style::default().fg(Color::Magenta),
                ))),
                ListItem::new(Line::default()),
            ]
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Feedback Board ");
    frame.render_widget(List::new(items).block(block), area);
}
