//! Thread popup
//!
//! Messages of the open room, newest at the bottom, plus the comment input.

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};
use roomboard_app::{Board, Room, format_relative};

use super::{centered, set_field_cursor};

const POPUP_WIDTH: u16 = 72;
const POPUP_HEIGHT: u16 = 20;
const INPUT_HEIGHT: u16 = 3;
const ERROR_HEIGHT: u16 = 1;
const COMMENT_PLACEHOLDER: &str = "Digite seu comentário...";
const EMPTY_THREAD: &str = "Nenhum comentário ainda.";
const PROMPT: &str = "> ";

/// Render the open thread over the board.
pub fn render(frame: &mut Frame, board: &Board, room: &Room, now: DateTime<Utc>, area: Rect) {
    let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", room.name))
        .title_bottom(" Esc fecha ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [messages_area, input_area, error_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(ERROR_HEIGHT),
    ])
    .areas(inner);

    render_messages(frame, room, now, messages_area);
    render_input(frame, board, input_area);

    if let Some(error) = board.thread_error() {
        let line = Paragraph::new(format!("! {error}")).style(Style::default().fg(Color::Red));
        frame.render_widget(line, error_area);
    }
}

fn render_messages(frame: &mut Frame, room: &Room, now: DateTime<Utc>, area: Rect) {
    if room.messages.is_empty() {
        let empty = Paragraph::new(EMPTY_THREAD).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<ListItem> = room
        .messages
        .iter()
        .flat_map(|message| {
            [
                ListItem::new(Line::from(vec![
                    Span::styled(
                        message.author_label(),
                        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format_relative(now, message.created_at),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
                ListItem::new(Line::from(message.content.clone())),
                ListItem::new(Line::default()),
            ]
        })
        .collect();

    // Keep the newest messages in view.
    let visible_height = usize::from(area.height);
    let skip = lines.len().saturating_sub(visible_height);
    let visible: Vec<_> = lines.into_iter().skip(skip).collect();

    frame.render_widget(List::new(visible), area);
}

fn render_input(frame: &mut Frame, board: &Board, area: Rect) {
    let send_style = if board.can_send() {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title_bottom(Line::styled(" Enviar (Enter) ", send_style).right_aligned());
    let inner = block.inner(area);

    let comment = board.comment();
    let text = if comment.text().is_empty() {
        Line::from(vec![
            Span::raw(PROMPT),
            Span::styled(COMMENT_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![Span::raw(PROMPT), Span::raw(comment.text())])
    };
    frame.render_widget(Paragraph::new(text).block(block), area);

    let prompt_width = PROMPT.chars().count() as u16;
    let text_area = Rect {
        x: inner.x.saturating_add(prompt_width),
        width: inner.width.saturating_sub(prompt_width),
        ..inner
    };
    set_field_cursor(frame, text_area, comment.cursor());
}
