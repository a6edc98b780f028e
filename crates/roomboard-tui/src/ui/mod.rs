//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O); the current time is
//! passed in so relative timestamps render deterministically.

mod feedback;
mod rooms;
mod signin;
mod status;
mod thread;

use chrono::{DateTime, Utc};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};
use roomboard_app::{App, LOADING_LABEL, Screen};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, now: DateTime<Utc>) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    match app.screen() {
        Screen::Loading => {
            let placeholder =
                Paragraph::new(LOADING_LABEL).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(placeholder, *main_area);
        },
        Screen::SignIn => signin::render(frame, app.sign_in(), *main_area),
        Screen::Rooms => {
            let board = app.board();
            rooms::render(frame, board, *main_area);
            if let Some(room) = board.selected() {
                thread::render(frame, board, room, now, *main_area);
            }
        },
        Screen::Feedback => feedback::render(frame, *main_area),
    }

    status::render(frame, app, *status_area);
}

/// Rectangle of at most `width` x `height` centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(column);
    cell
}

/// Place the cursor after `chars` characters of a one-line field.
#[allow(clippy::cast_possible_truncation)]
fn set_field_cursor(frame: &mut Frame, field: Rect, chars: usize) {
    const RIGHT_PADDING: u16 = 1;

    let max_x = field.x.saturating_add(field.width).saturating_sub(RIGHT_PADDING);
    let cursor_x = field.x.saturating_add(chars.min(u16::MAX as usize) as u16).min(max_x);
    frame.set_cursor_position((cursor_x, field.y));
}
