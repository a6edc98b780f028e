//! Room board
//!
//! Create-room form, error line and the list of available rooms.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use roomboard_app::{Board, BoardFocus, LOADING_ROOMS, LoadState};

use super::set_field_cursor;

const TITLE: &str = "Bem-vindo ao Feedback Autônomo";
const NAME_PLACEHOLDER: &str = "Nome da Sala";
const CREATE_BUTTON: &str = "[ Criar Sala ]";
const OPEN_BUTTON: &str = "[ Ver Sala ]";
const EMPTY_LIST: &str = "Nenhuma sala criada ainda.";
const PROMPT: &str = "> ";
const FORM_HEIGHT: u16 = 4;
const BORDER_SIZE: u16 = 2;

/// Render the board, or its loading/failure placeholder.
pub fn render(frame: &mut Frame, board: &Board, area: Rect) {
    match board.load() {
        LoadState::Loading => {
            let loading =
                Paragraph::new(LOADING_ROOMS).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(loading, area);
        },
        LoadState::Failed { message } => {
            let failed = Paragraph::new(format!("Erro ao carregar salas: {message}"))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(failed, area);
        },
        LoadState::Ready => {
            let [title_area, form_area, list_area] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(FORM_HEIGHT),
                Constraint::Min(BORDER_SIZE + 1),
            ])
            .areas(area);

            let title = Paragraph::new(TITLE)
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title, title_area);

            render_form(frame, board, form_area);
            render_list(frame, board, list_area);
        },
    }
}

/// New-room input, create button and the board's error line.
fn render_form(frame: &mut Frame, board: &Board, area: Rect) {
    let focused = board.focus() == BoardFocus::RoomName && board.selected().is_none();
    let border_style =
        if focused { Style::default().fg(Color::Yellow) } else { Style::default() };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Criar Nova Sala ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [input_row, error_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
    let button_width = CREATE_BUTTON.chars().count() as u16;
    let [field_area, button_area] =
        Layout::horizontal([Constraint::Min(1), Constraint::Length(button_width)]).areas(input_row);

    let name = board.room_name();
    let field = if name.text().is_empty() {
        Line::from(vec![
            Span::raw(PROMPT),
            Span::styled(NAME_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![Span::raw(PROMPT), Span::raw(name.text())])
    };
    frame.render_widget(Paragraph::new(field), field_area);

    let button_style = if board.can_create() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(CREATE_BUTTON).style(button_style), button_area);

    if let Some(error) = board.visible_error() {
        let line = Paragraph::new(format!("! {error}")).style(Style::default().fg(Color::Red));
        frame.render_widget(line, error_row);
    }

    if focused {
        let prompt_width = PROMPT.chars().count() as u16;
        let text_area = Rect { x: field_area.x.saturating_add(prompt_width), ..field_area };
        set_field_cursor(frame, text_area, name.cursor());
    }
}

/// Available rooms with the highlighted one marked.
fn render_list(frame: &mut Frame, board: &Board, area: Rect) {
    let focused = board.focus() == BoardFocus::RoomList && board.selected().is_none();
    let border_style =
        if focused { Style::default().fg(Color::Yellow) } else { Style::default() };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Salas Disponíveis ");

    if board.rooms().is_empty() {
        let empty = Paragraph::new(EMPTY_LIST)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let row_width = usize::from(area.width.saturating_sub(BORDER_SIZE));
    let button_width = OPEN_BUTTON.chars().count();
    let name_width = row_width.saturating_sub(button_width + 1);

    let items: Vec<ListItem> = board
        .rooms()
        .iter()
        .map(|room| {
            let name: String = room.name.chars().take(name_width).collect();
            let padding = name_width.saturating_sub(name.chars().count()) + 1;
            ListItem::new(Line::from(vec![
                Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" ".repeat(padding)),
                Span::styled(OPEN_BUTTON, Style::default().fg(Color::Blue)),
            ]))
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(Color::DarkGray).fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);
    let mut state = ListState::default().with_selected(Some(board.highlighted()));

    frame.render_stateful_widget(list, area, &mut state);
}
