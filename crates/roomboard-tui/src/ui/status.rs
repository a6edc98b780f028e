//! Status bar
//!
//! Displays the route, the signed-in user and key hints for the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use roomboard_app::{App, Screen, SessionStatus};

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let session = match app.session() {
        SessionStatus::Loading => Span::styled("Carregando...", Style::default().fg(Color::Yellow)),
        SessionStatus::Authenticated { user_id, .. } => Span::styled(
            user_id.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        SessionStatus::Unauthenticated => {
            Span::styled("não autenticado", Style::default().fg(Color::Red))
        },
    };

    let hints = match app.screen() {
        Screen::Loading => "Esc sair",
        Screen::SignIn => "Tab campo | Enter confirmar | Esc sair",
        Screen::Rooms if app.board().selected().is_some() => {
            "Enter enviar | F5 atualizar | Esc fechar"
        },
        Screen::Rooms => "Tab foco | Enter criar/abrir | F5 atualizar | F2 feedback | Esc sair",
        Screen::Feedback => "F2/Esc salas",
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        Span::raw(app.route().path()),
        Span::raw(" | "),
        session,
        Span::styled(format!(" | {hints}"), Style::default().fg(Color::Gray)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
