//! Sign-in form
//!
//! Email/password form with a link toggling between sign-in and registration.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use roomboard_app::{SignInField, SignInForm, TextInput};

use super::{centered, set_field_cursor};

const FORM_WIDTH: u16 = 52;
const FORM_HEIGHT: u16 = 11;
const LABEL_WIDTH: u16 = 10;
const EMAIL_PLACEHOLDER: &str = "Seu e-mail";
const PASSWORD_PLACEHOLDER: &str = "Sua senha";
const PASSWORD_MASK: char = '*';
const SUBMITTING_LABEL: &str = "Aguarde...";

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Render the form centered in `area`.
pub fn render(frame: &mut Frame, form: &SignInForm, area: Rect) {
    let popup = centered(area, FORM_WIDTH, FORM_HEIGHT);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(format!(" {} ", form.title())).centered());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [_, email_row, password_row, _, submit_row, toggle_row, _, message_row] =
        Layout::vertical([Constraint::Length(1); 8]).areas(inner);

    render_field(
        frame,
        "E-mail",
        form.email().text(),
        EMAIL_PLACEHOLDER,
        form.focus() == SignInField::Email,
        email_row,
    );

    let mask_len = form.password().text().chars().count();
    let masked: String = std::iter::repeat_n(PASSWORD_MASK, mask_len).collect();
    render_field(
        frame,
        "Senha",
        &masked,
        PASSWORD_PLACEHOLDER,
        form.focus() == SignInField::Password,
        password_row,
    );

    let submit_label = if form.is_submitting() { SUBMITTING_LABEL } else { form.submit_label() };
    let submit = Paragraph::new(format!("[ {submit_label} ]"))
        .alignment(Alignment::Center)
        .style(focus_style(form.focus() == SignInField::Submit));
    frame.render_widget(submit, submit_row);

    let toggle_style = focus_style(form.focus() == SignInField::Toggle).fg(Color::Blue);
    let toggle =
        Paragraph::new(form.toggle_label()).alignment(Alignment::Center).style(toggle_style);
    frame.render_widget(toggle, toggle_row);

    let message = match (form.error(), form.notice()) {
        (Some(error), _) => Some((error, Color::Red)),
        (None, Some(notice)) => Some((notice, Color::Green)),
        (None, None) => None,
    };
    if let Some((text, color)) = message {
        let line =
            Paragraph::new(text).alignment(Alignment::Center).style(Style::default().fg(color));
        frame.render_widget(line, message_row);
    }

    let cursor_field = match form.focus() {
        SignInField::Email => Some((form.email(), email_row)),
        SignInField::Password => Some((form.password(), password_row)),
        SignInField::Submit | SignInField::Toggle => None,
    };
    if let Some((field, row)) = cursor_field {
        place_cursor(frame, field, row);
    }
}

fn render_field(
    frame: &mut Frame,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    row: Rect,
) {
    let width = usize::from(LABEL_WIDTH - 1);
    let label = Span::styled(format!(" {label:<width$}"), focus_style(focused));
    let value = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value.to_string())
    };
    frame.render_widget(Paragraph::new(Line::from(vec![label, value])), row);
}

fn place_cursor(frame: &mut Frame, field: &TextInput, row: Rect) {
    let text_area = Rect {
        x: row.x.saturating_add(LABEL_WIDTH),
        width: row.width.saturating_sub(LABEL_WIDTH),
        ..row
    };
    set_field_cursor(frame, text_area, field.cursor());
}
