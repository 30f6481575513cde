use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    app::AppState,
    ui::{
        components::form::{centered_box, panel, render_input, render_message, render_note},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card_area = centered_box(52, 10, area);
    let inner = panel(frame, card_area, "Reset password", theme);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Intro
            Constraint::Length(1),
            Constraint::Length(1), // Email
            Constraint::Length(1), // Message
            Constraint::Length(1),
            Constraint::Length(1), // Keys
        ])
        .margin(1)
        .split(inner);

    let form = &state.forgot;
    render_note(frame, rows[0], "We will email you a reset link.", theme);
    render_input(frame, rows[2], "Email", &form.email, false, !form.sent, theme);
    render_message(frame, rows[3], form.message.as_deref(), form.sent, theme);
    let keys = if form.sent {
        "Enter back to sign in"
    } else {
        "Enter send  Esc back"
    };
    render_note(frame, rows[5], keys, theme);
}
