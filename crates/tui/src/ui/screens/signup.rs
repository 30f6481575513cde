use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    app::{AppState, SignupField},
    ui::{
        components::form::{centered_box, panel, render_input, render_message, render_note},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card_area = centered_box(52, 12, area);
    let inner = panel(frame, card_area, "Create account", theme);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Email
            Constraint::Length(1), // Password
            Constraint::Length(1),
            Constraint::Length(1), // Message
            Constraint::Length(1),
            Constraint::Length(1), // Keys
        ])
        .margin(1)
        .split(inner);

    let form = &state.signup;
    let fields = [
        (SignupField::Name, "Name", form.name.as_str(), false),
        (SignupField::Email, "Email", form.email.as_str(), false),
        (SignupField::Password, "Password", form.password.as_str(), true),
    ];
    for (row, (field, label, value, masked)) in rows.iter().zip(fields) {
        render_input(frame, *row, label, value, masked, form.focus == field, theme);
    }

    render_message(frame, rows[4], form.message.as_deref(), false, theme);
    render_note(frame, rows[6], "Enter create  Tab next  Esc back", theme);
}
