use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::{
    app::{AppState, LoginField},
    backend::{DEMO_EMAIL, DEMO_PASSWORD},
    ui::{
        components::form::{centered_box, panel, render_input, render_message, render_note},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card_area = centered_box(52, 14, area);
    let inner = panel(frame, card_area, "FinanceFlow · sign in", theme);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Greeting
            Constraint::Length(1),
            Constraint::Length(1), // Email
            Constraint::Length(1), // Password
            Constraint::Length(1),
            Constraint::Length(1), // Message
            Constraint::Length(1),
            Constraint::Length(1), // Keys
            Constraint::Length(1),
            Constraint::Length(1), // Demo
        ])
        .margin(1)
        .split(inner);

    let login = &state.login;
    render_note(frame, rows[0], "Welcome back. Track every rupee.", theme);
    render_input(
        frame,
        rows[2],
        "Email",
        &login.email,
        false,
        login.focus == LoginField::Email,
        theme,
    );
    render_input(
        frame,
        rows[3],
        "Password",
        &login.password,
        true,
        login.focus == LoginField::Password,
        theme,
    );
    render_message(frame, rows[5], login.message.as_deref(), false, theme);
    render_note(
        frame,
        rows[7],
        "Enter sign in  Ctrl+N sign up  Ctrl+F forgot",
        theme,
    );
    render_note(
        frame,
        rows[9],
        &format!("Ctrl+D demo: {DEMO_EMAIL} / {DEMO_PASSWORD}"),
        theme,
    );
}
