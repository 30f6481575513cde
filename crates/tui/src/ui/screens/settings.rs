use engine::{CATEGORIES, category};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::{AppState, SettingsField},
    store::Ledger,
    ui::{
        components::{card::Card, form::render_input},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, ledger: &Ledger, theme: &Theme) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Profile
            Constraint::Length(5), // Categories
            Constraint::Min(7),    // Preferences and data
        ])
        .split(area);

    render_profile(frame, layout[0], state, theme);
    render_categories(frame, layout[1], state, theme);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[2]);
    render_preferences(frame, cols[0], state, theme);
    render_data(frame, cols[1], state, ledger, theme);
}

fn render_profile(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let form = &state.settings;
    let card = Card::new("Profile", theme).focused(form.editing.is_some());
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let email = state
        .session
        .user()
        .map(|user| user.email.as_str())
        .unwrap_or("");
    render_input(
        frame,
        rows[0],
        "Name",
        &form.name,
        false,
        form.editing == Some(SettingsField::Name),
        theme,
    );
    render_input(frame, rows[1], "Email", email, false, false, theme);
    render_input(
        frame,
        rows[2],
        "Budget ₹",
        &form.budget,
        false,
        form.editing == Some(SettingsField::Budget),
        theme,
    );

    let note = if form.editing.is_some() {
        "Tab switch field  Enter save  Esc cancel"
    } else {
        "Enter edit name and budget"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(note, Style::default().fg(theme.text_muted))),
        rows[4],
    );
}

fn render_categories(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let selected = state
        .session
        .user()
        .map(|user| user.selected_categories.as_slice())
        .unwrap_or_default();
    let names: Vec<&str> = if selected.is_empty() {
        CATEGORIES.iter().map(|c| c.name).collect()
    } else {
        selected
            .iter()
            .map(|id| category(id).map_or(id.as_str(), |c| c.name))
            .collect()
    };

    Card::new("Tracked categories", theme).render_with(
        frame,
        area,
        Paragraph::new(Span::styled(names.join(", "), Style::default().fg(theme.text)))
            .wrap(Wrap { trim: true }),
    );
}

fn render_preferences(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Theme      ", Style::default().fg(theme.text_muted)),
            Span::styled(
                state.theme.label(),
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   t toggle", Style::default().fg(theme.accent)),
        ]),
        Line::from(vec![
            Span::styled("Backend    ", Style::default().fg(theme.text_muted)),
            Span::styled(
                if state.offline { "in-memory demo" } else { "server" },
                Style::default().fg(theme.text),
            ),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("o", Style::default().fg(theme.accent)),
            Span::styled(" sign out", Style::default().fg(theme.text)),
        ]),
    ];
    Card::new("Preferences", theme).render_with(frame, area, Paragraph::new(lines));
}

fn render_data(frame: &mut Frame<'_>, area: Rect, state: &AppState, ledger: &Ledger, theme: &Theme) {
    let confirming = state.settings.confirm_clear;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Transactions  ", Style::default().fg(theme.text_muted)),
            Span::styled(
                ledger.transactions().len().to_string(),
                Style::default().fg(theme.text),
            ),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("j", Style::default().fg(theme.accent)),
            Span::styled(" export everything as JSON", Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("x", Style::default().fg(theme.accent)),
            Span::styled(" clear all transactions", Style::default().fg(theme.text)),
        ]),
    ];
    if confirming {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Delete every transaction? y yes  n no",
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )));
    }

    Card::new("Data", theme)
        .focused(confirming)
        .render_with(frame, area, Paragraph::new(lines));
}
