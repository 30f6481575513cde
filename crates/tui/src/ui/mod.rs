pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    app::{AppState, ExpensesMode},
    session::Screen,
    store::Ledger,
};
use components::hints::{KeyHint, hint_separator, hints_to_spans};

pub use terminal::{AppTerminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState, ledger: &Ledger) {
    let theme = Theme::for_mode(state.theme);
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    match state.session.screen() {
        Screen::Login => screens::login::render(frame, area, state, &theme),
        Screen::Signup => screens::signup::render(frame, area, state, &theme),
        Screen::ForgotPassword => screens::forgot::render(frame, area, state, &theme),
        screen if screen.is_onboarding() => {
            screens::onboarding::render(frame, area, state, &theme);
        }
        screen => render_shell(frame, area, screen, state, ledger, &theme),
    }

    render_pending(frame, area, state, &theme);
    components::toast::render(frame, area, state.toast.as_ref(), &theme);
}

fn render_shell(
    frame: &mut Frame<'_>,
    area: Rect,
    screen: Screen,
    state: &AppState,
    ledger: &Ledger,
    theme: &Theme,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Hints
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, ledger, theme);
    components::tabs::render_tabs(frame, layout[1], screen, theme);

    let content = layout[2];
    match screen {
        Screen::Expenses => screens::expenses::render(frame, content, state, ledger, theme),
        Screen::Analytics => screens::analytics::render(frame, content, state, ledger, theme),
        Screen::Settings => screens::settings::render(frame, content, state, ledger, theme),
        _ => screens::dashboard::render(frame, content, state, ledger, theme),
    }

    render_bottom_bar(frame, layout[3], screen, state, theme);
}

fn render_info_bar(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    ledger: &Ledger,
    theme: &Theme,
) {
    let name = state
        .session
        .user()
        .map(|user| user.name.as_str())
        .unwrap_or("-");

    let mut spans = vec![
        Span::styled(
            " FinanceFlow",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("User", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {name}  ")),
        Span::styled("Today", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}", state.today.format("%d %b %Y"))),
    ];
    if ledger.is_loading() {
        spans.push(Span::styled("  syncing", Style::default().fg(theme.accent)));
    }
    if state.offline {
        spans.push(Span::styled("  offline", Style::default().fg(theme.warning)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_bottom_bar(
    frame: &mut Frame<'_>,
    area: Rect,
    screen: Screen,
    state: &AppState,
    theme: &Theme,
) {
    let context = context_hints(screen, state);
    let mut parts = hints_to_spans(&context, theme);

    if !state.is_typing() {
        parts.push(hint_separator(theme));
        parts.extend(hints_to_spans(
            &[
                KeyHint::new("d/e/a/s", "nav"),
                KeyHint::new("n", "new"),
                KeyHint::new("r", "refresh"),
                KeyHint::new("q", "quit"),
            ],
            theme,
        ));
    }

    let mut line = vec![Span::raw(" ")];
    line.extend(parts);
    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

fn context_hints(screen: Screen, state: &AppState) -> Vec<KeyHint> {
    match screen {
        Screen::Expenses => match state.expenses.mode {
            ExpensesMode::List => vec![
                KeyHint::new("↑↓", "select"),
                KeyHint::new("Enter", "edit"),
                KeyHint::new("/", "search"),
                KeyHint::new("c", "category"),
                KeyHint::new("t", "type"),
                KeyHint::new("f", "reset"),
                KeyHint::new("x", "delete"),
                KeyHint::new("v", "csv"),
            ],
            ExpensesMode::Search => vec![
                KeyHint::new("Enter", "done"),
                KeyHint::new("Esc", "done"),
            ],
            ExpensesMode::Entry => vec![
                KeyHint::new("Tab", "next"),
                KeyHint::new("←→", "pick"),
                KeyHint::new("Enter", "save"),
                KeyHint::new("Esc", "cancel"),
            ],
            ExpensesMode::ConfirmDelete => vec![
                KeyHint::new("y", "delete"),
                KeyHint::new("n", "keep"),
            ],
        },
        Screen::Settings if state.settings.editing.is_some() => vec![
            KeyHint::new("Tab", "next"),
            KeyHint::new("Enter", "save"),
            KeyHint::new("Esc", "cancel"),
        ],
        Screen::Settings if state.settings.confirm_clear => vec![
            KeyHint::new("y", "clear everything"),
            KeyHint::new("n", "cancel"),
        ],
        Screen::Settings => vec![
            KeyHint::new("Enter", "edit profile"),
            KeyHint::new("t", "theme"),
            KeyHint::new("j", "json"),
            KeyHint::new("x", "clear data"),
            KeyHint::new("o", "sign out"),
        ],
        _ => vec![KeyHint::new("Ctrl+L", "sign out")],
    }
}

/// Label of the backend call in flight, on the bottom row.
fn render_pending(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let Some(label) = state.pending else {
        return;
    };
    let row = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{label} "),
            Style::default()
                .fg(theme.warning)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
        row,
    );
}
