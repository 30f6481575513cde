use engine::{CATEGORIES, CURRENCY_SYMBOL, MoneyCents};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, BUDGET_SUGGESTIONS},
    session::Screen,
    ui::{
        components::form::{centered_box, panel, render_message, render_note},
        theme::Theme,
    },
};

const STEPS: usize = 3;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let screen = state.session.screen();
    let step = screen.onboarding_step().unwrap_or(1);
    let card_area = centered_box(60, 22, area);
    let inner = panel(
        frame,
        card_area,
        &format!("Getting started · step {step} of {STEPS}"),
        theme,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress
            Constraint::Length(1),
            Constraint::Min(0),    // Step body
            Constraint::Length(1), // Message
            Constraint::Length(1), // Keys
        ])
        .margin(1)
        .split(inner);

    render_progress(frame, layout[0], step, theme);

    let keys = match screen {
        Screen::OnboardingBudget => {
            render_budget(frame, layout[2], state, theme);
            "Tab suggestion  Enter next  Esc back"
        }
        Screen::OnboardingCategories => {
            render_categories(frame, layout[2], state, theme);
            "↑↓ move  Space toggle  Enter finish  Esc back"
        }
        _ => {
            render_welcome(frame, layout[2], state, theme);
            "Enter get started"
        }
    };

    render_message(
        frame,
        layout[3],
        state.onboarding.message.as_deref(),
        false,
        theme,
    );
    render_note(frame, layout[4], keys, theme);
}

fn render_progress(frame: &mut Frame<'_>, area: Rect, step: usize, theme: &Theme) {
    let spans: Vec<Span<'static>> = (1..=STEPS)
        .map(|at| {
            let color = if at <= step { theme.accent } else { theme.border };
            Span::styled("━━━━━━━━ ", Style::default().fg(color))
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_welcome(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let name = state
        .session
        .user()
        .map(|user| user.name.as_str())
        .unwrap_or("there");
    let bullet = |text: &'static str| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(theme.accent)),
            Span::styled(text, Style::default().fg(theme.text)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            format!("Welcome to FinanceFlow, {name}!"),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Two quick questions and you are set:",
            Style::default().fg(theme.text_muted),
        )),
        Line::default(),
        bullet("Track income and expenses by category"),
        bullet("See where your money goes each month"),
        bullet("Stay within a monthly budget"),
        bullet("Export your data as CSV or JSON"),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_budget(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let form = &state.onboarding;
    let mut lines = vec![
        Line::from(Span::styled(
            "What is your monthly budget?",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{CURRENCY_SYMBOL} "), Style::default().fg(theme.accent)),
            Span::styled(format!("{}│", form.budget), Style::default().fg(theme.text)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Suggestions",
            Style::default().fg(theme.text_muted),
        )),
    ];

    for rupees in BUDGET_SUGGESTIONS {
        let active = form.budget == rupees.to_string();
        let style = if active {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_muted)
        };
        let marker = if active { "▸ " } else { "  " };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", MoneyCents::from_major(rupees)),
            style,
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_categories(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let form = &state.onboarding;
    let mut lines = vec![
        Line::from(Span::styled(
            "Which categories do you spend on?",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("{} of {} selected", form.selected.len(), CATEGORIES.len()),
            Style::default().fg(theme.text_muted),
        )),
        Line::default(),
    ];

    for (at, category) in CATEGORIES.iter().enumerate() {
        let selected = form.is_selected(category.id);
        let (r, g, b) = category.rgb();
        let check = if selected { "[x]" } else { "[ ]" };
        let mut name_style = Style::default().fg(if selected {
            theme.text
        } else {
            theme.text_muted
        });
        if at == form.cursor {
            name_style = name_style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(vec![
            Span::styled(format!(" {check} "), Style::default().fg(theme.accent)),
            Span::styled("● ", Style::default().fg(Color::Rgb(r, g, b))),
            Span::styled(category.name, name_style),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
