use engine::{
    Transaction, UNKNOWN_CATEGORY, category,
    stats::{CategoryTotal, DashboardSummary},
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::AppState,
    store::Ledger,
    ui::{
        components::{
            card::{Card, StatCard},
            charts::{ascii_bar, render_trend},
            money::{budget_gauge, styled_amount, styled_balance},
        },
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, ledger: &Ledger, theme: &Theme) {
    let summary = ledger.dashboard(state.session.user(), state.today);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Month figures
            Constraint::Length(3), // Budget
            Constraint::Min(8),    // Breakdown and trend
            Constraint::Length(8), // Recent
        ])
        .split(area);

    render_figures(frame, layout[0], &summary, theme);
    render_budget(frame, layout[1], &summary, state, theme);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(layout[2]);
    let card = Card::new("Spending by category", theme);
    card.render_with(
        frame,
        middle[0],
        Paragraph::new(breakdown_lines(&summary.breakdown, theme)),
    );
    let card = Card::new("Last 7 days", theme);
    let inner = card.inner(middle[1]);
    card.render_frame(frame, middle[1]);
    render_trend(frame, inner, &summary.trend, theme);

    let card = Card::new("Recent transactions", theme);
    card.render_with(
        frame,
        layout[3],
        Paragraph::new(transaction_lines(&summary.recent, theme)),
    );
}

fn render_figures(frame: &mut Frame<'_>, area: Rect, summary: &DashboardSummary, theme: &Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    let month = Span::styled(summary.period.label(), Style::default().fg(theme.text_muted));

    StatCard::new(
        "Income",
        Span::styled(summary.income.to_string(), Style::default().fg(theme.positive)),
        theme,
    )
    .subtitle(month.clone())
    .render(frame, cols[0]);
    StatCard::new(
        "Expenses",
        Span::styled(summary.expenses.to_string(), Style::default().fg(theme.negative)),
        theme,
    )
    .subtitle(month.clone())
    .render(frame, cols[1]);
    StatCard::new("Balance", styled_balance(summary.balance, theme), theme)
        .subtitle(month)
        .render(frame, cols[2]);
}

fn render_budget(
    frame: &mut Frame<'_>,
    area: Rect,
    summary: &DashboardSummary,
    state: &AppState,
    theme: &Theme,
) {
    let card = Card::new("Monthly budget", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let budget = state.session.user().map(|user| user.monthly_budget);
    match (summary.budget_band, budget) {
        (Some(band), Some(budget)) => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(10), Constraint::Length(28)])
                .split(inner);
            frame.render_widget(budget_gauge(summary.budget_used_percent, band, theme), cols[0]);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" {} of {}", summary.expenses.compact(), budget.compact()),
                    Style::default().fg(theme.text_muted),
                )),
                cols[1],
            );
        }
        _ => frame.render_widget(
            Paragraph::new(Span::styled(
                "No budget set. Add one in Settings.",
                Style::default().fg(theme.text_muted),
            )),
            inner,
        ),
    }
}

pub(crate) fn breakdown_lines(breakdown: &[CategoryTotal], theme: &Theme) -> Vec<Line<'static>> {
    if breakdown.is_empty() {
        return vec![Line::from(Span::styled(
            "No expenses this month.",
            Style::default().fg(theme.text_muted),
        ))];
    }

    breakdown
        .iter()
        .map(|row| {
            let (r, g, b) = row.category.rgb();
            let color = Color::Rgb(r, g, b);
            Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(
                    format!("{:<18}", row.category.name),
                    Style::default().fg(theme.text),
                ),
                Span::styled(ascii_bar(row.share, 100.0, 10), Style::default().fg(color)),
                Span::styled(
                    format!(" {:>3.0}%  ", row.share),
                    Style::default().fg(theme.text_muted),
                ),
                Span::styled(row.total.to_string(), Style::default().fg(theme.text)),
            ])
        })
        .collect()
}

pub(crate) fn transaction_lines(txs: &[Transaction], theme: &Theme) -> Vec<Line<'static>> {
    if txs.is_empty() {
        return vec![Line::from(Span::styled(
            "No transactions yet. Press n to add one.",
            Style::default().fg(theme.text_muted),
        ))];
    }

    txs.iter()
        .map(|tx| {
            let name = category(&tx.category).map_or(UNKNOWN_CATEGORY, |c| c.name);
            Line::from(vec![
                Span::styled(
                    format!("{}  ", tx.date.format("%d %b")),
                    Style::default().fg(theme.text_muted),
                ),
                Span::styled(format!("{name:<18}"), Style::default().fg(theme.text_muted)),
                Span::styled(
                    format!("{:<28}", truncate(&tx.description, 26)),
                    Style::default().fg(theme.text),
                ),
                styled_amount(tx.amount, tx.kind, theme),
            ])
        })
        .collect()
}

/// Cuts `text` to `max` characters, marking the cut with `…`.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
