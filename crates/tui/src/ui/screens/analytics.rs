use engine::stats::{Insight, InsightTone};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::{
    app::AppState,
    store::Ledger,
    ui::{
        components::{
            card::{Card, StatCard},
            charts::render_trend,
            money::styled_spending_change,
        },
        screens::dashboard::{breakdown_lines, transaction_lines},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, ledger: &Ledger, theme: &Theme) {
    let summary = ledger.analytics(state.session.user(), state.today);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Figures
            Constraint::Min(10),   // Trend and breakdown
            Constraint::Length(9), // Top expenses and insights
        ])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(layout[0]);
    let muted = Style::default().fg(theme.text_muted);

    StatCard::new(
        "This month",
        Span::styled(summary.current_total.to_string(), Style::default().fg(theme.negative)),
        theme,
    )
    .subtitle(Span::styled(
        format!("{} expenses", summary.current_count),
        muted,
    ))
    .render(frame, cols[0]);
    StatCard::new(
        "Last month",
        Span::styled(summary.previous_total.to_string(), Style::default().fg(theme.text)),
        theme,
    )
    .subtitle(Span::styled(
        format!("{} expenses", summary.previous_count),
        muted,
    ))
    .render(frame, cols[1]);
    StatCard::new(
        "Change",
        styled_spending_change(summary.delta_percent, theme),
        theme,
    )
    .subtitle(Span::styled("vs last month", muted))
    .render(frame, cols[2]);
    StatCard::new(
        "Average",
        Span::styled(
            summary.average_transaction.to_string(),
            Style::default().fg(theme.text),
        ),
        theme,
    )
    .subtitle(Span::styled("per expense", muted))
    .render(frame, cols[3]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);
    let card = Card::new("Last 6 months", theme);
    let inner = card.inner(middle[0]);
    card.render_frame(frame, middle[0]);
    render_trend(frame, inner, &summary.trend, theme);
    Card::new(&format!("Categories · {}", summary.period.label()), theme).render_with(
        frame,
        middle[1],
        Paragraph::new(breakdown_lines(&summary.breakdown, theme)),
    );

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(layout[2]);
    Card::new("Top expenses", theme).render_with(
        frame,
        bottom[0],
        Paragraph::new(transaction_lines(&summary.top_expenses, theme)),
    );
    Card::new("Insights", theme).render_with(
        frame,
        bottom[1],
        Paragraph::new(insight_lines(&summary.insights, theme)).wrap(Wrap { trim: true }),
    );
}

fn insight_lines(insights: &[Insight], theme: &Theme) -> Vec<Line<'static>> {
    if insights.is_empty() {
        return vec![Line::from(Span::styled(
            "Nothing stands out this month.",
            Style::default().fg(theme.text_muted),
        ))];
    }

    insights
        .iter()
        .flat_map(|insight| {
            let (mark, color) = match insight.tone() {
                InsightTone::Warning => ("! ", theme.warning),
                InsightTone::Success => ("✓ ", theme.positive),
                InsightTone::Info => ("i ", theme.accent),
            };
            [
                Line::from(vec![
                    Span::styled(mark, Style::default().fg(color)),
                    Span::styled(
                        insight.title(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("  {}", insight.message()),
                    Style::default().fg(theme.text),
                )),
            ]
        })
        .collect()
}
