use engine::{
    MoneyCents, TransactionKind,
    stats::BudgetBand,
};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Gauge,
};

use crate::ui::theme::Theme;

/// `+₹500` in green for income, `-₹500` in red for expenses.
#[must_use]
pub fn styled_amount(amount: MoneyCents, kind: TransactionKind, theme: &Theme) -> Span<'static> {
    let (color, prefix) = match kind {
        TransactionKind::Income => (theme.positive, "+"),
        TransactionKind::Expense => (theme.negative, "-"),
    };
    Span::styled(format!("{prefix}{amount}"), Style::default().fg(color))
}

/// A balance: green when positive, red when negative.
#[must_use]
pub fn styled_balance(amount: MoneyCents, theme: &Theme) -> Span<'static> {
    let color = if amount.is_negative() {
        theme.negative
    } else if amount.is_positive() {
        theme.positive
    } else {
        theme.text
    };
    Span::styled(
        amount.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

pub fn band_color(band: BudgetBand, theme: &Theme) -> Color {
    match band {
        BudgetBand::OnTrack => theme.positive,
        BudgetBand::Approaching => theme.warning,
        BudgetBand::Over => theme.negative,
    }
}

/// Budget usage gauge; the bar stops at full while the label keeps the
/// real percentage.
#[must_use]
pub fn budget_gauge(used_percent: f64, band: BudgetBand, theme: &Theme) -> Gauge<'static> {
    let percent = used_percent.clamp(0.0, 100.0).round() as u16;
    Gauge::default()
        .gauge_style(Style::default().fg(band_color(band, theme)).bg(theme.border))
        .percent(percent)
        .label(format!("{used_percent:.0}% used"))
}

/// Month-over-month spending change. More spending reads as bad.
///
/// Returns something like `▲ +12.3%` (red) or `▼ -4.0%` (green).
#[must_use]
pub fn styled_spending_change(change: f64, theme: &Theme) -> Span<'static> {
    let (arrow, color) = if change > 0.0 {
        ("▲", theme.negative)
    } else if change < 0.0 {
        ("▼", theme.positive)
    } else {
        ("=", theme.text_muted)
    };

    let sign = if change > 0.0 { "+" } else { "" };
    Span::styled(
        format!("{arrow} {sign}{change:.1}%"),
        Style::default().fg(color),
    )
}
