use engine::stats::TrendPoint;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::BarChart,
};

use crate::ui::theme::Theme;

/// Vertical bars for a trend series, labeled with each point's label.
pub fn render_trend(frame: &mut Frame<'_>, area: Rect, points: &[TrendPoint], theme: &Theme) {
    let data: Vec<(&str, u64)> = points
        .iter()
        .map(|point| (point.label, rupees(point)))
        .collect();
    let bar_width = if points.is_empty() {
        3
    } else {
        (area.width / points.len() as u16).saturating_sub(1).clamp(3, 9)
    };

    let chart = BarChart::default()
        .data(data.as_slice())
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(theme.accent))
        .value_style(
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(theme.text_muted));
    frame.render_widget(chart, area);
}

fn rupees(point: &TrendPoint) -> u64 {
    u64::try_from(point.total.cents() / 100).unwrap_or(0)
}

/// `████████░░░░` for `value / max`.
#[must_use]
pub fn ascii_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    let ratio = (value / max).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    let empty = width.saturating_sub(filled);

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_fill_proportionally() {
        assert_eq!(ascii_bar(50.0, 100.0, 4), "██░░");
        assert_eq!(ascii_bar(250.0, 100.0, 4), "████");
        assert_eq!(ascii_bar(1.0, 0.0, 3), "░░░");
    }
}
