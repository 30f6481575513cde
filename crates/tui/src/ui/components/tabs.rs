use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{session::Screen, ui::theme::Theme};

/// Shortcut letter for a main screen.
pub fn shortcut(screen: Screen) -> char {
    match screen {
        Screen::Expenses => 'e',
        Screen::Analytics => 'a',
        Screen::Settings => 's',
        _ => 'd',
    }
}

pub fn render_tabs(frame: &mut Frame<'_>, area: Rect, active: Screen, theme: &Theme) {
    let mut spans = vec![Span::raw(" ")];

    for (i, screen) in Screen::MAIN.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }

        spans.push(Span::styled(
            format!("{} ", shortcut(*screen)),
            Style::default().fg(theme.text_muted),
        ));
        let label = screen.title();
        if *screen == active {
            spans.push(Span::styled("[", Style::default().fg(theme.accent)));
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("]", Style::default().fg(theme.accent)));
        } else {
            spans.push(Span::styled(label, Style::default().fg(theme.text)));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
