//! Building blocks of the centered auth and onboarding forms.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::ui::theme::Theme;

pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Clears `area`, draws a titled rounded box and returns its inner area.
pub fn panel(frame: &mut Frame<'_>, area: Rect, title: &str, theme: &Theme) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.surface).fg(theme.text));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// `label  value│` with the cursor on the focused field.
pub fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    value: &str,
    masked: bool,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let shown = if masked {
        mask_password(value)
    } else {
        value.to_string()
    };

    let (label_style, value_style) = if focused {
        (
            Style::default().fg(theme.accent),
            Style::default().fg(theme.text),
        )
    } else {
        (
            Style::default().fg(theme.text_muted),
            Style::default().fg(theme.text_muted),
        )
    };

    let line = Line::from(vec![
        Span::styled(format!("{label:<12}"), label_style),
        Span::styled(format!("{shown}{cursor}"), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// One bullet per character.
fn mask_password(password: &str) -> String {
    "•".repeat(password.chars().count())
}

/// A centered message line, in the error color unless `ok`.
pub fn render_message(
    frame: &mut Frame<'_>,
    area: Rect,
    message: Option<&str>,
    ok: bool,
    theme: &Theme,
) {
    let Some(message) = message else {
        return;
    };
    let color = if ok { theme.positive } else { theme.error };
    frame.render_widget(
        Paragraph::new(Span::styled(message.to_string(), Style::default().fg(color)))
            .alignment(Alignment::Center),
        area,
    );
}

/// Muted centered text, for footers like `Ctrl+N  create an account`.
pub fn render_note(frame: &mut Frame<'_>, area: Rect, text: &str, theme: &Theme) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            text.to_string(),
            Style::default().fg(theme.text_muted),
        ))
        .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_masked_per_character() {
        assert_eq!(mask_password(""), "");
        assert_eq!(mask_password("pässwd"), "••••••");
    }

    #[test]
    fn centered_box_never_exceeds_the_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_box(40, 6, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 6);
        assert_eq!(rect.y, 2);
    }
}
