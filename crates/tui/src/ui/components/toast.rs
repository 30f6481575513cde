use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{
    app::{Toast, ToastLevel},
    ui::theme::Theme,
};

/// Bottom-right notice above the hints bar.
pub fn render(frame: &mut Frame<'_>, area: Rect, toast: Option<&Toast>, theme: &Theme) {
    let Some(toast) = toast else {
        return;
    };
    let width = (toast.message.chars().count() + 4).min(area.width as usize) as u16;
    let height = 3u16;
    let x = area.x + area.width.saturating_sub(width + 1);
    let y = area
        .y
        .saturating_add(area.height.saturating_sub(height + 1));
    let rect = Rect { x, y, width, height };

    let color = match toast.level {
        ToastLevel::Info => theme.text,
        ToastLevel::Success => theme.positive,
        ToastLevel::Error => theme.error,
    };
    let style = Style::default().fg(color).bg(theme.surface);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style);
    frame.render_widget(Clear, rect);
    let content = Paragraph::new(Line::from(toast.message.as_str())).style(style);
    frame.render_widget(content.block(block), rect);
}
