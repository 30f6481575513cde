use ratatui::style::Color;

use crate::local_state::ThemeMode;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            surface: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(140, 140, 140),
            border: Color::Rgb(60, 70, 80),
            border_focused: Color::Rgb(80, 160, 160),
            accent: Color::Rgb(80, 160, 160),
            positive: Color::Rgb(90, 190, 120),
            negative: Color::Rgb(220, 100, 100),
            warning: Color::Rgb(230, 180, 80),
            error: Color::Rgb(200, 80, 80),
        }
    }

    fn light() -> Self {
        Self {
            background: Color::Rgb(248, 248, 246),
            surface: Color::Rgb(255, 255, 255),
            text: Color::Rgb(30, 34, 40),
            text_muted: Color::Rgb(110, 116, 124),
            border: Color::Rgb(200, 204, 210),
            border_focused: Color::Rgb(20, 120, 120),
            accent: Color::Rgb(20, 120, 120),
            positive: Color::Rgb(30, 140, 70),
            negative: Color::Rgb(190, 50, 50),
            warning: Color::Rgb(180, 120, 0),
            error: Color::Rgb(180, 40, 40),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
