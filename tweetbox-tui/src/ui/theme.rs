use ratatui::style::Color;

pub struct ThemeColors {
    pub primary: Color,
    pub accent: Color,
    pub text: Color,
    pub text_dim: Color,
    pub background: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub highlight_bg: Color,
}

/// Twitter blue on a dark background
impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(29, 155, 240),   // Twitter blue
            accent: Color::Rgb(120, 200, 255),   // Light blue
            text: Color::Rgb(231, 233, 234),     // Off-white
            text_dim: Color::Rgb(113, 118, 123), // Gray
            background: Color::Rgb(0, 0, 0),
            border: Color::Rgb(47, 51, 54),
            success: Color::Rgb(0, 186, 124),
            warning: Color::Rgb(255, 212, 0),
            error: Color::Rgb(244, 33, 46),
            highlight_bg: Color::Rgb(22, 24, 28),
        }
    }
}
