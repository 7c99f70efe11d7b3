//! TUI theme and styling

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Timer phase colors
    pub idle: Color,
    pub running: Color,
    pub paused: Color,
    pub done: Color,
    pub danger: Color,

    // UI elements
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ember()
    }
}

impl Theme {
    pub fn ember() -> Self {
        Self {
            background: Color::Rgb(22, 18, 16),
            border: Color::Rgb(80, 60, 45),
            selection: Color::Rgb(50, 38, 30),

            title: Color::Rgb(255, 170, 60),
            text: Color::Rgb(235, 215, 190),
            dimmed: Color::Rgb(130, 105, 85),
            hint: Color::Rgb(170, 140, 105),

            idle: Color::Rgb(110, 95, 80),
            running: Color::Rgb(120, 220, 120),
            paused: Color::Rgb(255, 200, 80),
            done: Color::Rgb(120, 200, 255),
            danger: Color::Rgb(255, 95, 75),

            accent: Color::Rgb(255, 170, 60),
        }
    }
}
