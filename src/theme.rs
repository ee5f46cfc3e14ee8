//! Player palette and background themes

use serde::{Deserialize, Serialize};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Linear blend toward `other` (a = 0 keeps self, a = 1 gives other)
    pub fn blend(self, other: Color, a: f32) -> Color {
        let mix = |x: u8, y: u8| (x as f32 * (1.0 - a) + y as f32 * a) as u8;
        Color(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    /// Brighter variant for orb highlights
    pub fn highlight(self) -> Color {
        Color(
            self.0.saturating_add(60),
            self.1.saturating_add(60),
            self.2.saturating_add(60),
        )
    }
}

/// Player colors, in seat order
pub const PLAYER_COLORS: [Color; 8] = [
    Color(255, 80, 80),
    Color(80, 220, 120),
    Color(80, 120, 255),
    Color(255, 200, 80),
    Color(200, 80, 255),
    Color(255, 120, 180),
    Color(80, 220, 220),
    Color(220, 220, 220),
];

/// Display names matching `PLAYER_COLORS`
pub const PLAYER_NAMES: [&str; 8] = [
    "RED", "GREEN", "BLUE", "YELLOW", "PURPLE", "PINK", "CYAN", "WHITE",
];

/// Background theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn background(self) -> Color {
        match self {
            Theme::Dark => Color(10, 10, 10),
            Theme::Light => Color(245, 245, 245),
        }
    }

    pub fn cell(self) -> Color {
        match self {
            Theme::Dark => Color(30, 30, 30),
            Theme::Light => Color(220, 220, 220),
        }
    }

    pub fn text(self) -> Color {
        match self {
            Theme::Dark => Color(220, 220, 220),
            Theme::Light => Color(30, 30, 30),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}
