use crossterm::style::Color;
use serde::{Deserialize, Serialize};

/// Named color themes selectable from the command line or config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    HighContrast,
}

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Clue number color
    pub number: Color,
    /// Entered letter color
    pub letter: Color,
    /// Selected cell background
    pub selected_bg: Color,
    /// Cells of the entry being typed
    pub word_bg: Color,
    /// Solved puzzle color
    pub success: Color,
    /// Filled-but-wrong color
    pub error: Color,
    /// Header/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Theme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 110, g: 115, b: 135 },
            number: Color::Rgb { r: 160, g: 165, b: 185 },
            letter: Color::Rgb { r: 255, g: 255, b: 255 },
            selected_bg: Color::Rgb { r: 150, g: 120, b: 20 },
            word_bg: Color::Rgb { r: 40, g: 60, b: 95 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme, close to a printed grid
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb { r: 255, g: 255, b: 255 },
            fg: Color::Rgb { r: 0, g: 0, b: 0 },
            border: Color::Rgb { r: 0, g: 0, b: 0 },
            number: Color::Rgb { r: 60, g: 60, b: 60 },
            letter: Color::Rgb { r: 0, g: 0, b: 0 },
            selected_bg: Color::Rgb { r: 255, g: 235, b: 59 },
            word_bg: Color::Rgb { r: 177, g: 215, b: 251 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            border: Color::White,
            number: Color::Grey,
            letter: Color::White,
            selected_bg: Color::DarkYellow,
            word_bg: Color::Blue,
            success: Color::Green,
            error: Color::Red,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }
}
