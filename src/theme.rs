//! Color themes for the NullForums UI.
//!
//! Two palettes: the default dark theme and a light theme. The active
//! theme is persisted as a preference (see [`crate::storage`]) and read
//! once at startup.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Display theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Flip between dark and light.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// The color palette for this theme.
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &DARK,
            Theme::Light => &LIGHT,
        }
    }
}

/// Colors consumed by every view. Views never hardcode colors; they take
/// the active palette from [`crate::app::App`].
#[derive(Debug, Clone)]
pub struct Palette {
    /// Default border color
    pub border: Color,
    /// Highlights and selected rows
    pub accent: Color,
    /// Header logo and dialog titles
    pub header: Color,
    /// De-emphasized text (hints, timestamps)
    pub dim: Color,
    /// Background for text input boxes
    pub input_bg: Color,
    /// Background behind modal dialogs
    pub dialog_bg: Color,
    /// Header background once the page is scrolled
    pub header_scrolled_bg: Color,
    /// Toast severity colors
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub info: Color,
}

static DARK: Palette = Palette {
    border: Color::DarkGray,
    accent: Color::White,
    header: Color::White,
    dim: Color::DarkGray,
    input_bg: Color::Rgb(20, 20, 30),
    dialog_bg: Color::Rgb(10, 15, 35),
    header_scrolled_bg: Color::Rgb(15, 15, 25),
    success: Color::Rgb(4, 181, 117),
    error: Color::Red,
    warning: Color::Yellow,
    info: Color::Rgb(0, 122, 204),
};

static LIGHT: Palette = Palette {
    border: Color::Gray,
    accent: Color::Black,
    header: Color::Black,
    dim: Color::Gray,
    input_bg: Color::Rgb(235, 235, 240),
    dialog_bg: Color::Rgb(245, 245, 250),
    header_scrolled_bg: Color::Rgb(225, 225, 235),
    success: Color::Rgb(3, 140, 90),
    error: Color::Rgb(200, 30, 30),
    warning: Color::Rgb(180, 120, 0),
    info: Color::Rgb(0, 90, 160),
};
