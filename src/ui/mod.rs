pub mod braille;
pub mod menu;
pub mod overlay;
pub mod render;

use ratatui::style::Color;

use crate::config::DisplayConfig;

pub use overlay::{render_overlay, OverlayMessage};
pub use render::render;

/// Terminal colors taken from the display config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Color,
    pub accent: Color,
    pub dim: Color,
}

impl From<&DisplayConfig> for Palette {
    fn from(display: &DisplayConfig) -> Self {
        let rgb = |[r, g, b]: [u8; 3]| Color::Rgb(r, g, b);
        Self {
            foreground: rgb(display.foreground),
            accent: rgb(display.accent),
            dim: rgb(display.dim),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}
