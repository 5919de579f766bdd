//! Colour schemes: the semantic colour roles of a flavor.

use serde::{Deserialize, Serialize};

use super::Colour;

/// Lightness shift used to derive `secondary` from `primary`.
const SECONDARY_DARKEN: f32 = 20.0;

/// Lightness shift used to derive `background` from `primary`.
const BACKGROUND_LIGHTEN: f32 = 88.0;

/// The four colour roles used by the renderers and resource files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourScheme {
    /// Icon plate and glyph colour on light backgrounds.
    pub primary: Colour,
    pub secondary: Colour,
    /// Glyph colour on the launcher icon plate.
    pub accent: Colour,
    /// Splash and adaptive-icon background.
    pub background: Colour,
}

impl ColourScheme {
    /// Teal 500 / 700 / 50.
    pub const TEAL: Self = Self {
        primary: Colour::rgb(0, 150, 136),
        secondary: Colour::rgb(0, 121, 107),
        accent: Colour::WHITE,
        background: Colour::rgb(224, 242, 241),
    };

    /// Indigo 500 / 700 / 50.
    pub const INDIGO: Self = Self {
        primary: Colour::rgb(63, 81, 181),
        secondary: Colour::rgb(48, 63, 159),
        accent: Colour::WHITE,
        background: Colour::rgb(232, 234, 246),
    };

    /// Build a scheme from a primary colour, deriving any missing role.
    pub fn derive(
        primary: Colour,
        secondary: Option<Colour>,
        accent: Option<Colour>,
        background: Option<Colour>,
    ) -> Self {
        Self {
            primary,
            secondary: secondary.unwrap_or_else(|| primary.darken(SECONDARY_DARKEN)),
            accent: accent.unwrap_or(Colour::WHITE),
            background: background.unwrap_or_else(|| primary.lighten(BACKGROUND_LIGHTEN)),
        }
    }

    /// Hex string of the background colour, as written to resource files.
    pub fn hex_background(&self) -> String {
        self.background.to_android_hex()
    }
}
