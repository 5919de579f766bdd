//! Glyph selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// The symbol drawn on a flavor's icons and splash screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    /// Two discs over a downward triangle.
    Heart,
    /// Medical cross of two crossed bars.
    Cross,
}

impl Glyph {
    pub fn name(self) -> &'static str {
        match self {
            Glyph::Heart => "heart",
            Glyph::Cross => "cross",
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Glyph {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heart" => Ok(Glyph::Heart),
            "cross" => Ok(Glyph::Cross),
            other => Err(AssetError::Config {
                message: format!("Unknown glyph: '{}'", other),
                help: Some("Use 'heart' or 'cross'".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("heart".parse::<Glyph>().unwrap(), Glyph::Heart);
        assert_eq!(" Cross ".parse::<Glyph>().unwrap(), Glyph::Cross);
        assert!("star".parse::<Glyph>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&Glyph::Cross).unwrap();
        assert_eq!(yaml.trim(), "cross");
        for glyph in [Glyph::Heart, Glyph::Cross] {
            assert_eq!(glyph.to_string().parse::<Glyph>().unwrap(), glyph);
        }
    }
}
