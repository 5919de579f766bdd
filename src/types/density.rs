//! Screen densities and the per-asset size tables.
//!
//! Each generated image kind has one pixel size per Android density bucket.
//! The output folder for a (kind, density) pair is `<prefix>-<density>`,
//! e.g. `mipmap-xhdpi` or `drawable-xxhdpi`.

use std::fmt;

use serde::Serialize;

/// Android screen density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// All densities, lowest first.
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The image assets generated for every flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    /// Square launcher icon on a rounded plate.
    Launcher,
    /// Glyph-only foreground layer of the adaptive icon.
    AdaptiveForeground,
    /// Splash screen image.
    Splash,
}

impl AssetKind {
    /// All kinds, in generation order.
    pub const ALL: [AssetKind; 3] = [
        AssetKind::Launcher,
        AssetKind::AdaptiveForeground,
        AssetKind::Splash,
    ];

    const LAUNCHER_SIZES: [u32; 5] = [48, 72, 96, 144, 192];
    // Foregrounds carry padding for the adaptive-icon safe zone.
    const FOREGROUND_SIZES: [u32; 5] = [108, 162, 216, 324, 432];
    const SPLASH_SIZES: [u32; 5] = [480, 800, 1280, 1920, 2560];

    /// Side length in pixels of this asset at `density`.
    pub fn size(self, density: Density) -> u32 {
        let table = match self {
            AssetKind::Launcher => &Self::LAUNCHER_SIZES,
            AssetKind::AdaptiveForeground => &Self::FOREGROUND_SIZES,
            AssetKind::Splash => &Self::SPLASH_SIZES,
        };
        table[density.index()]
    }

    /// Resource folder prefix.
    pub fn folder_prefix(self) -> &'static str {
        match self {
            AssetKind::Launcher | AssetKind::AdaptiveForeground => "mipmap",
            AssetKind::Splash => "drawable",
        }
    }

    /// Resource folder name for `density`, e.g. `mipmap-hdpi`.
    pub fn folder(self, density: Density) -> String {
        format!("{}-{}", self.folder_prefix(), density)
    }

    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Launcher => "ic_launcher.png",
            AssetKind::AdaptiveForeground => "ic_launcher_foreground.png",
            AssetKind::Splash => "splash_image.png",
        }
    }

    /// Human-readable name for listings.
    pub fn description(self) -> &'static str {
        match self {
            AssetKind::Launcher => "launcher icon",
            AssetKind::AdaptiveForeground => "adaptive foreground",
            AssetKind::Splash => "splash image",
        }
    }

    /// Every (density, size) pair of this kind.
    pub fn targets(self) -> impl Iterator<Item = (Density, u32)> {
        Density::ALL.into_iter().map(move |d| (d, self.size(d)))
    }
}
