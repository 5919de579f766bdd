//! flavor-assets - Launcher icon and splash screen generator
//!
//! A library for rendering launcher icons, adaptive-icon foregrounds and
//! splash images for branded Android app flavors, and for writing the
//! resource XML that wires them up.

pub mod cli;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod output;
pub mod render;
pub mod resources;
pub mod types;
pub mod validation;

pub use error::{AssetError, Result};
pub use generator::{GeneratedFile, GenerationReport, Generator};
pub use manifest::{select_flavors, FlavorEntry, Manifest, MANIFEST_FILENAME};
pub use render::{
    render_adaptive_foreground, render_asset, render_launcher_icon, render_splash, write_png,
    Canvas,
};
pub use resources::{merge_colour, merge_colour_file, ColourMerge, ResLayout, WriteOutcome};
pub use types::{AssetKind, BuiltinFlavors, Colour, ColourScheme, Density, Flavor, Glyph};
pub use validation::{verify_flavor, Diagnostic, Severity, ValidationResult};
