//! Core domain types.
//!
//! - `Colour` - RGBA colour values
//! - `ColourScheme` - the colour roles of a flavor
//! - `Glyph` - the symbol drawn on the assets
//! - `Density` / `AssetKind` - output size tables
//! - `Flavor` - a branded app variant

mod colour;
mod density;
mod flavor;
mod glyph;
mod scheme;

pub use colour::Colour;
pub use density::{AssetKind, Density};
pub use flavor::{BuiltinFlavors, Flavor};
pub use glyph::Glyph;
pub use scheme::ColourScheme;
