//! Android resource files: output layout, XML documents and colour merging.

mod colours;
mod layout;
mod xml;

use std::fmt;

use serde::Serialize;

pub use colours::{
    fresh_document, merge_colour, merge_colour_file, parse_colours, ColourEntry, ColourMerge,
};
pub use layout::{ResLayout, ANYDPI_FOLDER, DEFAULT_ANDROID_DIR};
pub use xml::{
    adaptive_icon_xml, launch_background_xml, write_document, LAUNCHER_BACKGROUND,
    SPLASH_BACKGROUND,
};

/// What a write did to the file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

impl WriteOutcome {
    /// Status verb for progress output.
    pub fn verb(self) -> &'static str {
        match self {
            WriteOutcome::Created => "Created",
            WriteOutcome::Updated => "Updated",
            WriteOutcome::Unchanged => "Unchanged",
        }
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}
