//! Android resource tree layout.

use std::path::{Path, PathBuf};

use crate::types::{AssetKind, Density, Flavor};

/// Default location of flavor source sets, relative to the project root.
pub const DEFAULT_ANDROID_DIR: &str = "android/app/src";

/// Folder holding the adaptive-icon definition (API 26+).
pub const ANYDPI_FOLDER: &str = "mipmap-anydpi-v26";

/// Resolves output paths under `<root>/<android dir>/<flavor>/res`.
#[derive(Debug, Clone)]
pub struct ResLayout {
    root: PathBuf,
    android_dir: PathBuf,
}

impl ResLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            android_dir: PathBuf::from(DEFAULT_ANDROID_DIR),
        }
    }

    /// Use a different flavor source directory (relative to the root).
    pub fn with_android_dir(mut self, android_dir: impl Into<PathBuf>) -> Self {
        self.android_dir = android_dir.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `res` directory of a flavor.
    pub fn res_dir(&self, flavor: &Flavor) -> PathBuf {
        self.root.join(&self.android_dir).join(&flavor.name).join("res")
    }

    /// Path of an image asset.
    pub fn asset_path(&self, flavor: &Flavor, kind: AssetKind, density: Density) -> PathBuf {
        self.res_dir(flavor)
            .join(kind.folder(density))
            .join(kind.file_name())
    }

    /// `mipmap-anydpi-v26/ic_launcher.xml`
    pub fn adaptive_icon_xml(&self, flavor: &Flavor) -> PathBuf {
        self.res_dir(flavor).join(ANYDPI_FOLDER).join("ic_launcher.xml")
    }

    /// `drawable/launch_background.xml`
    pub fn launch_background_xml(&self, flavor: &Flavor) -> PathBuf {
        self.res_dir(flavor).join("drawable").join("launch_background.xml")
    }

    /// `values/colors.xml`
    pub fn colors_xml(&self, flavor: &Flavor) -> PathBuf {
        self.res_dir(flavor).join("values").join("colors.xml")
    }

    /// Path relative to the flavor's `res` dir, for progress output.
    pub fn relative<'a>(&self, flavor: &Flavor, path: &'a Path) -> std::borrow::Cow<'a, str> {
        let res = self.res_dir(flavor);
        match path.strip_prefix(&res) {
            Ok(rel) => rel.to_string_lossy(),
            Err(_) => path.to_string_lossy(),
        }
    }
}
