//! Project manifest (flavors.yaml) parsing.
//!
//! The manifest is optional. Without one the builtin flavors are generated
//! into the default Android source tree.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AssetError, Result};
use crate::resources::{ResLayout, DEFAULT_ANDROID_DIR};
use crate::types::{BuiltinFlavors, Colour, ColourScheme, Flavor, Glyph};

/// Manifest file looked up in the project root.
pub const MANIFEST_FILENAME: &str = "flavors.yaml";

/// Project manifest loaded from flavors.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directory holding the flavor source sets, relative to the root.
    pub android_dir: PathBuf,

    /// Flavors to generate. Empty means the builtin flavors.
    pub flavors: Vec<FlavorEntry>,
}

/// One flavor as written in the manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorEntry {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    pub glyph: Glyph,

    pub primary: Colour,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Colour>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Colour>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Colour>,
}

impl FlavorEntry {
    /// Resolve to a flavor, deriving any colour role left out.
    pub fn to_flavor(&self) -> Flavor {
        let scheme =
            ColourScheme::derive(self.primary, self.secondary, self.accent, self.background);
        let label = self.label.clone().unwrap_or_else(|| self.name.clone());
        Flavor::new(self.name.clone(), label, scheme, self.glyph)
    }

    /// Spell out every role of an existing flavor.
    pub fn from_flavor(flavor: &Flavor) -> Self {
        Self {
            name: flavor.name.clone(),
            label: Some(flavor.label.clone()),
            glyph: flavor.glyph,
            primary: flavor.scheme.primary,
            secondary: Some(flavor.scheme.secondary),
            accent: Some(flavor.scheme.accent),
            background: Some(flavor.scheme.background),
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            android_dir: PathBuf::from(DEFAULT_ANDROID_DIR),
            flavors: vec![],
        }
    }
}

impl Manifest {
    /// Manifest listing the builtin flavors explicitly.
    pub fn builtin() -> Self {
        Self {
            flavors: BuiltinFlavors::all().iter().map(FlavorEntry::from_flavor).collect(),
            ..Default::default()
        }
    }

    /// Load manifest from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AssetError::io(path, "Failed to read manifest", e))?;

        Self::parse(&content)
    }

    /// Load `flavors.yaml` from `root` if present, defaults otherwise.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(MANIFEST_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let manifest: Self = serde_yaml::from_str(content).map_err(|e| AssetError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })?;

        validate_android_dir(&manifest.android_dir)?;
        Ok(manifest)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| AssetError::Config {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Resolved flavors, in manifest order.
    pub fn flavors(&self) -> Result<Vec<Flavor>> {
        if self.flavors.is_empty() {
            return Ok(BuiltinFlavors::all());
        }

        let mut seen = HashSet::new();
        for entry in &self.flavors {
            validate_flavor_name(&entry.name)?;
            if !seen.insert(entry.name.as_str()) {
                return Err(AssetError::Config {
                    message: format!("Duplicate flavor: '{}'", entry.name),
                    help: Some("Each flavor name may appear only once".to_string()),
                });
            }
        }

        let flavors: Vec<Flavor> = self.flavors.iter().map(FlavorEntry::to_flavor).collect();
        for flavor in &flavors {
            if !flavor.scheme.background.is_opaque() {
                return Err(AssetError::Config {
                    message: format!(
                        "Flavor '{}' has a translucent background: {}",
                        flavor.name, flavor.scheme.background
                    ),
                    help: Some(
                        "The splash background must be opaque; drop the alpha digits".to_string(),
                    ),
                });
            }
        }

        Ok(flavors)
    }

    /// Output layout rooted at `root`.
    pub fn layout(&self, root: impl Into<PathBuf>) -> ResLayout {
        ResLayout::new(root).with_android_dir(&self.android_dir)
    }
}

/// Pick flavors by name, keeping `all`'s order; empty `names` selects all.
pub fn select_flavors(all: Vec<Flavor>, names: &[String]) -> Result<Vec<Flavor>> {
    if names.is_empty() {
        return Ok(all);
    }

    if let Some(unknown) = names.iter().find(|n| !all.iter().any(|f| &f.name == *n)) {
        let known: Vec<&str> = all.iter().map(|f| f.name.as_str()).collect();
        return Err(AssetError::Config {
            message: format!("Unknown flavor: '{}'", unknown),
            help: Some(format!("Known flavors: {}", known.join(", "))),
        });
    }

    Ok(all.into_iter().filter(|f| names.contains(&f.name)).collect())
}

/// The flavor source directory must stay inside the project root.
fn validate_android_dir(dir: &Path) -> Result<()> {
    let escapes = dir
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_) | Component::ParentDir));

    if escapes {
        Err(AssetError::Config {
            message: format!("Invalid android_dir: '{}'", dir.display()),
            help: Some("Use a relative path inside the project, without '..'".to_string()),
        })
    } else {
        Ok(())
    }
}

/// Flavor names become Android source-set directories and Gradle flavor
/// identifiers: a lowercase letter, then lowercase letters, digits or `_`.
fn validate_flavor_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(AssetError::Config {
            message: format!("Invalid flavor name: '{}'", name),
            help: Some(
                "Use a lowercase letter followed by lowercase letters, digits or '_'".to_string(),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
        assert_eq!(manifest.android_dir, PathBuf::from("android/app/src"));
    }

    #[test]
    fn test_empty_flavors_means_builtins() {
        let manifest = Manifest::parse("android_dir: app/src").unwrap();
        assert_eq!(manifest.android_dir, PathBuf::from("app/src"));
        assert_eq!(manifest.flavors().unwrap(), BuiltinFlavors::all());
    }

    #[test]
    fn test_parse_full_entry() {
        let yaml = r##"
flavors:
  - name: nurse
    label: Rose
    glyph: heart
    primary: "#E91E63"
    secondary: "#C2185B"
    accent: "#FFF"
    background: "#FCE4EC"
"##;
        let flavors = Manifest::parse(yaml).unwrap().flavors().unwrap();
        assert_eq!(flavors.len(), 1);

        let nurse = &flavors[0];
        assert_eq!(nurse.name, "nurse");
        assert_eq!(nurse.label, "Rose");
        assert_eq!(nurse.glyph, Glyph::Heart);
        assert_eq!(nurse.scheme.primary, Colour::rgb(0xE9, 0x1E, 0x63));
        assert_eq!(nurse.scheme.accent, Colour::WHITE);
        assert_eq!(nurse.scheme.background, Colour::rgb(0xFC, 0xE4, 0xEC));
    }

    #[test]
    fn test_parse_minimal_entry_derives_roles() {
        let yaml = "flavors:\n  - name: admin\n    glyph: cross\n    primary: \"#3F51B5\"\n";
        let flavors = Manifest::parse(yaml).unwrap().flavors().unwrap();

        let admin = &flavors[0];
        assert_eq!(admin.label, "admin");
        assert_eq!(
            admin.scheme,
            ColourScheme::derive(Colour::rgb(63, 81, 181), None, None, None)
        );
    }

    #[test]
    fn test_invalid_colour_is_config_error() {
        let yaml = "flavors:\n  - name: a\n    glyph: cross\n    primary: \"#XYZ\"\n";
        assert!(matches!(Manifest::parse(yaml), Err(AssetError::Config { .. })));
    }

    #[test]
    fn test_invalid_glyph_is_config_error() {
        let yaml = "flavors:\n  - name: a\n    glyph: star\n    primary: \"#000\"\n";
        assert!(Manifest::parse(yaml).is_err());
    }

    #[test]
    fn test_duplicate_and_invalid_names() {
        let dup = r##"
flavors:
  - {name: a, glyph: heart, primary: "#000"}
  - {name: a, glyph: cross, primary: "#fff"}
"##;
        assert!(Manifest::parse(dup).unwrap().flavors().is_err());

        for bad in ["", "Patient", "../x", "1st", "has space"] {
            let yaml = format!(
                "flavors:\n  - {{name: \"{}\", glyph: heart, primary: \"#000\"}}\n",
                bad
            );
            assert!(Manifest::parse(&yaml).unwrap().flavors().is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_translucent_background_is_config_error() {
        let yaml = r##"
flavors:
  - name: nurse
    glyph: heart
    primary: "#E91E63"
    background: "#FCE4EC80"
"##;
        let err = Manifest::parse(yaml).unwrap().flavors().unwrap_err();
        assert!(matches!(err, AssetError::Config { .. }));
        assert!(err.to_string().contains("nurse"));

        // Derived from a translucent primary
        let yaml = "flavors:\n  - name: nurse\n    glyph: heart\n    primary: \"#E91E6380\"\n";
        assert!(Manifest::parse(yaml).unwrap().flavors().is_err());
    }

    #[test]
    fn test_android_dir_must_stay_in_root() {
        for bad in ["/tmp/src", "../other/src", "android/../../src"] {
            let yaml = format!("android_dir: \"{}\"\n", bad);
            assert!(
                matches!(Manifest::parse(&yaml), Err(AssetError::Config { .. })),
                "{}",
                bad
            );
        }
        assert!(Manifest::parse("android_dir: ./mobile/src\n").is_ok());
    }

    #[test]
    fn test_builtin_round_trips_through_yaml() {
        let manifest = Manifest::builtin();
        let yaml = manifest.to_yaml().unwrap();
        assert!(yaml.contains("name: patient"));
        assert!(yaml.contains("'#009688'") || yaml.contains("\"#009688\""));

        let back = Manifest::parse(&yaml).unwrap();
        assert_eq!(back, manifest);
        assert_eq!(back.flavors().unwrap(), BuiltinFlavors::all());
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();
        assert_eq!(Manifest::discover(dir.path()).unwrap(), Manifest::default());

        std::fs::write(dir.path().join(MANIFEST_FILENAME), "android_dir: mobile/src\n").unwrap();
        let manifest = Manifest::discover(dir.path()).unwrap();
        assert_eq!(manifest.android_dir, PathBuf::from("mobile/src"));
    }

    #[test]
    fn test_select_flavors() {
        let all = BuiltinFlavors::all();

        let picked = select_flavors(all.clone(), &["doctor".to_string()]).unwrap();
        assert_eq!(picked, vec![BuiltinFlavors::doctor()]);

        assert_eq!(select_flavors(all.clone(), &[]).unwrap(), all);

        let err = select_flavors(all, &["nurse".to_string()]).unwrap_err();
        assert!(err.to_string().contains("nurse"));
    }
}
