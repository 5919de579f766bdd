//! Init command implementation.
//!
//! Writes a `flavors.yaml` listing the builtin flavors so they can be edited.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{AssetError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};

const HEADER: &str = "\
# Flavors to generate launcher icons and splash screens for.
# Only `name`, `glyph` (heart | cross) and `primary` are required;
# secondary, accent and background are derived from primary when omitted.
";

/// Write a flavors.yaml describing the builtin flavors
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project root (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing flavors.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(AssetError::Config {
            message: format!("{} already exists", display_path(&manifest_path)),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let manifest = Manifest::builtin();
    let yaml = format!("{}{}", HEADER, manifest.to_yaml()?);

    fs::write(&manifest_path, yaml)
        .map_err(|e| AssetError::io(&manifest_path, "Failed to write manifest", e))?;

    printer.status(
        "Created",
        &format!(
            "{} ({})",
            display_path(&manifest_path),
            plural(manifest.flavors.len(), "flavor", "flavors")
        ),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BuiltinFlavors;
    use tempfile::tempdir;

    fn quiet() -> Printer {
        Printer::new().quiet(true)
    }

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        run(
            InitArgs {
                path: dir.path().to_path_buf(),
                force: false,
            },
            &quiet(),
        )
        .unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.starts_with("# Flavors to generate"));

        let manifest = Manifest::parse(&content).unwrap();
        assert_eq!(manifest.flavors().unwrap(), BuiltinFlavors::all());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "flavors: []\n").unwrap();

        let result = run(
            InitArgs {
                path: dir.path().to_path_buf(),
                force: false,
            },
            &quiet(),
        );
        assert!(result.is_err());
        assert_eq!(
            fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap(),
            "flavors: []\n"
        );
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "flavors: []\n").unwrap();

        run(
            InitArgs {
                path: dir.path().to_path_buf(),
                force: true,
            },
            &quiet(),
        )
        .unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("name: doctor"));
    }
}
