use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::{AssetError, Result};
use crate::output::{dimensions, Printer};
use crate::types::{AssetKind, Density, Flavor};

use super::ProjectArgs;

/// List flavors and the assets generated for them
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print JSON to stdout instead of a listing
    #[arg(long)]
    pub json: bool,
}

/// One image written per flavor.
#[derive(Debug, Serialize)]
struct Target {
    kind: AssetKind,
    density: Density,
    path: String,
    size: u32,
}

#[derive(Debug, Serialize)]
struct Listing {
    android_dir: PathBuf,
    flavors: Vec<Flavor>,
    targets: Vec<Target>,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let manifest = args.project.load_manifest()?;
    let listing = Listing {
        android_dir: manifest.android_dir.clone(),
        flavors: manifest.flavors()?,
        targets: targets(),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&listing).map_err(|e| AssetError::Config {
            message: format!("Failed to serialize listing: {}", e),
            help: None,
        })?;
        println!("{}", json);
        return Ok(());
    }

    for flavor in &listing.flavors {
        let s = &flavor.scheme;
        printer.info(
            "Flavor",
            &format!(
                "{} {} {}",
                printer.bold(&flavor.name),
                flavor.glyph,
                printer.dim(&format!(
                    "({}: primary {}, secondary {}, accent {}, background {})",
                    flavor.label, s.primary, s.secondary, s.accent, s.background
                )),
            ),
        );
    }
    for kind in AssetKind::ALL {
        let sizes: Vec<String> = kind
            .targets()
            .map(|(d, size)| format!("{} {}", d, dimensions(size, size)))
            .collect();
        printer.info("Target", &format!("{} {}", kind.file_name(), printer.dim(&sizes.join(", "))));
    }

    Ok(())
}

fn targets() -> Vec<Target> {
    AssetKind::ALL
        .into_iter()
        .flat_map(|kind| {
            kind.targets().map(move |(density, size)| Target {
                kind,
                density,
                path: format!("{}/{}", kind.folder(density), kind.file_name()),
                size,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_cover_every_kind_and_density() {
        let targets = targets();
        assert_eq!(targets.len(), 15);
        assert_eq!(targets[0].path, "mipmap-mdpi/ic_launcher.png");
        assert_eq!(targets[0].size, 48);
        assert_eq!(targets[14].path, "drawable-xxxhdpi/splash_image.png");
        assert_eq!(targets[14].size, 2560);
    }

    #[test]
    fn test_listing_json_shape() {
        let listing = Listing {
            android_dir: PathBuf::from("android/app/src"),
            flavors: crate::types::BuiltinFlavors::all(),
            targets: targets(),
        };
        let value = serde_json::to_value(&listing).unwrap();

        assert_eq!(value["flavors"][0]["name"], "patient");
        assert_eq!(value["flavors"][0]["glyph"], "heart");
        assert_eq!(value["flavors"][1]["scheme"]["primary"], "#3F51B5");
        assert_eq!(value["targets"][5]["kind"], "adaptive-foreground");
        assert_eq!(value["targets"][5]["density"], "mdpi");
    }
}
