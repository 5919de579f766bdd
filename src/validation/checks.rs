//! Verification checks for a flavor's generated resource tree.
//!
//! Each check inspects the files on disk and returns a `ValidationResult`.

use std::collections::HashSet;
use std::fs;

use walkdir::WalkDir;

use crate::render::png_dimensions;
use crate::resources::{parse_colours, ResLayout, LAUNCHER_BACKGROUND, SPLASH_BACKGROUND};
use crate::types::{AssetKind, Density, Flavor};

use super::warning::{Diagnostic, ValidationResult};

pub const MISSING_ASSET: &str = "flavor_assets::verify::missing-asset";
pub const WRONG_SIZE: &str = "flavor_assets::verify::wrong-size";
pub const UNREADABLE: &str = "flavor_assets::verify::unreadable";
pub const MISSING_LAYER: &str = "flavor_assets::verify::missing-layer";
pub const MISSING_COLOUR: &str = "flavor_assets::verify::missing-colour";
pub const DUPLICATE_COLOUR: &str = "flavor_assets::verify::duplicate-colour";
pub const STALE_COLOUR: &str = "flavor_assets::verify::stale-colour";
pub const STRAY_ASSET: &str = "flavor_assets::verify::stray-asset";

const REGENERATE: &str = "Run `flavor-assets generate` to regenerate the assets";

/// Every image exists with its table size.
pub fn check_images(layout: &ResLayout, flavor: &Flavor) -> ValidationResult {
    let mut result = ValidationResult::new();

    for kind in AssetKind::ALL {
        for (density, size) in kind.targets() {
            let path = layout.asset_path(flavor, kind, density);
            let rel = layout.relative(flavor, &path);

            if !path.is_file() {
                result.push(
                    Diagnostic::error(MISSING_ASSET, format!("{}: {} is missing", flavor.name, rel))
                        .with_help(REGENERATE),
                );
                continue;
            }

            match png_dimensions(&path) {
                Ok((w, h)) if w == size && h == size => {}
                Ok((w, h)) => result.push(
                    Diagnostic::error(
                        WRONG_SIZE,
                        format!(
                            "{}: {} is {}x{}, expected {}x{}",
                            flavor.name, rel, w, h, size, size
                        ),
                    )
                    .with_help(REGENERATE),
                ),
                Err(e) => result.push(Diagnostic::error(
                    UNREADABLE,
                    format!("{}: {} could not be read: {}", flavor.name, rel, e),
                )),
            }
        }
    }

    result
}

/// The adaptive icon references its background colour and foreground
/// drawable; the launch background references the splash colour and image.
pub fn check_layer_documents(layout: &ResLayout, flavor: &Flavor) -> ValidationResult {
    let mut result = ValidationResult::new();

    let documents = [
        (
            layout.adaptive_icon_xml(flavor),
            vec![
                format!("@color/{}", LAUNCHER_BACKGROUND),
                "@mipmap/ic_launcher_foreground".to_string(),
            ],
        ),
        (
            layout.launch_background_xml(flavor),
            vec![
                format!("@color/{}", SPLASH_BACKGROUND),
                "@drawable/splash_image".to_string(),
            ],
        ),
    ];

    for (path, references) in documents {
        let rel = layout.relative(flavor, &path);
        let Ok(content) = fs::read_to_string(&path) else {
            result.push(
                Diagnostic::error(MISSING_ASSET, format!("{}: {} is missing", flavor.name, rel))
                    .with_help(REGENERATE),
            );
            continue;
        };

        for reference in references {
            if !content.contains(&reference) {
                result.push(
                    Diagnostic::error(
                        MISSING_LAYER,
                        format!("{}: {} does not reference {}", flavor.name, rel, reference),
                    )
                    .with_help(REGENERATE),
                );
            }
        }
    }

    result
}

/// Both background colours are defined exactly once and match the scheme.
pub fn check_colours(layout: &ResLayout, flavor: &Flavor) -> ValidationResult {
    let mut result = ValidationResult::new();

    let path = layout.colors_xml(flavor);
    let rel = layout.relative(flavor, &path);
    let Ok(content) = fs::read_to_string(&path) else {
        result.push(
            Diagnostic::error(MISSING_ASSET, format!("{}: {} is missing", flavor.name, rel))
                .with_help(REGENERATE),
        );
        return result;
    };

    let entries = parse_colours(&content);
    let expected = flavor.scheme.hex_background();

    for name in [LAUNCHER_BACKGROUND, SPLASH_BACKGROUND] {
        let matching: Vec<_> = entries.iter().filter(|e| e.name == name).collect();
        match matching.as_slice() {
            [] => result.push(
                Diagnostic::error(
                    MISSING_COLOUR,
                    format!("{}: {} has no '{}' colour", flavor.name, rel, name),
                )
                .with_help(REGENERATE),
            ),
            [entry] => {
                if !entry.value.eq_ignore_ascii_case(&expected) {
                    result.push(
                        Diagnostic::warning(
                            STALE_COLOUR,
                            format!(
                                "{}: '{}' is {}, scheme background is {}",
                                flavor.name, name, entry.value, expected
                            ),
                        )
                        .with_help(REGENERATE),
                    );
                }
            }
            _ => result.push(
                Diagnostic::error(
                    DUPLICATE_COLOUR,
                    format!(
                        "{}: '{}' is defined {} times in {}",
                        flavor.name,
                        name,
                        matching.len(),
                        rel
                    ),
                )
                .with_help("Remove the extra entries"),
            ),
        }
    }

    result
}

/// Generated file names found in folders this tool does not write to,
/// e.g. a leftover `mipmap-ldpi/ic_launcher.png`.
pub fn check_stray_assets(layout: &ResLayout, flavor: &Flavor) -> ValidationResult {
    let mut result = ValidationResult::new();

    let expected: HashSet<_> = AssetKind::ALL
        .into_iter()
        .flat_map(|kind| Density::ALL.map(|d| layout.asset_path(flavor, kind, d)))
        .collect();
    let names: HashSet<&str> = AssetKind::ALL.iter().map(|k| k.file_name()).collect();

    let walker = WalkDir::new(layout.res_dir(flavor))
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name();

    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        let is_generated_name = entry
            .file_name()
            .to_str()
            .is_some_and(|name| names.contains(name));

        if entry.file_type().is_file() && is_generated_name && !expected.contains(entry.path()) {
            result.push(
                Diagnostic::warning(
                    STRAY_ASSET,
                    format!(
                        "{}: {} is not produced by this tool",
                        flavor.name,
                        layout.relative(flavor, entry.path())
                    ),
                )
                .with_help("Delete it if it is left over from an older icon set"),
            );
        }
    }

    result
}
