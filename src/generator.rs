//! Asset generation for flavors.
//!
//! For each flavor, in order: launcher icons, adaptive foregrounds, the
//! adaptive-icon definition with its background colour, splash images, then
//! the launch background with the splash colour.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;
use crate::output::{dimensions, Printer};
use crate::render::{render_asset, write_png};
use crate::resources::{
    adaptive_icon_xml, launch_background_xml, merge_colour_file, write_document, ResLayout,
    WriteOutcome, LAUNCHER_BACKGROUND, SPLASH_BACKGROUND,
};
use crate::types::{AssetKind, Flavor};

/// A file written during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
    /// Side length for images, `None` for XML documents.
    pub size: Option<u32>,
}

/// Everything written by one or more flavor runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub files: Vec<GeneratedFile>,
}

impl GenerationReport {
    pub fn images(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().filter(|f| f.size.is_some())
    }

    pub fn documents(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().filter(|f| f.size.is_none())
    }

    /// Files whose content changed on disk.
    pub fn changed(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome != WriteOutcome::Unchanged)
            .count()
    }

    pub fn extend(&mut self, other: GenerationReport) {
        self.files.extend(other.files);
    }
}

/// Renders and writes the assets of flavors into a resource layout.
pub struct Generator<'a> {
    layout: &'a ResLayout,
    printer: &'a Printer,
}

impl<'a> Generator<'a> {
    pub fn new(layout: &'a ResLayout, printer: &'a Printer) -> Self {
        Self { layout, printer }
    }

    /// Generate every flavor in order, stopping at the first failure.
    pub fn generate_all(&self, flavors: &[Flavor]) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();
        for flavor in flavors {
            report.extend(self.generate(flavor)?);
        }
        Ok(report)
    }

    /// Generate all assets of one flavor.
    pub fn generate(&self, flavor: &Flavor) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();

        self.printer.info(
            "Generating",
            &format!("{} ({}, {})", self.printer.bold(&flavor.name), flavor.label, flavor.glyph),
        );

        self.write_images(flavor, AssetKind::Launcher, &mut report)?;
        self.write_images(flavor, AssetKind::AdaptiveForeground, &mut report)?;
        self.write_adaptive_icon(flavor, &mut report)?;
        self.write_images(flavor, AssetKind::Splash, &mut report)?;
        self.write_launch_background(flavor, &mut report)?;

        Ok(report)
    }

    fn write_images(
        &self,
        flavor: &Flavor,
        kind: AssetKind,
        report: &mut GenerationReport,
    ) -> Result<()> {
        for (density, size) in kind.targets() {
            let path = self.layout.asset_path(flavor, kind, density);
            let outcome = if path.exists() {
                WriteOutcome::Updated
            } else {
                WriteOutcome::Created
            };

            let image = render_asset(kind, size, &flavor.scheme, flavor.glyph)?;
            write_png(&image, &path)?;

            self.printer.status(
                outcome.verb(),
                &format!(
                    "{} {}",
                    self.layout.relative(flavor, &path),
                    self.printer.dim(&dimensions(size, size))
                ),
            );
            report.files.push(GeneratedFile {
                path,
                outcome,
                size: Some(size),
            });
        }
        Ok(())
    }

    fn write_adaptive_icon(&self, flavor: &Flavor, report: &mut GenerationReport) -> Result<()> {
        let path = self.layout.adaptive_icon_xml(flavor);
        let outcome = write_document(&path, &adaptive_icon_xml())?;
        self.record(flavor, path, outcome, report);

        let colors = self.layout.colors_xml(flavor);
        let outcome =
            merge_colour_file(&colors, LAUNCHER_BACKGROUND, &flavor.scheme.hex_background())?;
        self.record(flavor, colors, outcome, report);
        Ok(())
    }

    fn write_launch_background(
        &self,
        flavor: &Flavor,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let path = self.layout.launch_background_xml(flavor);
        let outcome = write_document(&path, &launch_background_xml())?;
        self.record(flavor, path, outcome, report);

        let colors = self.layout.colors_xml(flavor);
        let outcome =
            merge_colour_file(&colors, SPLASH_BACKGROUND, &flavor.scheme.hex_background())?;
        self.record(flavor, colors, outcome, report);
        Ok(())
    }

    fn record(
        &self,
        flavor: &Flavor,
        path: PathBuf,
        outcome: WriteOutcome,
        report: &mut GenerationReport,
    ) {
        let rel = self.layout.relative(flavor, &path);
        match outcome {
            WriteOutcome::Unchanged => self.printer.info(outcome.verb(), &rel),
            _ => self.printer.status(outcome.verb(), &rel),
        }
        report.files.push(GeneratedFile {
            path,
            outcome,
            size: None,
        });
    }
}
