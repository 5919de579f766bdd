//! Generate command implementation.
//!
//! Renders every asset of the selected flavors and writes the resource XML.

use clap::Args;

use crate::error::Result;
use crate::generator::{GenerationReport, Generator};
use crate::manifest::select_flavors;
use crate::output::{display_path, plural, Printer};

use super::ProjectArgs;

/// Generate icons, splash images and resource XML for each flavor
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only generate this flavor (repeatable)
    #[arg(long = "flavor", short = 'f', value_name = "NAME")]
    pub flavors: Vec<String>,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<GenerationReport> {
    let manifest = args.project.load_manifest()?;
    let flavors = select_flavors(manifest.flavors()?, &args.flavors)?;
    let layout = manifest.layout(&args.project.root);

    printer.status("Writing", &format!("assets under {}", display_path(layout.root())));

    let report = Generator::new(&layout, printer).generate_all(&flavors)?;

    printer.status(
        "Finished",
        &format!(
            "{} and {} for {} ({} changed)",
            plural(report.images().count(), "image", "images"),
            plural(report.documents().count(), "document", "documents"),
            plural(flavors.len(), "flavor", "flavors"),
            report.changed()
        ),
    );
    for flavor in &flavors {
        printer.info("Rebuild", &flavor.build_hint());
    }

    Ok(report)
}
