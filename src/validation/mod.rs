//! Verification of generated assets on disk.
//!
//! Runs the checks against a flavor's resource tree and reports errors and
//! warnings. Used by `flavor-assets verify`.

mod checks;
mod warning;

pub use checks::{
    DUPLICATE_COLOUR, MISSING_ASSET, MISSING_COLOUR, MISSING_LAYER, STALE_COLOUR, STRAY_ASSET,
    UNREADABLE, WRONG_SIZE,
};
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};
use crate::resources::ResLayout;
use crate::types::Flavor;

/// Run all checks for one flavor.
pub fn verify_flavor(layout: &ResLayout, flavor: &Flavor) -> ValidationResult {
    let mut result = ValidationResult::new();

    if !layout.res_dir(flavor).is_dir() {
        result.push(
            Diagnostic::error(
                MISSING_ASSET,
                format!(
                    "{}: no resource directory at {}",
                    flavor.name,
                    layout.res_dir(flavor).display()
                ),
            )
            .with_help("Run `flavor-assets generate` first"),
        );
        return result;
    }

    result.merge(checks::check_images(layout, flavor));
    result.merge(checks::check_layer_documents(layout, flavor));
    result.merge(checks::check_colours(layout, flavor));
    result.merge(checks::check_stray_assets(layout, flavor));

    result
}

/// Print diagnostics and a summary line.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("{}{}: {}", label, printer.dim(&format!("[{}]", d.code)), d.message);
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }

    let errors = plural(result.error_count(), "error", "errors");
    let warnings = plural(result.warning_count(), "warning", "warnings");

    if result.has_errors() {
        printer.error("Failed", &format!("{}, {}", errors, warnings));
    } else if result.warning_count() > 0 {
        printer.warning("Verified", &format!("with {}", warnings));
    } else {
        printer.status("Verified", "all assets present and correctly sized");
    }
}
