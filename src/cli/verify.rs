//! Verify command implementation.

use clap::Args;

use crate::error::{AssetError, Result};
use crate::manifest::select_flavors;
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, verify_flavor, ValidationResult};

use super::ProjectArgs;

/// Check generated assets on disk
#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only verify this flavor (repeatable)
    #[arg(long = "flavor", short = 'f', value_name = "NAME")]
    pub flavors: Vec<String>,
}

pub fn run(args: VerifyArgs, printer: &Printer) -> Result<ValidationResult> {
    let manifest = args.project.load_manifest()?;
    let flavors = select_flavors(manifest.flavors()?, &args.flavors)?;
    let layout = manifest.layout(&args.project.root);

    printer.status("Verifying", &plural(flavors.len(), "flavor", "flavors"));

    let mut result = ValidationResult::new();
    for flavor in &flavors {
        result.merge(verify_flavor(&layout, flavor));
    }

    print_diagnostics(&result, printer);

    if result.has_errors() {
        return Err(AssetError::Verify {
            message: plural(result.error_count(), "error", "errors"),
            help: Some("Run `flavor-assets generate` to regenerate the assets".to_string()),
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::generate::{self, GenerateArgs};
    use std::path::Path;
    use tempfile::tempdir;

    fn project(root: &Path) -> ProjectArgs {
        ProjectArgs {
            root: root.to_path_buf(),
            manifest: None,
        }
    }

    #[test]
    fn test_verify_after_generate_passes() {
        let dir = tempdir().unwrap();
        let printer = Printer::new().quiet(true);

        generate::run(
            GenerateArgs {
                project: project(dir.path()),
                flavors: vec!["patient".to_string()],
            },
            &printer,
        )
        .unwrap();

        let result = run(
            VerifyArgs {
                project: project(dir.path()),
                flavors: vec!["patient".to_string()],
            },
            &printer,
        )
        .unwrap();
        assert!(result.is_ok());
    }

    #[test]
    fn test_verify_empty_project_fails() {
        let dir = tempdir().unwrap();
        let printer = Printer::new().quiet(true);

        let err = run(
            VerifyArgs {
                project: project(dir.path()),
                flavors: vec![],
            },
            &printer,
        )
        .unwrap_err();
        assert!(matches!(err, AssetError::Verify { .. }));
    }
}
