pub mod completions;
pub mod generate;
pub mod init;
pub mod list;
pub mod verify;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::error::Result;
use crate::manifest::Manifest;

/// flavor-assets - Launcher icon and splash screen generator for app flavors
#[derive(Parser, Debug)]
#[command(name = "flavor-assets")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate icons, splash images and resource XML for each flavor
    Generate(generate::GenerateArgs),

    /// Write a flavors.yaml describing the builtin flavors
    Init(init::InitArgs),

    /// List flavors and the assets generated for them
    List(list::ListArgs),

    /// Check generated assets on disk
    Verify(verify::VerifyArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by commands that operate on a project tree.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root containing the Android source tree
    #[arg(long, short, default_value = ".")]
    pub root: PathBuf,

    /// Manifest to use instead of <root>/flavors.yaml
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl ProjectArgs {
    /// The explicit manifest, else the one in the root, else defaults.
    pub fn load_manifest(&self) -> Result<Manifest> {
        load_manifest(&self.root, self.manifest.as_deref())
    }
}

fn load_manifest(root: &Path, explicit: Option<&Path>) -> Result<Manifest> {
    match explicit {
        Some(path) => Manifest::load(path),
        None => Manifest::discover(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::parse_from([
            "flavor-assets",
            "generate",
            "--root",
            "app",
            "--flavor",
            "doctor",
            "-q",
        ]);
        assert!(cli.quiet);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.project.root, PathBuf::from("app"));
                assert_eq!(args.flavors, vec!["doctor".to_string()]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_explicit_manifest_must_exist() {
        let args = ProjectArgs {
            root: PathBuf::from("."),
            manifest: Some(PathBuf::from("/nonexistent/flavors.yaml")),
        };
        assert!(args.load_manifest().is_err());
    }
}
