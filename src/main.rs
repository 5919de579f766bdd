use clap::Parser;
use miette::Result;
use flavor_assets::cli::{Cli, Commands};
use flavor_assets::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Generate(args) => {
            flavor_assets::cli::generate::run(args, &printer)?;
        }
        Commands::Init(args) => flavor_assets::cli::init::run(args, &printer)?,
        Commands::List(args) => flavor_assets::cli::list::run(args, &printer)?,
        Commands::Verify(args) => {
            flavor_assets::cli::verify::run(args, &printer)?;
        }
        Commands::Completions(args) => flavor_assets::cli::completions::run(args)?,
    }

    Ok(())
}
