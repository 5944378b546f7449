use acrostic::Cli;
use clap::Parser;
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    acrostic::init_logging(cli.verbose);
    acrostic::run(cli)
}
