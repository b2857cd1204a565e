use anyhow::Result;
use clap::Parser;
use spesa::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
