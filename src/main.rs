use anyhow::Result;
use clap::Parser;
use ringkit::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
