use std::io::Write;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::application::ManifestGenerator;
use crate::domain::{Diagnostics, SilentDiagnostics, StderrDiagnostics};
use crate::io::{load_header, load_ledgers, open_output};

/// Ringkit - ILP kit ring manifest generator
#[derive(Parser)]
#[command(name = "ringkit")]
#[command(about = "Generate a docker-compose manifest for a ring of ILP kit ledgers")]
#[command(version)]
pub struct Cli {
    /// JSON file containing the ordered ledger sequence (required)
    #[arg(long)]
    pub ledgers: Option<PathBuf>,

    /// Start the manifest with the contents of this file instead of the
    /// built-in header
    #[arg(long)]
    pub header: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log computed peer addresses and routes to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        // Handled here rather than via a clap required arg so the process
        // exits with status 1, matching the original tool.
        let Some(ledgers_path) = self.ledgers.as_deref() else {
            bail!("must specify --ledgers <json file>");
        };

        let ledgers = load_ledgers(ledgers_path)?;
        let header = self.header.as_deref().map(load_header).transpose()?;

        let diag: &dyn Diagnostics = if self.verbose {
            &StderrDiagnostics
        } else {
            &SilentDiagnostics
        };

        let generator = ManifestGenerator::new(&ledgers, header, diag)?;
        let document = generator.assemble()?;

        let mut out = open_output(self.output.as_deref())?;
        writeln!(out, "{}", document)?;
        out.flush()?;

        Ok(())
    }
}
