mod menu;
mod prompt;
mod session;

pub use menu::*;
pub use prompt::*;
pub use session::*;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

/// Spesa - Personal Expense Log
#[derive(Parser, Debug)]
#[command(name = "spesa")]
#[command(about = "An in-memory personal expense log driven by a terminal menu")]
#[command(version)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log level used when `RUST_LOG` does not override it.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    fn init_logging(&self) {
        env_logger::Builder::new()
            .filter_level(self.log_level())
            .parse_default_env()
            .init();
    }

    pub fn run(self) -> Result<()> {
        self.init_logging();

        let stdin = io::stdin().lock();
        let stdout = io::stdout().lock();
        Session::new(stdin, stdout)
            .run()
            .context("Expense session aborted")?;
        Ok(())
    }
}
