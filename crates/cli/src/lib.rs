// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod parsers;
pub mod presentation;

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;
use lines_engine::error::EngineError;
use std::io::{self, BufWriter};
use std::process::ExitCode;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter standard input or the named files to standard output.
///
/// Files skipped under `--force` are reported on stderr as they fail, and
/// the run then ends with `ExitCode::FAILURE` even when a later output
/// error stops it.
///
/// # Errors
///
/// Returns an error for invalid arguments and for any failure the engine
/// does not recover from.
pub fn run(args: Args) -> Result<ExitCode> {
    let config = Config::try_from(args)?;
    tracing::debug!(?config, "resolved configuration");

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    let mut skipped = 0usize;

    let outcome = lines_engine::run(&config, stdin, &mut stdout, |_, err| {
        skipped += 1;
        presentation::print_warning(&mut io::stderr().lock(), err);
    });
    let status = if skipped == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    };

    match outcome {
        Ok(result) => {
            tracing::info!(
                sources = result.stats.len(),
                skipped,
                written = result.lines_written(),
                "done"
            );
            Ok(status)
        }
        Err(EngineError::PipeClosed) => {
            tracing::debug!(skipped, "output pipe closed; stopping");
            Ok(status)
        }
        Err(e) => Err(e.into()),
    }
}
