// crates/engine/src/lib.rs
use std::io::{BufRead, Write};

pub mod config;
pub mod error;
pub mod input;
pub mod processor;
pub mod range;
pub mod selection;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::input::Source;
use crate::stats::{LineStats, RunResult, SourceStats};

/// Run the line filter over every source in `config.input`.
///
/// `stdin` is only read when the input source is standard input. Each source
/// is filtered on its own, with line numbers starting over at 1, and `out`
/// is flushed after each one. With `config.force`, `on_skip` is called for
/// every source that could not be read, after the output of the sources
/// before it has been flushed.
///
/// # Errors
///
/// Output errors always stop the run. Without `config.force` the first
/// unreadable file stops it too; with `force` such errors are collected in
/// `RunResult::errors` and the remaining files are still filtered.
pub fn run<R, W, F>(config: &Config, mut stdin: R, out: &mut W, mut on_skip: F) -> Result<RunResult>
where
    R: BufRead,
    W: Write,
    F: FnMut(&Source, &EngineError),
{
    let mut result = RunResult::default();

    for source in config.input.sources() {
        match filter_source(config, &source, &mut stdin, out) {
            Ok(lines) => {
                log::debug!(
                    "{source}: read {} lines, wrote {}",
                    lines.read,
                    lines.written
                );
                result.stats.push(SourceStats { source, lines });
            }
            Err(e) if e.is_output_error() || !config.force => return Err(e),
            Err(e) => {
                log::debug!("{source}: skipped after error: {e}");
                let flushed = out.flush().map_err(EngineError::from_write);
                on_skip(&source, &e);
                result.errors.push((source, e));
                flushed?;
            }
        }
    }

    Ok(result)
}

fn filter_source<R: BufRead, W: Write>(
    config: &Config,
    source: &Source,
    stdin: &mut R,
    out: &mut W,
) -> Result<LineStats> {
    let lines = match source {
        Source::Stdin => filter_reader(config, source, stdin, out)?,
        Source::File(path) => {
            let reader = input::open_file(path)?;
            log::debug!("opened {}", path.display());
            filter_reader(config, source, reader, out)?
        }
    };
    out.flush().map_err(EngineError::from_write)?;
    Ok(lines)
}

/// Filter one source, attributing read failures to it.
fn filter_reader<R: BufRead, W: Write>(
    config: &Config,
    source: &Source,
    mut reader: R,
    out: &mut W,
) -> Result<LineStats> {
    processor::process(&config.selection, &mut reader, out).map_err(|e| match e {
        EngineError::Read(err) => source.read_error(err),
        other => other,
    })
}
