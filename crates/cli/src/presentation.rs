// crates/cli/src/presentation.rs
use crate::error::AppError;
use lines_engine::error::EngineError;
use std::io::Write;

pub const PROGRAM: &str = "lines";

pub fn format_warning(err: &EngineError) -> String {
    format!("{PROGRAM}: WARNING: {err}")
}

pub fn format_error(err: &AppError) -> String {
    format!("{PROGRAM}: ERROR: {err}")
}

/// Report a file skipped under `--force`.
pub fn print_warning<W: Write>(stderr: &mut W, err: &EngineError) {
    // Nothing sensible to do if stderr itself is gone.
    let _ = writeln!(stderr, "{}", format_warning(err));
}

pub fn print_error<W: Write>(stderr: &mut W, err: &AppError) {
    let _ = writeln!(stderr, "{}", format_error(err));
    if err.is_usage() {
        let _ = writeln!(stderr, "Use `{PROGRAM} --help` for more information.");
    }
}
