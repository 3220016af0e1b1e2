// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use lines_engine::range::LineRange;

use crate::parsers::{parse_positive_usize, parse_range, parse_usize};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "lines",
    version = crate::VERSION,
    about = "Print a range of lines from standard input or one or more files.",
    long_about = Some(include_str!("../usage.txt")),
    after_help = include_str!("../examples.txt"),
    allow_negative_numbers = true
)]
pub struct Args {
    /// Ranges (N, N-, -M, N-M) followed by files; reads standard input when no file is given
    #[arg(value_name = "RANGE|FILE", value_hint = ValueHint::FilePath)]
    pub inputs: Vec<PathBuf>,

    /// Only print lines in RANGE (N, N-, -M or N-M); may be repeated
    #[arg(
        short,
        long = "range",
        value_name = "RANGE",
        value_parser = parse_range,
        help_heading = "Selection"
    )]
    pub ranges: Vec<LineRange>,

    /// Only print the initial N lines
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = parse_positive_usize,
        conflicts_with_all = ["bottom", "ranges", "skip_top", "skip_bottom"],
        help_heading = "Selection"
    )]
    pub top: Option<usize>,

    /// Only print the final N lines
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = parse_positive_usize,
        conflicts_with_all = ["ranges", "skip_top", "skip_bottom"],
        help_heading = "Selection"
    )]
    pub bottom: Option<usize>,

    /// Skip printing the initial N header lines
    #[arg(
        long,
        value_name = "N",
        value_parser = parse_usize,
        conflicts_with = "ranges",
        help_heading = "Selection"
    )]
    pub skip_top: Option<usize>,

    /// Skip printing the final N footer lines
    #[arg(
        long,
        value_name = "N",
        value_parser = parse_usize,
        conflicts_with = "ranges",
        help_heading = "Selection"
    )]
    pub skip_bottom: Option<usize>,

    /// Print error messages for unreadable files but continue with the rest
    #[arg(short, long, help_heading = "Errors")]
    pub force: bool,

    /// Only log errors; cannot be combined with --force
    #[arg(
        short,
        long,
        conflicts_with_all = ["verbose", "force"],
        help_heading = "Errors"
    )]
    pub quiet: bool,

    /// Print verbose output to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Errors")]
    pub verbose: u8,
}

impl Args {
    /// Default log filter for the requested verbosity.
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
