// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
pub use lines_engine::config::{Config, ConfigBuilder};
use lines_engine::error::EngineError;
use lines_engine::input::InputSource;
use lines_engine::range::{LineRange, looks_like_range};
use lines_engine::selection::Selection;
use std::path::PathBuf;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        let (positional, files) = split_inputs(args.inputs)?;

        if !positional.is_empty() {
            if args.top.is_some() {
                return Err(usage("cannot print only the top, and only a range"));
            }
            if args.bottom.is_some() {
                return Err(usage("cannot print only the bottom, and only a range"));
            }
            if args.skip_top.is_some() || args.skip_bottom.is_some() {
                return Err(usage("cannot print only a range, and skip lines"));
            }
        }

        let mut ranges = args.ranges;
        ranges.extend(positional);

        let selection = if let Some(n) = args.top {
            Selection::top(n)?
        } else if let Some(n) = args.bottom {
            Selection::bottom(n)?
        } else if !ranges.is_empty() {
            Selection::ranges(ranges)
        } else {
            Selection::skip(
                args.skip_top.unwrap_or_default(),
                args.skip_bottom.unwrap_or_default(),
            )
        };

        ConfigBuilder::default()
            .selection(selection)
            .input(InputSource::from_paths(files))
            .force(args.force)
            .build()
            .map_err(|e| AppError::Usage(e.to_string()))
    }
}

fn usage(msg: &str) -> AppError {
    AppError::Usage(msg.to_string())
}

/// Split positional arguments into leading ranges and the files after them.
fn split_inputs(inputs: Vec<PathBuf>) -> Result<(Vec<LineRange>, Vec<PathBuf>)> {
    let mut ranges = Vec::new();
    let mut iter = inputs.into_iter().peekable();

    while let Some(arg) = iter.next_if(|p| p.to_str().is_some_and(looks_like_range)) {
        // `next_if` only yields UTF-8 arguments.
        let text = arg.to_string_lossy();
        ranges.push(text.parse::<LineRange>().map_err(EngineError::from)?);
    }

    Ok((ranges, iter.collect()))
}
