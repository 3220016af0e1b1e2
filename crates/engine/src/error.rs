use crate::range::RangeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid range: {0}")]
    InvalidRange(#[from] RangeError),

    #[error("cannot print the {which} 0 lines")]
    InvalidCount { which: &'static str },

    #[error("cannot read {:?}: {source}", .path.display().to_string())]
    FileAccess {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read standard input: {0}")]
    Read(#[source] std::io::Error),

    #[error("cannot write output: {0}")]
    Write(#[source] std::io::Error),

    #[error("output pipe closed")]
    PipeClosed,
}

impl EngineError {
    /// Classify a failed write to the output stream.
    pub(crate) fn from_write(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            Self::PipeClosed
        } else {
            Self::Write(err)
        }
    }

    /// Errors that stop the run no matter the file error policy.
    pub const fn is_output_error(&self) -> bool {
        matches!(self, Self::Write(_) | Self::PipeClosed)
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
