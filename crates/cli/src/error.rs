// crates/cli/src/error.rs
use lines_engine::error::EngineError;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("{0}")]
    Usage(String),

    #[error("cannot initialise logging: {0}")]
    Logging(String),
}

impl AppError {
    /// Usage mistakes exit with 2 like clap's own errors; everything else with 1.
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::Usage(_)
            | Self::Engine(EngineError::InvalidRange(_) | EngineError::InvalidCount { .. }) => 2,
            _ => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub const fn is_usage(&self) -> bool {
        self.exit_status() == 2
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
