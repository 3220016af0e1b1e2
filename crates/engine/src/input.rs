// crates/engine/src/input.rs
use crate::error::{EngineError, Result};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Where a run reads its lines from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    /// Files in the order given. Each file is filtered independently.
    Files(Vec<PathBuf>),
}

impl InputSource {
    /// An empty file list means standard input.
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        if paths.is_empty() {
            Self::Stdin
        } else {
            Self::Files(paths)
        }
    }

    pub fn sources(&self) -> Vec<Source> {
        match self {
            Self::Stdin => vec![Source::Stdin],
            Self::Files(paths) => paths.iter().cloned().map(Source::File).collect(),
        }
    }
}

/// A single stream filtered in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Attach this source to a read failure.
    pub(crate) fn read_error(&self, err: std::io::Error) -> EngineError {
        match self {
            Self::Stdin => EngineError::Read(err),
            Self::File(path) => EngineError::FileAccess {
                path: path.clone(),
                source: err,
            },
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Open a file for buffered reading.
///
/// # Errors
/// Returns `EngineError::FileAccess` if the file is missing, unreadable, or a
/// directory.
pub fn open_file(path: &Path) -> Result<BufReader<File>> {
    let to_err = |source: std::io::Error| EngineError::FileAccess {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(to_err)?;
    // Opening a directory succeeds on unix; reading it does not.
    let meta = file.metadata().map_err(to_err)?;
    if meta.is_dir() {
        return Err(to_err(std::io::Error::new(
            std::io::ErrorKind::IsADirectory,
            "is a directory",
        )));
    }
    Ok(BufReader::new(file))
}
