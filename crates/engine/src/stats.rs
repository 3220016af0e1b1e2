use crate::error::EngineError;
use crate::input::Source;

/// Line counts for one filtering pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub read: usize,
    pub written: usize,
}

#[derive(Debug)]
pub struct SourceStats {
    pub source: Source,
    pub lines: LineStats,
}

/// Outcome of a run: stats for every source filtered and, under `force`,
/// the errors of sources that were skipped.
#[derive(Debug, Default)]
pub struct RunResult {
    pub stats: Vec<SourceStats>,
    pub errors: Vec<(Source, EngineError)>,
}

impl RunResult {
    pub fn lines_written(&self) -> usize {
        self.stats.iter().map(|s| s.lines.written).sum()
    }
}
