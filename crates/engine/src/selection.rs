// crates/engine/src/selection.rs
use crate::error::{EngineError, Result};
use crate::range::{LineRange, RangeSet};

/// Which lines a single filtering pass keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every line.
    #[default]
    All,
    /// Lines inside at least one range.
    Ranges(RangeSet),
    /// The initial N lines.
    Top(usize),
    /// The final N lines.
    Bottom(usize),
    /// Everything except the initial `top` and final `bottom` lines.
    Skip { top: usize, bottom: usize },
}

impl Selection {
    pub fn ranges(ranges: impl IntoIterator<Item = LineRange>) -> Self {
        Self::Ranges(RangeSet::new(ranges))
    }

    /// # Errors
    /// Returns an error when `n` is zero.
    pub fn top(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(EngineError::InvalidCount { which: "initial" });
        }
        Ok(Self::Top(n))
    }

    /// # Errors
    /// Returns an error when `n` is zero.
    pub fn bottom(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(EngineError::InvalidCount { which: "final" });
        }
        Ok(Self::Bottom(n))
    }

    pub const fn skip(top: usize, bottom: usize) -> Self {
        if top == 0 && bottom == 0 {
            Self::All
        } else {
            Self::Skip { top, bottom }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_counts_rejected() {
        assert!(matches!(
            Selection::top(0),
            Err(EngineError::InvalidCount { which: "initial" })
        ));
        assert!(matches!(
            Selection::bottom(0),
            Err(EngineError::InvalidCount { which: "final" })
        ));
        assert_eq!(Selection::top(3).unwrap(), Selection::Top(3));
    }

    #[test]
    fn test_skip_nothing_is_all() {
        assert_eq!(Selection::skip(0, 0), Selection::All);
        assert_eq!(Selection::skip(2, 0), Selection::Skip { top: 2, bottom: 0 });
    }
}
