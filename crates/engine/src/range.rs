// crates/engine/src/range.rs
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("empty range")]
    Empty,

    #[error("cannot parse {which} value from range: {value:?}")]
    InvalidBound { which: &'static str, value: String },

    #[error("line numbers start at 1: {0:?}")]
    Zero(String),

    #[error("cannot print lines {start} thru {end} because they are out of order")]
    OutOfOrder { start: usize, end: usize },
}

/// Inclusive, 1-based range of line numbers.
///
/// `end == None` means "through the end of the input".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: usize,
    end: Option<usize>,
}

impl LineRange {
    /// # Errors
    /// Returns an error when `start` is zero or `end` precedes `start`.
    pub fn new(start: usize, end: Option<usize>) -> Result<Self, RangeError> {
        if start == 0 {
            return Err(RangeError::Zero(start.to_string()));
        }
        if let Some(end) = end
            && end < start
        {
            return Err(RangeError::OutOfOrder { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> Option<usize> {
        self.end
    }

    #[inline]
    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && self.end.is_none_or(|end| line <= end)
    }
}

impl FromStr for LineRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "-" {
            return Err(RangeError::Empty);
        }

        let (start, end) = match s.split_once('-') {
            None => {
                let n = parse_bound(s, "initial")?;
                (n, Some(n))
            }
            Some((head, tail)) => {
                let start = if head.is_empty() {
                    1
                } else {
                    parse_bound(head, "initial")?
                };
                let end = if tail.is_empty() {
                    None
                } else {
                    Some(parse_bound(tail, "final")?)
                };
                (start, end)
            }
        };

        Self::new(start, end)
    }
}

fn parse_bound(s: &str, which: &'static str) -> Result<usize, RangeError> {
    // `usize::from_str` would accept a leading '+'.
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RangeError::InvalidBound {
            which,
            value: s.to_string(),
        });
    }
    let n: usize = s.parse().map_err(|_| RangeError::InvalidBound {
        which,
        value: s.to_string(),
    })?;
    if n == 0 {
        return Err(RangeError::Zero(s.to_string()));
    }
    Ok(n)
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) if end == self.start => write!(f, "{end}"),
            Some(end) => write!(f, "{}-{end}", self.start),
            None => write!(f, "{}-", self.start),
        }
    }
}

/// Returns true when `s` has the shape of a range (`N`, `N-`, `-M`, `N-M`),
/// without validating the numbers.
pub fn looks_like_range(s: &str) -> bool {
    let digits = s.bytes().filter(u8::is_ascii_digit).count();
    let dashes = s.bytes().filter(|&b| b == b'-').count();
    digits > 0 && dashes <= 1 && digits + dashes == s.len()
}

/// Sorted union of line ranges with overlapping and adjacent ranges merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<LineRange>,
}

impl RangeSet {
    pub fn new(ranges: impl IntoIterator<Item = LineRange>) -> Self {
        let mut sorted: Vec<LineRange> = ranges.into_iter().collect();
        sorted.sort_by_key(LineRange::start);

        let mut merged: Vec<LineRange> = Vec::with_capacity(sorted.len());
        for range in sorted {
            if let Some(last) = merged.last_mut() {
                match last.end {
                    None => continue,
                    Some(end) if range.start <= end.saturating_add(1) => {
                        last.end = match range.end {
                            None => None,
                            Some(e) => Some(e.max(end)),
                        };
                        continue;
                    }
                    Some(_) => {}
                }
            }
            merged.push(range);
        }

        Self { ranges: merged }
    }

    pub fn ranges(&self) -> &[LineRange] {
        &self.ranges
    }

    /// Largest selected line, or `None` if empty or any range is open-ended.
    pub fn last_line(&self) -> Option<usize> {
        self.ranges.last().and_then(LineRange::end)
    }

    #[inline]
    pub fn contains(&self, line: usize) -> bool {
        // Ranges are disjoint and sorted: find the last one starting at or before `line`.
        let idx = self.ranges.partition_point(|r| r.start <= line);
        idx > 0 && self.ranges[idx - 1].contains(line)
    }
}
