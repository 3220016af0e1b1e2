// crates/engine/src/processor.rs
use crate::error::{EngineError, Result};
use crate::range::RangeSet;
use crate::selection::Selection;
use crate::stats::LineStats;
use std::collections::VecDeque;
use std::io::{BufRead, ErrorKind, Write};

/// Copy the lines `selection` keeps from `reader` to `writer`.
///
/// Lines are copied byte for byte, terminator included, so CRLF endings and
/// a missing final newline survive unchanged. Numbering starts at 1 for
/// every call.
///
/// # Errors
///
/// Read failures are returned as `EngineError::Read`; write failures as
/// `EngineError::Write`, or `EngineError::PipeClosed` when the reader on the
/// other end has gone away.
pub fn process<R: BufRead, W: Write>(
    selection: &Selection,
    reader: &mut R,
    writer: &mut W,
) -> Result<LineStats> {
    match selection {
        Selection::All => copy_all(reader, writer),
        Selection::Ranges(set) => copy_ranges(set, reader, writer),
        Selection::Top(n) => copy_top(*n, reader, writer),
        Selection::Bottom(n) => copy_bottom(*n, reader, writer),
        Selection::Skip { top, bottom } => copy_skipping(*top, *bottom, reader, writer),
    }
}

/// Read one line, terminator included, into `buf`. Returns false at end of input.
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> Result<bool> {
    buf.clear();
    let n = reader.read_until(b'\n', buf).map_err(EngineError::Read)?;
    Ok(n > 0)
}

fn write_line<W: Write>(writer: &mut W, line: &[u8]) -> Result<()> {
    writer.write_all(line).map_err(EngineError::from_write)
}

/// Discard up to `n` lines without copying them. Returns how many were discarded,
/// which is less than `n` only at end of input.
fn skip_lines<R: BufRead>(reader: &mut R, n: usize) -> Result<usize> {
    let mut remaining = n;
    let mut partial = false;

    while remaining > 0 {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(EngineError::Read(e)),
        };
        if buf.is_empty() {
            // Unterminated final line.
            if partial {
                remaining -= 1;
            }
            break;
        }

        let newlines = bytecount::count(buf, b'\n');
        if newlines < remaining {
            partial = buf.last() != Some(&b'\n');
            let len = buf.len();
            reader.consume(len);
            remaining -= newlines;
        } else {
            // At least `remaining` newlines in this chunk: stop right after the last one we need.
            let end = buf
                .iter()
                .enumerate()
                .filter(|&(_, &b)| b == b'\n')
                .nth(remaining - 1)
                .map_or(buf.len(), |(i, _)| i + 1);
            reader.consume(end);
            remaining = 0;
        }
    }

    Ok(n - remaining)
}

fn copy_all<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<LineStats> {
    let mut stats = LineStats::default();
    let mut line = Vec::new();
    while read_line(reader, &mut line)? {
        stats.read += 1;
        write_line(writer, &line)?;
        stats.written += 1;
    }
    Ok(stats)
}

fn copy_ranges<R: BufRead, W: Write>(
    set: &RangeSet,
    reader: &mut R,
    writer: &mut W,
) -> Result<LineStats> {
    let mut stats = LineStats::default();
    let mut line = Vec::new();

    // Ranges are sorted and disjoint, so each gap before a range can be skipped in bulk.
    for range in set.ranges() {
        let gap = range.start().saturating_sub(stats.read + 1);
        let skipped = skip_lines(reader, gap)?;
        stats.read += skipped;
        if skipped < gap {
            return Ok(stats);
        }

        while range.end().is_none_or(|end| stats.read < end) {
            if !read_line(reader, &mut line)? {
                return Ok(stats);
            }
            stats.read += 1;
            write_line(writer, &line)?;
            stats.written += 1;
        }
    }

    // Past the last bounded range: nothing more to print, so stop reading.
    Ok(stats)
}

fn copy_top<R: BufRead, W: Write>(n: usize, reader: &mut R, writer: &mut W) -> Result<LineStats> {
    let mut stats = LineStats::default();
    let mut line = Vec::new();
    while stats.written < n && read_line(reader, &mut line)? {
        stats.read += 1;
        write_line(writer, &line)?;
        stats.written += 1;
    }
    Ok(stats)
}

fn copy_bottom<R: BufRead, W: Write>(
    n: usize,
    reader: &mut R,
    writer: &mut W,
) -> Result<LineStats> {
    let mut stats = LineStats::default();
    let mut ring: VecDeque<Vec<u8>> = VecDeque::with_capacity(n);
    let mut line = Vec::new();

    while read_line(reader, &mut line)? {
        stats.read += 1;
        if n == 0 {
            continue;
        }
        if ring.len() == n {
            // Recycle the evicted line's allocation.
            if let Some(old) = ring.pop_front() {
                ring.push_back(std::mem::replace(&mut line, old));
                continue;
            }
        }
        ring.push_back(std::mem::take(&mut line));
    }

    for line in &ring {
        write_line(writer, line)?;
        stats.written += 1;
    }
    Ok(stats)
}

fn copy_skipping<R: BufRead, W: Write>(
    top: usize,
    bottom: usize,
    reader: &mut R,
    writer: &mut W,
) -> Result<LineStats> {
    let mut stats = LineStats {
        read: skip_lines(reader, top)?,
        written: 0,
    };
    if stats.read < top {
        return Ok(stats);
    }

    // Each line is held back until `bottom` newer lines have been read.
    let mut ring: VecDeque<Vec<u8>> = VecDeque::with_capacity(bottom);
    let mut line = Vec::new();
    while read_line(reader, &mut line)? {
        stats.read += 1;
        if bottom == 0 {
            write_line(writer, &line)?;
            stats.written += 1;
            continue;
        }
        ring.push_back(std::mem::take(&mut line));
        if ring.len() > bottom
            && let Some(oldest) = ring.pop_front()
        {
            write_line(writer, &oldest)?;
            stats.written += 1;
            line = oldest;
        }
    }
    Ok(stats)
}
