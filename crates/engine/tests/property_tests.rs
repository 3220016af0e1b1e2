use lines_engine::processor::process;
use lines_engine::range::{LineRange, RangeSet};
use lines_engine::selection::Selection;
use proptest::prelude::*;
use std::io::{BufReader, Cursor};

fn filter(selection: &Selection, input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    process(selection, &mut Cursor::new(input), &mut out).unwrap();
    out
}

fn closed(start: usize, end: usize) -> Selection {
    Selection::ranges([LineRange::new(start, Some(end)).unwrap()])
}

/// Non-empty lines, so an unterminated final line still counts as a line.
fn text() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z ]{1,8}", 1..40)
}

fn join(lines: &[String], trailing_newline: bool) -> String {
    let mut s = lines.join("\n");
    if trailing_newline {
        s.push('\n');
    }
    s
}

proptest! {
    #[test]
    fn test_closed_range_yields_exact_lines(
        lines in text(),
        trailing in any::<bool>(),
        start in any::<prop::sample::Index>(),
        len in 0usize..40,
    ) {
        let n = lines.len();
        let a = start.index(n) + 1;
        let b = (a + len).min(n);
        let input = join(&lines, trailing);

        let out = filter(&closed(a, b), input.as_bytes());

        let mut expected = lines[a - 1..b].join("\n");
        if b < n || trailing {
            expected.push('\n');
        }
        prop_assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_renumbered_range_is_idempotent(
        lines in text(),
        a in 1usize..40,
        len in 0usize..40,
    ) {
        let input = join(&lines, true);
        let b = a + len;

        let first = filter(&closed(a, b), input.as_bytes());
        let again = filter(&closed(1, b - a + 1), &first);
        prop_assert_eq!(first, again);
    }

    #[test]
    fn test_range_set_matches_membership(
        lines in text(),
        bounds in prop::collection::vec((1usize..45, prop::option::of(0usize..10)), 1..5),
    ) {
        let ranges: Vec<LineRange> = bounds
            .iter()
            .map(|&(start, len)| LineRange::new(start, len.map(|l| start + l)).unwrap())
            .collect();
        let set = RangeSet::new(ranges.clone());
        let input = join(&lines, true);

        let out = filter(&Selection::Ranges(set), input.as_bytes());

        let expected: String = lines
            .iter()
            .enumerate()
            .filter(|(i, _)| ranges.iter().any(|r| r.contains(i + 1)))
            .map(|(_, l)| format!("{l}\n"))
            .collect();
        prop_assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_skip_agrees_with_small_buffers(
        lines in text(),
        top in 0usize..45,
        bottom in 0usize..45,
        capacity in 1usize..16,
    ) {
        let input = join(&lines, false);
        let selection = Selection::skip(top, bottom);

        let mut small = Vec::new();
        let mut reader = BufReader::with_capacity(capacity, Cursor::new(input.as_bytes()));
        process(&selection, &mut reader, &mut small).unwrap();

        prop_assert_eq!(small, filter(&selection, input.as_bytes()));
    }

    #[test]
    fn test_top_and_bottom_partition_input(
        lines in text(),
        k in 0usize..45,
    ) {
        let input = join(&lines, true);
        let n = lines.len();
        let k = k.min(n);

        let mut joined = Vec::new();
        if k > 0 {
            joined.extend(filter(&Selection::Top(k), input.as_bytes()));
        }
        if n - k > 0 {
            joined.extend(filter(&Selection::Bottom(n - k), input.as_bytes()));
        }
        prop_assert_eq!(joined, input.into_bytes());
    }
}
