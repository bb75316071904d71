//! Host-side glue around the core contract.
//!
//! What an embedding editor would do itself: detect whether a literal is
//! marked raw by looking at the buffer just before the opening quote, and
//! splice replacement text back into the line. The core never inspects the
//! buffer outside the span; it only receives the raw flag and returns the
//! replacement.

use crate::scan::QuotedSpan;
use crate::swap::SwapOutcome;

/// Marker prefix indicating backslashes in the following literal are not
/// escape sequences
pub const RAW_MARKER: char = 'r';

/// Check if the literal at `span` is a raw string.
///
/// True when the character directly before the opening quote is the raw
/// marker.
pub fn detect_raw_marker(line: &str, span: QuotedSpan) -> bool {
    span.start > 0 && line.chars().nth(span.start - 1) == Some(RAW_MARKER)
}

/// Splice one outcome into `line`, prefixing the raw marker when required.
///
/// An existing marker on a windows-bound literal is left alone; markers are
/// only ever added, never stripped.
pub fn apply(line: &str, outcome: &SwapOutcome) -> String {
    let range = outcome.span.byte_range(line);

    let mut result = String::with_capacity(line.len() + outcome.replacement.len() + 1);
    result.push_str(&line[..range.start]);
    if outcome.needs_raw_marker {
        result.push(RAW_MARKER);
    }
    result.push_str(&outcome.replacement);
    result.push_str(&line[range.end..]);
    result
}

/// Apply several outcomes to one line.
///
/// Replacements run right to left so the spans of earlier literals stay
/// valid while later ones are rewritten.
pub fn apply_all(line: &str, outcomes: &[SwapOutcome]) -> String {
    let mut ordered: Vec<&SwapOutcome> = outcomes.iter().collect();
    ordered.sort_by_key(|o| o.span.start);

    let mut result = line.to_string();
    for outcome in ordered.into_iter().rev() {
        result = apply(&result, outcome);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappingTable;
    use crate::swap;

    #[test]
    fn test_detect_raw_marker() {
        let line = r#"p = r"/mnt/c/x""#;
        assert!(detect_raw_marker(line, QuotedSpan::new(5, 15)));

        let line = r#"p = "/mnt/c/x""#;
        assert!(!detect_raw_marker(line, QuotedSpan::new(4, 14)));
    }

    #[test]
    fn test_detect_raw_marker_at_line_start() {
        let line = r#""/mnt/c/x""#;
        assert!(!detect_raw_marker(line, QuotedSpan::new(0, 10)));
    }

    #[test]
    fn test_apply_plain_replacement() {
        let line = r#"p = "C:\x""#;
        let outcome = swap::swap_at_cursor(line, 6, false, &MappingTable::empty())
            .unwrap()
            .unwrap();
        assert_eq!(apply(line, &outcome), r#"p = "/mnt/c/x""#);
    }

    #[test]
    fn test_apply_adds_raw_marker() {
        let line = r#"p = "/mnt/c/x""#;
        let outcome = swap::swap_at_cursor(line, 6, false, &MappingTable::empty())
            .unwrap()
            .unwrap();
        assert_eq!(apply(line, &outcome), r#"p = r"C:\x""#);
    }

    #[test]
    fn test_apply_keeps_existing_marker() {
        let line = r#"p = r"/mnt/c/x""#;
        let span = QuotedSpan::new(5, 15);
        let raw = detect_raw_marker(line, span);
        let outcome = swap::swap_span(line, span, raw, &MappingTable::empty()).unwrap();
        assert_eq!(apply(line, &outcome), r#"p = r"C:\x""#);
    }

    #[test]
    fn test_apply_all_right_to_left() {
        let line = r#"a = "C:\foo"; b = "/mnt/d/bar""#;
        let outcomes = swap::swap_at_cursors(line, &[6, 22], &MappingTable::empty(), |span| {
            detect_raw_marker(line, span)
        })
        .unwrap();
        assert_eq!(
            apply_all(line, &outcomes),
            r#"a = "/mnt/c/foo"; b = r"D:\bar""#
        );
    }

    #[test]
    fn test_apply_all_with_no_outcomes_is_noop() {
        let line = r#"nothing quoted here"#;
        assert_eq!(apply_all(line, &[]), line);
    }
}
