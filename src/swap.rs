//! Cursor-driven path swapping over a single line of text.
//!
//! Ties the quote scanner, the classifier, and the converters together into
//! the contract a host (editor plugin, CLI) calls: line + cursor offsets in,
//! replacement outcomes out. The host owns the actual buffer edit.

use crate::convert::{self, ConvertError, PathKind};
use crate::mapping::MappingTable;
use crate::scan::{self, QuotedSpan};

/// The replacement a host must apply for one literal
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SwapOutcome {
    /// Span of the original literal within the line (char offsets)
    pub span: QuotedSpan,
    /// Replacement text for the span, quotes included
    pub replacement: String,
    /// Whether the host must prefix the replacement with a raw-string
    /// marker. Only ever true for the linux → windows direction, and only
    /// when the literal was not already marked raw.
    pub needs_raw_marker: bool,
}

/// Convert the literal covered by an already-located span.
///
/// `is_raw` tells the core whether the literal carries a raw-string marker
/// in the host buffer; the marker itself is host syntax and never part of
/// the span.
pub fn swap_span(
    line: &str,
    span: QuotedSpan,
    is_raw: bool,
    table: &MappingTable,
) -> Result<SwapOutcome, ConvertError> {
    let literal = span.slice(line);

    let (replacement, needs_raw_marker) = match convert::classify(literal) {
        PathKind::Windows => (convert::to_linux(literal, table)?, false),
        PathKind::Linux => (convert::to_windows(literal, table)?, !is_raw),
    };

    tracing::debug!("swapped {} -> {}", literal, replacement);

    Ok(SwapOutcome {
        span,
        replacement,
        needs_raw_marker,
    })
}

/// Convert the quoted path literal surrounding `cursor`, if there is one.
///
/// Returns `Ok(None)` when the cursor is not inside any quoted string; the
/// host leaves the line untouched.
pub fn swap_at_cursor(
    line: &str,
    cursor: usize,
    is_raw: bool,
    table: &MappingTable,
) -> Result<Option<SwapOutcome>, ConvertError> {
    match scan::locate_string(line, cursor) {
        Some(span) => swap_span(line, span, is_raw, table).map(Some),
        None => Ok(None),
    }
}

/// Convert the literals under several cursors in one pass.
///
/// Cursors outside any quoted string are skipped; cursors landing in the
/// same literal produce a single outcome. `is_raw` is queried once per
/// distinct span. Outcomes come back ordered left to right; hosts should
/// apply them right to left so the earlier spans stay valid.
pub fn swap_at_cursors<F>(
    line: &str,
    cursors: &[usize],
    table: &MappingTable,
    mut is_raw: F,
) -> Result<Vec<SwapOutcome>, ConvertError>
where
    F: FnMut(QuotedSpan) -> bool,
{
    let mut outcomes: Vec<SwapOutcome> = Vec::new();

    for &cursor in cursors {
        let Some(span) = scan::locate_string(line, cursor) else {
            continue;
        };
        if outcomes.iter().any(|o| o.span == span) {
            continue;
        }
        outcomes.push(swap_span(line, span, is_raw(span), table)?);
    }

    outcomes.sort_by_key(|o| o.span.start);
    Ok(outcomes)
}
