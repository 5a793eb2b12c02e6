//! Delimiter Scanner: nesting-aware splitting of argument text.
//!
//! Argument lists may themselves contain argument lists (a constructor call
//! passed as an argument), so a delimiter or closing token only counts when it
//! appears outside every nested `(` … `)` pair.

use super::constants::{CLOSE, OPEN};

/// Result of a nesting-aware scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedSplit<'t> {
    /// Text between top-level delimiters, untrimmed.
    pub parts: Vec<&'t str>,
    /// Byte offset of the stop pattern, if it was found outside any nesting.
    pub stopped_at: Option<usize>,
}

/// Scan `text` left to right, splitting on `delimiter` at depth 0 and stopping
/// at the first depth-0 occurrence of `stop`.
///
/// Everything from the stop pattern onwards is excluded from `parts`. Empty
/// input (or input that stops immediately) yields no parts; any other input
/// yields at least one.
pub fn scan_nesting<'t>(text: &'t str, stop: Option<&str>, delimiter: char) -> NestedSplit<'t> {
    let stop = stop.filter(|s| !s.is_empty());
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut stopped_at = None;

    for (i, c) in text.char_indices() {
        if depth == 0 {
            if let Some(stop) = stop {
                if text[i..].starts_with(stop) {
                    stopped_at = Some(i);
                    break;
                }
            }
            if c == delimiter {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
                continue;
            }
        }
        match c {
            OPEN => depth += 1,
            CLOSE => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    let end = stopped_at.unwrap_or(text.len());
    if end > start || !parts.is_empty() {
        parts.push(&text[start..end]);
    }

    NestedSplit { parts, stopped_at }
}

/// Split `text` on depth-0 `delimiter`s, truncating at the first depth-0 `stop`.
///
/// # Example
/// ```
/// use cali::base::split_respecting_nesting;
///
/// let parts = split_respecting_nesting("a, Pair(1, 2), c) tail", ")", ',');
/// assert_eq!(parts, vec!["a", " Pair(1, 2)", " c"]);
/// ```
pub fn split_respecting_nesting<'t>(text: &'t str, stop: &str, delimiter: char) -> Vec<&'t str> {
    scan_nesting(text, Some(stop), delimiter).parts
}

/// Byte offset of the `)` that balances the first `(` in `text`.
///
/// Returns `None` when there is no `(` or it is never balanced.
pub fn find_matching_close(text: &str) -> Option<usize> {
    let open = text.find(OPEN)?;
    let mut depth = 0usize;
    for (i, c) in text[open..].char_indices() {
        match c {
            OPEN => depth += 1,
            CLOSE => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}
