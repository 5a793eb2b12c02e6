//! Parsing of a parenthesized argument list.

use crate::base::{ARGUMENT_DELIMITER, CLOSE, OPEN, scan_nesting};

/// Outcome of parsing an argument-list fragment.
///
/// Arguments are trimmed slices of the input. Nested argument lists stay
/// inside the argument that contains them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseState<'e> {
    /// Nothing (or only whitespace) was given.
    EmptyNoOpen,
    /// The fragment does not begin with `(`.
    DoesNotOpen,
    /// `(` with nothing after it yet.
    OpenNoParameters,
    /// Arguments are being typed and the list is not closed yet. The last
    /// argument may be empty (just after a `,`).
    ParametersNoClose { arguments: Vec<&'e str> },
    /// A closed list, with the text that follows the closing `)`.
    Success {
        arguments: Vec<&'e str>,
        residual: &'e str,
    },
}

impl<'e> ParseState<'e> {
    /// Arguments seen so far, if the list was opened.
    pub fn arguments(&self) -> &[&'e str] {
        match self {
            ParseState::ParametersNoClose { arguments } | ParseState::Success { arguments, .. } => {
                arguments
            }
            _ => &[],
        }
    }

    /// Whether the fragment opened an argument list.
    pub fn is_open(&self) -> bool {
        !matches!(self, ParseState::EmptyNoOpen | ParseState::DoesNotOpen)
    }

    /// Whether the list was closed.
    pub fn is_success(&self) -> bool {
        matches!(self, ParseState::Success { .. })
    }
}

/// Parse `fragment` as an argument list.
///
/// Leading whitespace is ignored. A `)` only closes the list when it is not
/// balancing a nested `(`.
pub fn parse_arguments(fragment: &str) -> ParseState<'_> {
    let fragment = fragment.trim_start();
    if fragment.is_empty() {
        return ParseState::EmptyNoOpen;
    }
    let Some(inner) = fragment.strip_prefix(OPEN) else {
        return ParseState::DoesNotOpen;
    };
    if inner.trim().is_empty() {
        return ParseState::OpenNoParameters;
    }

    let close = CLOSE.to_string();
    let split = scan_nesting(inner, Some(&close), ARGUMENT_DELIMITER);
    let mut arguments: Vec<&str> = split.parts.into_iter().map(str::trim).collect();
    if arguments == [""] {
        arguments.clear();
    }
    match split.stopped_at {
        None => ParseState::ParametersNoClose { arguments },
        Some(at) => ParseState::Success {
            arguments,
            residual: &inner[at + CLOSE.len_utf8()..],
        },
    }
}
