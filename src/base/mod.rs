//! Foundation layer for expression matching.
//!
//! This module provides the primitives every other layer builds on:
//! - [`constants`] - The fixed lexical tokens (`(`, `)`, `,`, `.`)
//! - [`text_utils`] - Identifier isolation and case-insensitive prefix helpers
//! - [`scan`] - The Delimiter Scanner (nesting-aware splitting)
//!
//! This module has NO dependencies on other cali modules.

pub mod constants;
pub mod scan;
pub mod text_utils;

pub use constants::{ARGUMENT_DELIMITER, ARGUMENT_SEPARATOR, CLOSE, OPEN, STATEMENT_DELIMITER};
pub use scan::{NestedSplit, find_matching_close, scan_nesting, split_respecting_nesting};
pub use text_utils::{
    is_identifier, is_word_character, leading_identifier, remainder_after, starts_with_ignore_case,
};
