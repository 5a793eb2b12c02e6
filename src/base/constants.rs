//! Lexical tokens of the statement grammar.
//!
//! These are fixed: the grammar is a single statement and no part of it is
//! configurable.

/// Opens an argument list.
pub const OPEN: char = '(';

/// Closes an argument list.
pub const CLOSE: char = ')';

/// Separates arguments inside an argument list.
pub const ARGUMENT_DELIMITER: char = ',';

/// Separates an object reference from the member that follows it.
pub const STATEMENT_DELIMITER: char = '.';

/// Text placed between rendered arguments and parameter placeholders.
pub const ARGUMENT_SEPARATOR: &str = ", ";
