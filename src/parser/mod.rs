//! Argument List Parser.
//!
//! Turns `"(a, b, c)"`-shaped fragments into raw argument strings. The
//! five-state [`ParseState`] it produces is what every slot's matching is
//! defined in terms of: partially typed lists are states, not errors.

mod arguments;

pub use arguments::{ParseState, parse_arguments};
