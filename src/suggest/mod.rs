//! Suggestion building: common stems, remaining-parameter hints and
//! auto-corrected argument lists.
//!
//! These are the text-level helpers slots use to turn candidate sets into
//! insertions. They never consult the registry directly.

mod correct;
mod parameters;
mod stem;

pub use correct::auto_correct_arguments;
pub use parameters::suggest_remaining_parameters;
pub use stem::longest_common_stem;
