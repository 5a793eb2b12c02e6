use indexmap::IndexSet;

use crate::base::{ARGUMENT_SEPARATOR, CLOSE};
use crate::registry::CallableDescriptor;

/// Hints for the parameters still to be typed, one per distinct shape.
///
/// Each hint lists the remaining parameter types as `<Type>` followed by the
/// closing token, e.g. `<String>, <Number> )`. A descriptor with nothing left
/// to type contributes a bare `)`. Descriptors taking fewer than
/// `already_typed` arguments are skipped.
pub fn suggest_remaining_parameters(
    descriptors: &[&CallableDescriptor],
    already_typed: usize,
) -> Vec<String> {
    let hints: IndexSet<String> = descriptors
        .iter()
        .filter_map(|d| d.parameters().get(already_typed..))
        .map(|remaining| {
            if remaining.is_empty() {
                return CLOSE.to_string();
            }
            let listed: Vec<String> = remaining
                .iter()
                .map(|tag| format!("<{}>", tag.display_name()))
                .collect();
            format!("{} {CLOSE}", listed.join(ARGUMENT_SEPARATOR))
        })
        .collect();
    hints.into_iter().collect()
}
