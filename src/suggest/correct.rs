use tracing::trace;

use crate::base::{ARGUMENT_SEPARATOR, CLOSE, OPEN};
use crate::registry::CallableDescriptor;
use crate::slot::ArgumentConverter;

/// Rebuild an argument list for `descriptor` with each argument replaced by
/// its auto-correction.
///
/// The result starts with `(`. When every argument denotes exactly one value
/// the list is closed with `)` if the descriptor takes no more arguments, and
/// left open with a trailing `, ` otherwise. An ambiguous or unconvertible
/// argument leaves the list open with nothing appended.
pub fn auto_correct_arguments(
    converter: &ArgumentConverter<'_>,
    descriptor: &CallableDescriptor,
    raw_arguments: &[&str],
) -> String {
    let corrections: Vec<_> = raw_arguments
        .iter()
        .zip(descriptor.parameters())
        .map(|(raw, tag)| converter.correct(raw, tag))
        .collect();
    let all_unique = corrections.iter().all(|c| c.unique);
    let texts: Vec<&str> = corrections.iter().map(|c| c.text.as_str()).collect();

    let mut built = format!("{OPEN}{}", texts.join(ARGUMENT_SEPARATOR));
    let count = corrections.len();
    if all_unique && count == descriptor.arity() {
        built.push(CLOSE);
    } else if all_unique && count > 0 && count < descriptor.arity() {
        built.push_str(ARGUMENT_SEPARATOR);
    }
    trace!("[SUGGEST] {} corrects {:?} to '{}'", descriptor, raw_arguments, built);
    built
}
