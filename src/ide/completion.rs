//! Auto-completion across alternative slots.

use tracing::{debug, trace};

use crate::slot::Slot;
use crate::suggest::longest_common_stem;

/// One completion step over every alternative still matching `expression`.
///
/// Alternatives that agree win outright. When they disagree only their common
/// stem is inserted, and only if it extends the expression without leaving the
/// grammar. `None` if no alternative matches.
pub(crate) fn complete_step(alternatives: &[&dyn Slot], expression: &str) -> Option<String> {
    let steps: Vec<String> = alternatives
        .iter()
        .filter(|slot| slot.partial_matches(expression))
        .filter_map(|slot| slot.auto_complete(expression))
        .collect();
    let step = match steps.as_slice() {
        [] => return None,
        [only] => only.clone(),
        [first, rest @ ..] if rest.iter().all(|s| s == first) => first.clone(),
        many => {
            let stem = longest_common_stem(many);
            let extends = stem.chars().count() > expression.chars().count()
                && alternatives.iter().any(|slot| slot.partial_matches(&stem));
            if extends { stem } else { expression.to_string() }
        }
    };
    trace!("[COMPLETE] step '{}' -> '{}'", expression, step);
    Some(step)
}

/// Repeat [`complete_step`] until the expression stops changing, at most
/// `max_steps` times.
pub(crate) fn complete_to_fixed_point(
    alternatives: &[&dyn Slot],
    expression: &str,
    max_steps: usize,
) -> Option<String> {
    let mut current = complete_step(alternatives, expression)?;
    for _ in 1..max_steps {
        let Some(next) = complete_step(alternatives, &current) else {
            break;
        };
        if next == current {
            break;
        }
        current = next;
    }
    debug!("[COMPLETE] '{}' -> '{}'", expression, current);
    Some(current)
}
