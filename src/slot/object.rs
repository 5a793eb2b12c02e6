//! Object-reference slot: `identifier.`

use tracing::trace;

use crate::base::{STATEMENT_DELIMITER, is_identifier, leading_identifier, remainder_after};
use crate::directory::Identifier;
use crate::suggest::longest_common_stem;

use super::{ResolvedInvocation, Slot, SlotContext};

/// An identifier, and whatever follows its statement delimiter.
struct Reference<'e> {
    /// Leading whitespace and identifier, as typed.
    head: &'e str,
    identifier: &'e str,
    /// Text after the `.`, if it was typed.
    remainder: Option<&'e str>,
}

/// Matches a reference to a live object, optionally followed by `.`.
///
/// Any prefix of a known identifier is a partial match, as is the empty
/// expression. The reference is complete once the delimiter is typed and the
/// identifier names exactly one object.
pub struct ObjectReferenceSlot<'a> {
    ctx: SlotContext<'a>,
}

impl<'a> ObjectReferenceSlot<'a> {
    pub fn new(ctx: SlotContext<'a>) -> Self {
        Self { ctx }
    }

    fn split<'e>(&self, expression: &'e str) -> Option<Reference<'e>> {
        let trimmed = expression.trim_start();
        let (identifier, after) = leading_identifier(trimmed);
        let head = &expression[..expression.len() - after.len()];
        if after.is_empty() {
            let valid = identifier.is_empty() || is_identifier(identifier);
            return valid.then_some(Reference {
                head,
                identifier,
                remainder: None,
            });
        }
        let remainder = after.strip_prefix(STATEMENT_DELIMITER)?;
        is_identifier(identifier).then_some(Reference {
            head,
            identifier,
            remainder: Some(remainder),
        })
    }

    /// The single object a complete reference names.
    pub fn resolve_identifier(&self, expression: &str) -> Option<Identifier> {
        let reference = self.split(expression)?;
        reference.remainder?;
        self.ctx.directory.lookup_exact(reference.identifier)
    }

    fn known_prefix(&self, identifier: &str) -> bool {
        !self.ctx.directory.lookup_by_prefix(identifier).is_empty()
    }
}

impl Slot for ObjectReferenceSlot<'_> {
    fn partial_matches(&self, expression: &str) -> bool {
        match self.split(expression) {
            Some(Reference {
                identifier,
                remainder: None,
                ..
            }) => identifier.is_empty() || self.known_prefix(identifier),
            Some(Reference { identifier, .. }) => self.known_prefix(identifier),
            None => false,
        }
    }

    fn complete_matches(&self, expression: &str) -> bool {
        self.resolve_identifier(expression).is_some()
    }

    fn resolve(&self, expression: &str) -> Option<ResolvedInvocation> {
        self.resolve_identifier(expression)
            .map(ResolvedInvocation::Object)
    }

    fn auto_complete(&self, expression: &str) -> Option<String> {
        if !self.partial_matches(expression) {
            return None;
        }
        let reference = self.split(expression)?;
        if reference.remainder.is_some() {
            return Some(expression.to_string());
        }

        let candidates: Vec<String> = self
            .ctx
            .directory
            .lookup_by_prefix(reference.identifier)
            .iter()
            .map(Identifier::to_string)
            .collect();
        let stem = longest_common_stem(candidates.as_slice());
        let leading = &reference.head[..reference.head.len() - reference.identifier.len()];
        let identifier = if stem.chars().count() > reference.identifier.chars().count() {
            stem
        } else {
            reference.identifier.to_string()
        };
        let mut completed = format!("{leading}{identifier}");
        if candidates.len() == 1 && self.ctx.directory.lookup_exact(&identifier).is_some() {
            completed.push(STATEMENT_DELIMITER);
        }
        trace!("[OBJECT] complete '{}' -> '{}'", expression, completed);
        Some(completed)
    }

    fn suggestions(&self, expression: &str) -> Vec<String> {
        match self.split(expression) {
            Some(Reference {
                identifier,
                remainder: None,
                ..
            }) => self
                .ctx
                .directory
                .lookup_by_prefix(identifier)
                .iter()
                .map(|id| format!("{}{STATEMENT_DELIMITER}", remainder_after(id.as_str(), identifier)))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn extract_remainder<'e>(&self, expression: &'e str) -> Option<&'e str> {
        self.complete_matches(expression)
            .then(|| self.split(expression).and_then(|r| r.remainder))
            .flatten()
    }
}
