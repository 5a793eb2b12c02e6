//! Statement chain: an object reference optionally followed by a method call.
//!
//! The object-reference slot consumes `identifier.`; whatever it leaves over is
//! handed to the method-call slot. A reference with nothing after its
//! delimiter is a statement of its own.

use tracing::trace;

use crate::slot::{MethodCallSlot, ObjectReferenceSlot, ResolvedInvocation, Slot, SlotContext};

/// Matches statements that start from a live object.
pub struct StatementChain<'a> {
    object: ObjectReferenceSlot<'a>,
    method: MethodCallSlot<'a>,
}

impl<'a> StatementChain<'a> {
    pub fn new(ctx: SlotContext<'a>) -> Self {
        Self {
            object: ObjectReferenceSlot::new(ctx),
            method: MethodCallSlot::new(ctx),
        }
    }

    /// `identifier.` with nothing but whitespace after it.
    fn is_bare_reference(&self, expression: &str) -> bool {
        self.object
            .extract_remainder(expression)
            .is_some_and(|rest| rest.trim().is_empty())
    }
}

impl Slot for StatementChain<'_> {
    fn partial_matches(&self, expression: &str) -> bool {
        self.is_bare_reference(expression) || self.method.partial_matches(expression)
    }

    fn complete_matches(&self, expression: &str) -> bool {
        self.is_bare_reference(expression) || self.method.complete_matches(expression)
    }

    fn resolve(&self, expression: &str) -> Option<ResolvedInvocation> {
        if self.is_bare_reference(expression) {
            return self.object.resolve(expression);
        }
        self.method.resolve(expression)
    }

    fn auto_complete(&self, expression: &str) -> Option<String> {
        let completed = self.method.auto_complete(expression);
        if completed.is_none() && self.is_bare_reference(expression) {
            trace!("[CHAIN] '{}' has no methods to offer", expression);
            return Some(expression.to_string());
        }
        completed
    }

    fn suggestions(&self, expression: &str) -> Vec<String> {
        self.method.suggestions(expression)
    }

    fn extract_remainder<'e>(&self, expression: &'e str) -> Option<&'e str> {
        if self.is_bare_reference(expression) {
            return self.object.extract_remainder(expression);
        }
        self.method.extract_remainder(expression)
    }
}
