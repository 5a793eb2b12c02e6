//! Method-call slot: `identifier.method(args)`.

use tracing::{debug, trace};

use crate::directory::Identifier;

use super::convert::ArgumentConverter;
use super::invocation::{InvocationTail, MethodLookup};
use super::object::ObjectReferenceSlot;
use super::{MethodCall, ResolvedInvocation, Slot, SlotContext};

/// A method call with its receiver resolved.
struct Bound<'a, 'e> {
    receiver: Identifier,
    tail: InvocationTail<'a, MethodLookup<'a>>,
    /// Everything up to and including the `.`.
    head: &'e str,
    /// The method name and argument list.
    remainder: &'e str,
}

/// Matches a method call on a live object.
///
/// The object reference is matched first; once it is complete, the text after
/// the `.` is matched as an invocation of one of the methods registered for the
/// object's type. Method names are matched case-sensitively.
pub struct MethodCallSlot<'a> {
    ctx: SlotContext<'a>,
    object: ObjectReferenceSlot<'a>,
}

impl<'a> MethodCallSlot<'a> {
    pub fn new(ctx: SlotContext<'a>) -> Self {
        Self {
            ctx,
            object: ObjectReferenceSlot::new(ctx),
        }
    }

    fn bind<'e>(&self, expression: &'e str) -> Option<Bound<'a, 'e>> {
        let receiver = self.object.resolve_identifier(expression)?;
        let remainder = self.object.extract_remainder(expression)?;
        let Some(type_name) = self
            .ctx
            .directory
            .type_of(&receiver)
            .and_then(|t| self.ctx.registry.exact_type_name(&t))
        else {
            trace!("[METHOD] '{}' has no registered type", receiver);
            return None;
        };
        let tail = InvocationTail::new(
            MethodLookup {
                registry: self.ctx.registry,
                type_name,
            },
            ArgumentConverter::new(self.ctx),
        );
        Some(Bound {
            receiver,
            tail,
            head: &expression[..expression.len() - remainder.len()],
            remainder,
        })
    }
}

impl Slot for MethodCallSlot<'_> {
    fn partial_matches(&self, expression: &str) -> bool {
        if !self.object.complete_matches(expression) {
            return self.object.partial_matches(expression);
        }
        self.bind(expression)
            .is_some_and(|bound| bound.tail.partial_matches(bound.remainder))
    }

    fn complete_matches(&self, expression: &str) -> bool {
        self.bind(expression)
            .is_some_and(|bound| bound.tail.complete_matches(bound.remainder))
    }

    fn resolve(&self, expression: &str) -> Option<ResolvedInvocation> {
        let bound = self.bind(expression)?;
        let (descriptor, arguments) = bound.tail.resolve(bound.remainder)?;
        debug!("[METHOD] '{}' resolves to {}", expression, descriptor);
        Some(ResolvedInvocation::Method(MethodCall {
            receiver: bound.receiver,
            descriptor: descriptor.clone(),
            arguments,
        }))
    }

    fn auto_complete(&self, expression: &str) -> Option<String> {
        if !self.object.complete_matches(expression) {
            return self.object.auto_complete(expression);
        }
        let bound = self.bind(expression)?;
        let tail = bound.tail.auto_complete(bound.remainder)?;
        Some(format!("{}{}", bound.head, tail))
    }

    fn suggestions(&self, expression: &str) -> Vec<String> {
        if !self.object.complete_matches(expression) {
            return self.object.suggestions(expression);
        }
        self.bind(expression)
            .map(|bound| bound.tail.suggestions(bound.remainder))
            .unwrap_or_default()
    }

    fn extract_remainder<'e>(&self, expression: &'e str) -> Option<&'e str> {
        let bound = self.bind(expression)?;
        bound.tail.residual(bound.remainder)
    }
}
