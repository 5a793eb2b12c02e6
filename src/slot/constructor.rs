//! Constructor slot: `TypeName(args)`.

use smol_str::SmolStr;
use tracing::debug;

use super::convert::ArgumentConverter;
use super::invocation::{ConstructorLookup, InvocationTail};
use super::{ConstructorCall, ResolvedInvocation, Slot, SlotContext};

/// Matches a constructor call of a registered type.
///
/// The type name is matched case-insensitively. A call is complete once its
/// type name is an exact, unambiguous match and exactly one constructor of
/// that type takes the given number of arguments.
pub struct ConstructorSlot<'a> {
    tail: InvocationTail<'a, ConstructorLookup<'a>>,
}

impl<'a> ConstructorSlot<'a> {
    pub fn new(ctx: SlotContext<'a>) -> Self {
        Self {
            tail: InvocationTail::new(
                ConstructorLookup {
                    registry: ctx.registry,
                },
                ArgumentConverter::new(ctx),
            ),
        }
    }
}

impl Slot for ConstructorSlot<'_> {
    fn partial_matches(&self, expression: &str) -> bool {
        self.tail.partial_matches(expression)
    }

    fn complete_matches(&self, expression: &str) -> bool {
        self.tail.complete_matches(expression)
    }

    fn resolve(&self, expression: &str) -> Option<ResolvedInvocation> {
        let (descriptor, arguments) = self.tail.resolve(expression)?;
        debug!("[CONSTRUCTOR] '{}' resolves to {}", expression, descriptor);
        Some(ResolvedInvocation::Constructor(ConstructorCall {
            type_name: SmolStr::new(descriptor.owner()),
            descriptor: descriptor.clone(),
            arguments,
        }))
    }

    fn auto_complete(&self, expression: &str) -> Option<String> {
        self.tail.auto_complete(expression)
    }

    fn suggestions(&self, expression: &str) -> Vec<String> {
        self.tail.suggestions(expression)
    }

    fn extract_remainder<'e>(&self, expression: &'e str) -> Option<&'e str> {
        self.tail.residual(expression)
    }
}
