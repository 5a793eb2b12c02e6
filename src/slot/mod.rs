//! Parameter slots: matchers for one syntactic unit of a statement.
//!
//! Every slot answers the same questions about an expression fragment:
//!
//! - **partial match**: could the fragment become valid with more input?
//! - **complete match**: is it valid and executable right now?
//! - **resolve**: what does it denote?
//! - **auto-complete**: what can be inserted without guessing?
//! - **remainder**: what follows the part this slot consumes?
//!
//! ## Slots
//!
//! | Slot | Shape |
//! |------|-------|
//! | [`ConstructorSlot`] | `TypeName(args)` |
//! | [`ObjectReferenceSlot`] | `identifier.` |
//! | [`MethodCallSlot`] | `identifier.method(args)` |
//!
//! Constructor and method slots share one invocation-tail parser, differing
//! only in where names and descriptors are looked up.

mod constructor;
mod convert;
mod invocation;
mod method;
mod object;

pub use constructor::ConstructorSlot;
pub use convert::{ArgumentConverter, ConversionError, Correction, Value};
pub use invocation::TailState;
pub use method::MethodCallSlot;
pub use object::ObjectReferenceSlot;

use smol_str::SmolStr;

use crate::directory::{Identifier, ObjectDirectory};
use crate::registry::{CallableDescriptor, TypeRegistry};

/// The collaborators a slot evaluates against.
#[derive(Clone, Copy)]
pub struct SlotContext<'a> {
    pub registry: &'a TypeRegistry,
    pub directory: &'a dyn ObjectDirectory,
}

impl<'a> SlotContext<'a> {
    pub fn new(registry: &'a TypeRegistry, directory: &'a dyn ObjectDirectory) -> Self {
        Self {
            registry,
            directory,
        }
    }
}

/// A resolved constructor call.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorCall {
    pub type_name: SmolStr,
    pub descriptor: CallableDescriptor,
    pub arguments: Vec<Value>,
}

/// A resolved method call on a live object.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub receiver: Identifier,
    pub descriptor: CallableDescriptor,
    pub arguments: Vec<Value>,
}

/// What a complete statement denotes.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedInvocation {
    Constructor(ConstructorCall),
    Method(MethodCall),
    Object(Identifier),
}

impl ResolvedInvocation {
    /// The descriptor being invoked, if this is a call.
    pub fn descriptor(&self) -> Option<&CallableDescriptor> {
        match self {
            ResolvedInvocation::Constructor(call) => Some(&call.descriptor),
            ResolvedInvocation::Method(call) => Some(&call.descriptor),
            ResolvedInvocation::Object(_) => None,
        }
    }

    /// Converted arguments of the call; empty for an object reference.
    pub fn arguments(&self) -> &[Value] {
        match self {
            ResolvedInvocation::Constructor(call) => &call.arguments,
            ResolvedInvocation::Method(call) => &call.arguments,
            ResolvedInvocation::Object(_) => &[],
        }
    }
}

/// Matching, resolution and completion of one syntactic unit.
pub trait Slot {
    /// Whether `expression` is a prefix of something this slot accepts.
    fn partial_matches(&self, expression: &str) -> bool;

    /// Whether `expression` is accepted as it stands. Implies a partial match.
    fn complete_matches(&self, expression: &str) -> bool;

    /// What a complete `expression` denotes, or `None` if it is incomplete,
    /// ambiguous, or an argument does not convert.
    fn resolve(&self, expression: &str) -> Option<ResolvedInvocation>;

    /// One completion step: `expression` extended by whatever can be inserted
    /// unambiguously (possibly nothing). `None` if it is not a partial match.
    fn auto_complete(&self, expression: &str) -> Option<String>;

    /// Candidate insertions for a picker, in lookup order.
    fn suggestions(&self, expression: &str) -> Vec<String>;

    /// The text following the part of `expression` this slot consumes.
    fn extract_remainder<'e>(&self, expression: &'e str) -> Option<&'e str>;
}
