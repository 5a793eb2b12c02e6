//! The invocation tail `name(args)` shared by constructor and method slots.
//!
//! A tail moves through these states as it is typed:
//!
//! ```text
//! Empty → Naming → Opened → Filling → Closed
//! ```
//!
//! Every state is reachable from `Empty` by truncating a longer tail, which is
//! what keeps every prefix of a complete call a partial match. `Closed` is
//! only complete once the name and arity single out one descriptor.

use indexmap::IndexSet;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::{
    ARGUMENT_SEPARATOR, CLOSE, OPEN, is_identifier, leading_identifier, remainder_after,
    starts_with_ignore_case,
};
use crate::parser::{ParseState, parse_arguments};
use crate::registry::{CallableDescriptor, TypeRegistry};
use crate::suggest::{auto_correct_arguments, longest_common_stem, suggest_remaining_parameters};

use super::convert::{ArgumentConverter, Value};

/// Where names and descriptors of an invocation tail come from.
pub(crate) trait CallableLookup<'a> {
    /// Names the typed prefix could still become, in lookup order.
    fn candidate_names(&self, prefix: &str) -> Vec<SmolStr>;

    /// Whether `name` is, as typed, the name of something callable.
    fn is_exact_name(&self, name: &str) -> bool;

    /// Descriptors reachable from the typed name once its argument list is open.
    fn descriptors(&self, name: &str, arity: Option<usize>) -> Vec<&'a CallableDescriptor>;

    /// The single descriptor a closed call with `arity` arguments resolves to.
    fn exact(&self, name: &str, arity: usize) -> Option<&'a CallableDescriptor>;
}

/// Constructors, looked up by type name.
pub(crate) struct ConstructorLookup<'a> {
    pub registry: &'a TypeRegistry,
}

impl<'a> CallableLookup<'a> for ConstructorLookup<'a> {
    fn candidate_names(&self, prefix: &str) -> Vec<SmolStr> {
        self.registry.partial_match_type_names(prefix)
    }

    fn is_exact_name(&self, name: &str) -> bool {
        self.registry.exact_type_name(name).is_some()
    }

    fn descriptors(&self, name: &str, arity: Option<usize>) -> Vec<&'a CallableDescriptor> {
        let registry = self.registry;
        match registry.exact_type_name(name) {
            Some(type_name) => registry.find_constructors(&type_name, arity),
            None => registry
                .partial_match_type_names(name)
                .iter()
                .flat_map(|type_name| registry.find_constructors(type_name, arity))
                .collect(),
        }
    }

    fn exact(&self, name: &str, arity: usize) -> Option<&'a CallableDescriptor> {
        let registry = self.registry;
        let type_name = registry.exact_type_name(name)?;
        registry.match_constructor_exact(&type_name, arity)
    }
}

/// Methods of one registered type.
pub(crate) struct MethodLookup<'a> {
    pub registry: &'a TypeRegistry,
    pub type_name: SmolStr,
}

impl<'a> CallableLookup<'a> for MethodLookup<'a> {
    fn candidate_names(&self, prefix: &str) -> Vec<SmolStr> {
        let names: IndexSet<SmolStr> = self
            .registry
            .find_methods(&self.type_name, Some(prefix), None)
            .into_iter()
            .map(|m| SmolStr::new(m.name()))
            .collect();
        names.into_iter().collect()
    }

    fn is_exact_name(&self, name: &str) -> bool {
        self.registry
            .find_methods(&self.type_name, Some(name), None)
            .iter()
            .any(|m| m.name() == name)
    }

    fn descriptors(&self, name: &str, arity: Option<usize>) -> Vec<&'a CallableDescriptor> {
        let registry = self.registry;
        registry.find_methods(&self.type_name, Some(name), arity)
    }

    /// Method names are matched case-sensitively, as in [`Self::descriptors`].
    fn exact(&self, name: &str, arity: usize) -> Option<&'a CallableDescriptor> {
        let registry = self.registry;
        registry
            .match_method_exact(&self.type_name, name, arity)
            .filter(|m| m.name().starts_with(name))
    }
}

/// How far an invocation tail has been typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TailState<'e> {
    /// Nothing typed.
    Empty,
    /// Typing the name. `spaced` is set once whitespace follows it.
    Naming { name: &'e str, spaced: bool },
    /// `(` typed, no arguments yet. `head` is everything before the `(`.
    Opened { name: &'e str, head: &'e str },
    /// Arguments being typed.
    Filling {
        name: &'e str,
        head: &'e str,
        arguments: Vec<&'e str>,
    },
    /// The argument list is closed.
    Closed {
        name: &'e str,
        head: &'e str,
        arguments: Vec<&'e str>,
        residual: &'e str,
    },
    /// Not the shape of an invocation.
    Malformed,
}

impl<'e> TailState<'e> {
    /// Classify `text` as an invocation tail.
    pub fn of(text: &'e str) -> Self {
        let trimmed = text.trim_start();
        if trimmed.is_empty() {
            return TailState::Empty;
        }
        let (name, rest) = leading_identifier(trimmed);
        if !is_identifier(name) {
            return TailState::Malformed;
        }
        let head = &text[..text.len() - rest.trim_start().len()];
        match parse_arguments(rest) {
            ParseState::EmptyNoOpen => TailState::Naming {
                name,
                spaced: !rest.is_empty(),
            },
            ParseState::DoesNotOpen => TailState::Malformed,
            ParseState::OpenNoParameters => TailState::Opened { name, head },
            ParseState::ParametersNoClose { arguments } => TailState::Filling {
                name,
                head,
                arguments,
            },
            ParseState::Success {
                arguments,
                residual,
            } => TailState::Closed {
                name,
                head,
                arguments,
                residual,
            },
        }
    }
}

/// Matching and completion of `name(args)` against a [`CallableLookup`].
pub(crate) struct InvocationTail<'a, L> {
    lookup: L,
    converter: ArgumentConverter<'a>,
}

impl<'a, L: CallableLookup<'a>> InvocationTail<'a, L> {
    pub fn new(lookup: L, converter: ArgumentConverter<'a>) -> Self {
        Self { lookup, converter }
    }

    pub fn partial_matches(&self, text: &str) -> bool {
        let state = TailState::of(text);
        trace!("[TAIL] partial '{}' -> {:?}", text, state);
        match state {
            TailState::Empty => !self.lookup.candidate_names("").is_empty(),
            TailState::Naming {
                name,
                spaced: false,
            } => !self.lookup.candidate_names(name).is_empty(),
            TailState::Naming { name, spaced: true }
            | TailState::Opened { name, .. }
            | TailState::Filling { name, .. } => !self.lookup.descriptors(name, None).is_empty(),
            TailState::Closed {
                name,
                arguments,
                residual,
                ..
            } => {
                residual.trim().is_empty()
                    && !self.lookup.descriptors(name, Some(arguments.len())).is_empty()
            }
            TailState::Malformed => false,
        }
    }

    pub fn complete_matches(&self, text: &str) -> bool {
        self.complete_descriptor(text).is_some()
    }

    fn complete_descriptor<'e>(
        &self,
        text: &'e str,
    ) -> Option<(&'a CallableDescriptor, Vec<&'e str>)> {
        if !self.partial_matches(text) {
            return None;
        }
        match TailState::of(text) {
            TailState::Closed {
                name,
                arguments,
                residual,
                ..
            } if residual.trim().is_empty() => {
                let descriptor = self.lookup.exact(name, arguments.len())?;
                Some((descriptor, arguments))
            }
            _ => None,
        }
    }

    /// The descriptor a complete tail invokes, with converted arguments.
    pub fn resolve(&self, text: &str) -> Option<(&'a CallableDescriptor, Vec<Value>)> {
        let (descriptor, arguments) = self.complete_descriptor(text)?;
        match self.converter.convert_all(&arguments, descriptor.parameters()) {
            Ok(values) => Some((descriptor, values)),
            Err(err) => {
                trace!("[TAIL] '{}' does not resolve: {}", text, err);
                None
            }
        }
    }

    /// Text after the closing `)`.
    pub fn residual<'e>(&self, text: &'e str) -> Option<&'e str> {
        match TailState::of(text) {
            TailState::Closed { residual, .. } => Some(residual),
            _ => None,
        }
    }

    pub fn suggestions(&self, text: &str) -> Vec<String> {
        let suggestions: IndexSet<String> = match TailState::of(text) {
            TailState::Empty => self
                .lookup
                .candidate_names("")
                .iter()
                .map(|n| format!("{n}{OPEN}"))
                .collect(),
            TailState::Naming {
                name,
                spaced: false,
            } => self
                .lookup
                .candidate_names(name)
                .iter()
                .map(|n| format!("{}{OPEN}", remainder_after(n, name)))
                .collect(),
            TailState::Naming { name, spaced: true }
                if !self.lookup.descriptors(name, None).is_empty() =>
            {
                [OPEN.to_string()].into_iter().collect()
            }
            TailState::Opened { name, .. } => {
                suggest_remaining_parameters(&self.lookup.descriptors(name, None), 0)
                    .into_iter()
                    .collect()
            }
            TailState::Filling {
                name, arguments, ..
            } => self.filling_suggestions(name, &arguments).into_iter().collect(),
            _ => IndexSet::new(),
        };
        suggestions.into_iter().collect()
    }

    fn filling_suggestions(&self, name: &str, arguments: &[&str]) -> Vec<String> {
        let typed = arguments.len();
        let viable: Vec<_> = self
            .lookup
            .descriptors(name, None)
            .into_iter()
            .filter(|d| d.arity() >= typed)
            .collect();
        if arguments.last().is_some_and(|a| a.is_empty()) {
            return suggest_remaining_parameters(&viable, typed - 1);
        }
        suggest_remaining_parameters(&viable, typed)
            .into_iter()
            .map(|s| {
                if s == CLOSE.to_string() {
                    s
                } else {
                    format!("{ARGUMENT_SEPARATOR}{s}")
                }
            })
            .collect()
    }

    /// One completion step over the tail.
    pub fn auto_complete(&self, text: &str) -> Option<String> {
        if !self.partial_matches(text) {
            return None;
        }
        let completed = match TailState::of(text) {
            TailState::Empty => self.complete_name(text, ""),
            TailState::Naming {
                name,
                spaced: false,
            } => self.complete_name(text, name),
            TailState::Naming { name, spaced: true } => {
                if self.opens_after(name) {
                    format!("{text}{OPEN}")
                } else {
                    text.to_string()
                }
            }
            TailState::Opened { name, head } => {
                self.complete_arguments(text, name, head, &[], false)
            }
            TailState::Filling {
                name,
                head,
                arguments,
            } => self.complete_arguments(text, name, head, &arguments, false),
            TailState::Closed {
                name,
                head,
                arguments,
                ..
            } => self.complete_arguments(text, name, head, &arguments, true),
            TailState::Malformed => return None,
        };
        Some(completed)
    }

    /// A finished name gets its `(` once nothing else could be meant.
    fn opens_after(&self, name: &str) -> bool {
        self.lookup.candidate_names(name).len() == 1 && self.lookup.is_exact_name(name)
    }

    fn complete_name(&self, text: &str, name: &str) -> String {
        let leading = &text[..text.len() - text.trim_start().len()];
        let candidates = self.lookup.candidate_names(name);
        let stem = longest_common_stem(candidates.as_slice());
        let name = if stem.chars().count() > name.chars().count() {
            stem
        } else {
            name.to_string()
        };
        let mut completed = format!("{leading}{name}");
        if self.opens_after(&name) {
            completed.push(OPEN);
        }
        completed
    }

    fn complete_arguments(
        &self,
        text: &str,
        name: &str,
        head: &str,
        arguments: &[&str],
        closed: bool,
    ) -> String {
        let viable: Vec<_> = self
            .lookup
            .descriptors(name, None)
            .into_iter()
            .filter(|d| d.arity() >= arguments.len())
            .collect();
        let corrections: Vec<String> = viable
            .iter()
            .map(|d| auto_correct_arguments(&self.converter, d, arguments))
            .collect();
        let corrected = match corrections.as_slice() {
            [] => return text.to_string(),
            [only] => only.clone(),
            many if many.iter().all(|c| *c == many[0]) => many[0].clone(),
            many => longest_common_stem(many),
        };

        let mut typed = format!("{head}{OPEN}{}", arguments.join(ARGUMENT_SEPARATOR));
        if closed {
            typed.push(CLOSE);
        }
        let candidate = format!("{head}{corrected}");
        let extends = candidate.chars().count() > typed.chars().count()
            && starts_with_ignore_case(&candidate, &typed);
        if extends && self.partial_matches(&candidate) {
            candidate
        } else {
            text.to_string()
        }
    }
}
