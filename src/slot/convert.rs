//! Conversion of raw argument text to declared parameter types.
//!
//! Matching only counts arguments; whether `abc` can be a `Number` is decided
//! here, at resolve time. The same rules tell auto-correction which values an
//! argument could still denote.

use std::fmt;

use smol_str::SmolStr;
use thiserror::Error;
use tracing::trace;

use crate::base::{OPEN, leading_identifier, starts_with_ignore_case};
use crate::directory::Identifier;
use crate::registry::TypeTag;
use crate::suggest::longest_common_stem;

use super::{ConstructorCall, ConstructorSlot, ResolvedInvocation, Slot, SlotContext};

/// A converted argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Number(f64),
    /// A live object.
    Object(Identifier),
    /// An object constructed from a nested constructor call.
    New(Box<ConstructorCall>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{text:?}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Object(id) => write!(f, "{id}"),
            Value::New(call) => write!(f, "new {}", call.descriptor),
        }
    }
}

/// Why an argument did not convert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Text given for a numeric parameter.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// No single live object has this name.
    #[error("No object named '{0}'")]
    UnknownReference(String),

    /// The object or nested constructor produces the wrong type.
    #[error("Expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A nested constructor call that does not resolve.
    #[error("Unresolved constructor call '{0}'")]
    UnresolvedConstructor(String),
}

/// Auto-correction of one raw argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// The text to put in the argument's place.
    pub text: String,
    /// Whether the argument denotes exactly one value.
    pub unique: bool,
}

/// A string literal whose closing quote has not been typed yet.
fn open_quote(raw: &str) -> bool {
    raw.starts_with('"') && (raw.len() == 1 || !raw.ends_with('"'))
}

/// A finite decimal number. `NaN` and infinities are not numbers here.
fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn same_type(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Converts raw arguments against a registry and directory.
#[derive(Clone, Copy)]
pub struct ArgumentConverter<'a> {
    ctx: SlotContext<'a>,
}

impl<'a> ArgumentConverter<'a> {
    pub fn new(ctx: SlotContext<'a>) -> Self {
        Self { ctx }
    }

    /// Convert `raw` to a value of type `tag`.
    pub fn convert(&self, raw: &str, tag: &TypeTag) -> Result<Value, ConversionError> {
        let raw = raw.trim();
        match tag {
            TypeTag::String => Ok(Value::Text(self.unquote(raw).to_string())),
            TypeTag::Number => parse_number(raw)
                .map(Value::Number)
                .ok_or_else(|| ConversionError::NotANumber(raw.to_string())),
            TypeTag::Reference(type_name) if raw.contains(OPEN) => {
                self.convert_nested(raw, type_name)
            }
            TypeTag::Reference(type_name) => {
                let id = self
                    .ctx
                    .directory
                    .lookup_exact(raw)
                    .ok_or_else(|| ConversionError::UnknownReference(raw.to_string()))?;
                let found = self.ctx.directory.type_of(&id).unwrap_or_default();
                if same_type(&found, type_name) {
                    Ok(Value::Object(id))
                } else {
                    Err(ConversionError::TypeMismatch {
                        expected: type_name.to_string(),
                        found: found.to_string(),
                    })
                }
            }
        }
    }

    /// Convert every argument against the descriptor's parameter types.
    pub fn convert_all(
        &self,
        raw_arguments: &[&str],
        parameters: &[TypeTag],
    ) -> Result<Vec<Value>, ConversionError> {
        raw_arguments
            .iter()
            .zip(parameters)
            .map(|(raw, tag)| self.convert(raw, tag))
            .collect()
    }

    fn unquote<'r>(&self, raw: &'r str) -> &'r str {
        if !self.ctx.registry.config().strip_string_quotes {
            return raw;
        }
        raw.strip_prefix('"')
            .and_then(|r| r.strip_suffix('"'))
            .unwrap_or(raw)
    }

    fn convert_nested(&self, raw: &str, type_name: &SmolStr) -> Result<Value, ConversionError> {
        match ConstructorSlot::new(self.ctx).resolve(raw) {
            Some(ResolvedInvocation::Constructor(call)) if same_type(&call.type_name, type_name) => {
                Ok(Value::New(Box::new(call)))
            }
            Some(ResolvedInvocation::Constructor(call)) => Err(ConversionError::TypeMismatch {
                expected: type_name.to_string(),
                found: call.type_name.to_string(),
            }),
            _ => Err(ConversionError::UnresolvedConstructor(raw.to_string())),
        }
    }

    /// The values `raw` could plausibly denote for a parameter of type `tag`,
    /// written the way they would be typed.
    ///
    /// A number denotes itself, text denotes itself, and a name prefix denotes
    /// every object of the parameter's type it starts. Empty text denotes
    /// nothing, except for references, where it denotes every object of the
    /// type.
    pub fn candidates(&self, raw: &str, tag: &TypeTag) -> Vec<String> {
        let raw = raw.trim();
        match tag {
            TypeTag::String if raw.is_empty() || open_quote(raw) => Vec::new(),
            TypeTag::String => vec![raw.to_string()],
            TypeTag::Number if parse_number(raw).is_some() => vec![raw.to_string()],
            TypeTag::Number => Vec::new(),
            TypeTag::Reference(type_name) => self
                .ctx
                .directory
                .lookup_by_prefix(raw)
                .into_iter()
                .filter(|id| {
                    self.ctx
                        .directory
                        .type_of(id)
                        .is_some_and(|t| same_type(&t, type_name))
                })
                .map(|id| id.to_string())
                .collect(),
        }
    }

    /// Auto-correct one argument: replace it with the common stem of its
    /// candidates when that stem extends what was typed.
    pub fn correct(&self, raw: &str, tag: &TypeTag) -> Correction {
        let raw = raw.trim();
        if let TypeTag::Reference(type_name) = tag {
            if raw.contains(OPEN) {
                return self.correct_nested(raw, type_name);
            }
        }

        let candidates = self.candidates(raw, tag);
        let stem = longest_common_stem(candidates.as_slice());
        let text = if stem.chars().count() >= raw.chars().count()
            && starts_with_ignore_case(&stem, raw)
        {
            stem
        } else {
            raw.to_string()
        };
        let unique = matches!(candidates.as_slice(), [only] if *only == text);
        trace!(
            "[CONVERT] correct '{}' as {} -> '{}' (unique: {})",
            raw, tag, text, unique
        );
        Correction { text, unique }
    }

    fn correct_nested(&self, raw: &str, type_name: &SmolStr) -> Correction {
        let slot = ConstructorSlot::new(self.ctx);
        let Some(text) = slot.auto_complete(raw) else {
            return Correction {
                text: raw.to_string(),
                unique: false,
            };
        };
        let (nested_type, _) = leading_identifier(&text);
        let unique = slot.complete_matches(&text)
            && self
                .ctx
                .registry
                .exact_type_name(nested_type)
                .is_some_and(|t| same_type(&t, type_name));
        Correction { text, unique }
    }
}
