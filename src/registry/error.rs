//! Error types for registration.

use thiserror::Error;

/// Errors that can occur while registering a type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The type name is not a valid identifier.
    #[error("Invalid type name: '{0}'")]
    InvalidTypeName(String),

    /// A method name is not a valid identifier.
    #[error("Invalid method name '{name}' on type {owner}")]
    InvalidMethodName { owner: String, name: String },

    /// A descriptor was registered under a type that does not own it.
    #[error("Descriptor {descriptor} does not belong to type {expected}")]
    OwnerMismatch { expected: String, descriptor: String },

    /// A named descriptor was passed as a constructor, or vice versa.
    #[error("Descriptor {descriptor} registered as the wrong kind of callable")]
    KindMismatch { descriptor: String },
}

impl RegistryError {
    /// Create an invalid type name error.
    pub fn invalid_type_name(name: impl Into<String>) -> Self {
        Self::InvalidTypeName(name.into())
    }

    /// Create an invalid method name error.
    pub fn invalid_method_name(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidMethodName {
            owner: owner.into(),
            name: name.into(),
        }
    }
}
