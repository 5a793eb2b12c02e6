//! Descriptor tables: registry contents as data.
//!
//! A table is a JSON document listing types with their constructors and
//! methods. Parameter types are written as `String`, `Number` or the name of a
//! registered type.
//!
//! ```json
//! {
//!   "types": [
//!     {
//!       "name": "Widget",
//!       "constructors": [["String"]],
//!       "methods": [{ "name": "rename", "params": ["String"] }]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::descriptor::{CallableDescriptor, TypeTag};
use super::error::RegistryError;
use super::type_registry::TypeRegistry;

/// Errors that can occur while loading or installing a descriptor table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The table is not valid JSON or does not have the table shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading the table file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An entry was rejected by the registry.
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// A method entry: name and parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodTable {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
}

/// One registered type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeTable {
    pub name: String,
    /// Parameter lists, one per constructor.
    #[serde(default)]
    pub constructors: Vec<Vec<String>>,
    #[serde(default)]
    pub methods: Vec<MethodTable>,
}

/// A full descriptor table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorTable {
    #[serde(default)]
    pub types: Vec<TypeTable>,
}

fn tags(params: &[String]) -> Vec<TypeTag> {
    params
        .iter()
        .map(|p| p.parse::<TypeTag>().unwrap_or_default())
        .collect()
}

impl DescriptorTable {
    /// Parse a table from JSON text.
    pub fn from_json(text: &str) -> Result<Self, TableError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded descriptor table from {}", path.as_ref().display());
        Self::from_json(&text)
    }

    /// Serialize the table as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Register every type of the table.
    ///
    /// Stops at the first entry the registry rejects; earlier entries stay
    /// registered.
    pub fn install(&self, registry: &mut TypeRegistry) -> Result<(), TableError> {
        for ty in &self.types {
            let constructors = ty
                .constructors
                .iter()
                .map(|params| CallableDescriptor::constructor(ty.name.as_str(), tags(params)))
                .collect();
            let methods = ty
                .methods
                .iter()
                .map(|m| {
                    CallableDescriptor::method(ty.name.as_str(), m.name.as_str(), tags(&m.params))
                })
                .collect();
            registry.register(&ty.name, constructors, methods)?;
        }
        Ok(())
    }
}
