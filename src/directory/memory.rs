//! In-memory Object Directory.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::base::starts_with_ignore_case;

use super::{Identifier, ObjectDirectory};

/// Identifiers and their type names, held in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    objects: IndexMap<Identifier, SmolStr>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or retype) an object.
    pub fn insert(&mut self, name: impl Into<SmolStr>, type_name: impl Into<SmolStr>) {
        self.objects.insert(Identifier::new(name), type_name.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<SmolStr>, type_name: impl Into<SmolStr>) -> Self {
        self.insert(name, type_name);
        self
    }

    /// Remove an object, returning its type name.
    pub fn remove(&mut self, name: &str) -> Option<SmolStr> {
        self.objects.shift_remove(&Identifier::new(name))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectDirectory for InMemoryDirectory {
    fn lookup_by_prefix(&self, prefix: &str) -> Vec<Identifier> {
        self.objects
            .keys()
            .filter(|id| starts_with_ignore_case(id.as_str(), prefix))
            .cloned()
            .collect()
    }

    fn lookup_exact(&self, name: &str) -> Option<Identifier> {
        let folded = name.to_lowercase();
        let mut matches = self
            .objects
            .keys()
            .filter(|id| id.as_str().to_lowercase() == folded);
        match (matches.next(), matches.next()) {
            (Some(id), None) => Some(id.clone()),
            _ => None,
        }
    }

    fn type_of(&self, identifier: &Identifier) -> Option<SmolStr> {
        self.objects.get(identifier).cloned()
    }
}
