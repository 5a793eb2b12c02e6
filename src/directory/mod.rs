//! Object Directory: the external collaborator that knows live objects.
//!
//! The engine only ever asks three questions of it: which identifiers start
//! with a prefix, which single identifier a name denotes, and what type an
//! identifier has. Anything answering them can back the engine;
//! [`InMemoryDirectory`] is the implementation used when no object store is
//! available.

mod memory;

pub use memory::InMemoryDirectory;

use std::fmt;

use smol_str::SmolStr;

/// Name of a live object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(SmolStr);

impl Identifier {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Lookup interface onto live objects.
///
/// Lookups are synchronous. A lookup that fails for any reason must answer as
/// if nothing matched.
pub trait ObjectDirectory {
    /// Identifiers starting with `prefix`, ignoring case.
    fn lookup_by_prefix(&self, prefix: &str) -> Vec<Identifier>;

    /// The single identifier `name` denotes, or `None` if there is none or
    /// more than one.
    fn lookup_exact(&self, name: &str) -> Option<Identifier>;

    /// The registered type name of `identifier`.
    fn type_of(&self, identifier: &Identifier) -> Option<SmolStr>;
}

impl<D: ObjectDirectory + ?Sized> ObjectDirectory for &D {
    fn lookup_by_prefix(&self, prefix: &str) -> Vec<Identifier> {
        (**self).lookup_by_prefix(prefix)
    }

    fn lookup_exact(&self, name: &str) -> Option<Identifier> {
        (**self).lookup_exact(name)
    }

    fn type_of(&self, identifier: &Identifier) -> Option<SmolStr> {
        (**self).type_of(identifier)
    }
}
