//! Type Registry: registered types and their callable descriptors.
//!
//! Types are registered explicitly, once, through
//! [`TypeRegistry::register`] or from a descriptor table. Evaluation only
//! ever reads the registry.
//!
//! ## Key Types
//!
//! - [`TypeTag`] - Declared type of a parameter
//! - [`CallableDescriptor`] - A constructor or method and its parameter types
//! - [`TypeRegistry`] - Type name -> constructors and methods
//! - [`SharedRegistry`] - Registry behind a read-write lock

mod descriptor;
mod error;
mod shared;
#[cfg(feature = "interchange")]
mod tables;
mod type_registry;

pub use descriptor::{CallableDescriptor, TypeTag};
pub use error::RegistryError;
pub use shared::SharedRegistry;
#[cfg(feature = "interchange")]
pub use tables::{DescriptorTable, MethodTable, TableError, TypeTable};
pub use type_registry::TypeRegistry;
