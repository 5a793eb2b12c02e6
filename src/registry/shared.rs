//! A registry that can be registered into while other threads read it.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::descriptor::CallableDescriptor;
use super::error::RegistryError;
use super::type_registry::TypeRegistry;

/// [`TypeRegistry`] behind a read-write lock.
///
/// Lookups take the read lock for the duration of one evaluation; registration
/// takes the write lock. Cloning shares the same registry.
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<RwLock<TypeRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: TypeRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Register a type under the write lock.
    pub fn register(
        &self,
        type_name: &str,
        constructors: Vec<CallableDescriptor>,
        methods: Vec<CallableDescriptor>,
    ) -> Result<(), RegistryError> {
        self.inner.write().register(type_name, constructors, methods)
    }

    /// Swap in a freshly built registry.
    pub fn replace(&self, registry: TypeRegistry) {
        *self.inner.write() = registry;
    }

    /// Read access for one or more evaluations.
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.inner.read()
    }

    /// An owned copy of the current registry.
    pub fn snapshot(&self) -> TypeRegistry {
        self.inner.read().clone()
    }
}
