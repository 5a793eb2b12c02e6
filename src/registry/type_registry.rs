//! The registry of callable types.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::debug;

use crate::base::{is_identifier, starts_with_ignore_case};
use crate::config::EngineConfig;

use super::descriptor::CallableDescriptor;
use super::error::RegistryError;

#[derive(Debug, Clone, Default)]
struct TypeEntry {
    /// Sorted by ascending arity; ties keep registration order.
    constructors: Vec<CallableDescriptor>,
    methods: Vec<CallableDescriptor>,
}

/// Maps registered type names to their constructors and methods.
///
/// Type names are stored in their canonical (case-sensitive) form and looked
/// up case-insensitively. Method names are matched case-sensitively by
/// [`find_methods`](Self::find_methods).
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    /// Canonical type name -> entry (IndexMap preserves registration order).
    types: IndexMap<SmolStr, TypeEntry>,
    /// Lowercased type name -> canonical names that fold to it.
    by_folded_name: FxHashMap<String, Vec<SmolStr>>,
    config: EngineConfig,
}

impl TypeRegistry {
    /// Create an empty registry with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with `config`.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Register `type_name` with its constructors and methods.
    ///
    /// Registering a name again replaces the previous entry; nothing is merged.
    /// A type registered without constructors gets a zero-argument one when
    /// [`EngineConfig::implicit_default_constructor`] is set.
    pub fn register(
        &mut self,
        type_name: &str,
        constructors: Vec<CallableDescriptor>,
        methods: Vec<CallableDescriptor>,
    ) -> Result<(), RegistryError> {
        if !is_identifier(type_name) {
            return Err(RegistryError::invalid_type_name(type_name));
        }
        for descriptor in constructors.iter().chain(&methods) {
            if descriptor.owner() != type_name {
                return Err(RegistryError::OwnerMismatch {
                    expected: type_name.to_string(),
                    descriptor: descriptor.to_string(),
                });
            }
        }
        if let Some(named) = constructors.iter().find(|c| !c.is_constructor()) {
            return Err(RegistryError::KindMismatch {
                descriptor: named.to_string(),
            });
        }
        for method in &methods {
            if method.is_constructor() {
                return Err(RegistryError::KindMismatch {
                    descriptor: method.to_string(),
                });
            }
            if !is_identifier(method.name()) {
                return Err(RegistryError::invalid_method_name(type_name, method.name()));
            }
        }

        let name = SmolStr::new(type_name);
        let mut constructors = constructors;
        if constructors.is_empty() && self.config.implicit_default_constructor {
            constructors.push(CallableDescriptor::constructor(name.clone(), Vec::new()));
        }
        constructors.sort_by_key(CallableDescriptor::arity);

        debug!(
            "[REGISTRY] register {} ({} constructors, {} methods)",
            name,
            constructors.len(),
            methods.len()
        );

        let entry = TypeEntry {
            constructors,
            methods,
        };
        if self.types.insert(name.clone(), entry).is_none() {
            self.by_folded_name
                .entry(type_name.to_lowercase())
                .or_default()
                .push(name);
        }
        Ok(())
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no types have been registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Canonical names of all registered types, in registration order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(SmolStr::as_str)
    }

    /// Registered type names starting with `prefix`, ignoring case.
    pub fn partial_match_type_names(&self, prefix: &str) -> Vec<SmolStr> {
        self.types
            .keys()
            .filter(|name| starts_with_ignore_case(name, prefix))
            .cloned()
            .collect()
    }

    /// The canonical type name equal to `name` ignoring case.
    ///
    /// Returns `None` when no name, or more than one name, folds to `name`.
    pub fn exact_type_name(&self, name: &str) -> Option<SmolStr> {
        match self.by_folded_name.get(&name.to_lowercase())?.as_slice() {
            [single] => Some(single.clone()),
            _ => None,
        }
    }

    fn entry(&self, type_name: &str) -> Option<&TypeEntry> {
        self.types.get(type_name).or_else(|| {
            let canonical = self.exact_type_name(type_name)?;
            self.types.get(&canonical)
        })
    }

    /// Constructors of `type_name`, by ascending arity, optionally restricted
    /// to one arity.
    pub fn find_constructors(
        &self,
        type_name: &str,
        arity: Option<usize>,
    ) -> Vec<&CallableDescriptor> {
        self.entry(type_name)
            .map(|entry| {
                entry
                    .constructors
                    .iter()
                    .filter(|c| arity.is_none_or(|n| c.arity() == n))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Methods of `type_name` whose name starts with `name_prefix`
    /// (case-sensitive), optionally restricted to one arity.
    pub fn find_methods(
        &self,
        type_name: &str,
        name_prefix: Option<&str>,
        arity: Option<usize>,
    ) -> Vec<&CallableDescriptor> {
        self.entry(type_name)
            .map(|entry| {
                entry
                    .methods
                    .iter()
                    .filter(|m| name_prefix.is_none_or(|p| m.name().starts_with(p)))
                    .filter(|m| arity.is_none_or(|n| m.arity() == n))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The only constructor of `type_name` taking `arity` arguments.
    pub fn match_constructor_exact(
        &self,
        type_name: &str,
        arity: usize,
    ) -> Option<&CallableDescriptor> {
        match self.find_constructors(type_name, Some(arity)).as_slice() {
            [single] => Some(*single),
            _ => None,
        }
    }

    /// The only method of `type_name` matching `name_prefix` (ignoring case)
    /// with `arity` arguments.
    ///
    /// When several methods share the prefix, a method whose whole name equals
    /// `name_prefix` wins if it is the only such method.
    pub fn match_method_exact(
        &self,
        type_name: &str,
        name_prefix: &str,
        arity: usize,
    ) -> Option<&CallableDescriptor> {
        let entry = self.entry(type_name)?;
        let candidates: Vec<_> = entry
            .methods
            .iter()
            .filter(|m| m.arity() == arity && starts_with_ignore_case(m.name(), name_prefix))
            .collect();
        if let [single] = candidates.as_slice() {
            return Some(*single);
        }
        let folded = name_prefix.to_lowercase();
        let mut exact = candidates
            .into_iter()
            .filter(|m| m.name().to_lowercase() == folded);
        match (exact.next(), exact.next()) {
            (Some(method), None) => Some(method),
            _ => None,
        }
    }
}
