//! AnalysisHost and Analysis: registry ownership and expression queries.
//!
//! The `AnalysisHost` owns the type registry and hands out `Analysis`
//! snapshots that evaluate expressions against it and an object directory.
//!
//! ## Usage
//!
//! ```ignore
//! let mut host = AnalysisHost::new();
//! host.register("Widget", constructors, methods)?;
//!
//! let analysis = host.analysis(&directory);
//! if analysis.complete_matches("w1.rename(\"x\")") {
//!     let call = analysis.resolve("w1.rename(\"x\")");
//! }
//! ```

use indexmap::IndexSet;

use crate::chain::StatementChain;
use crate::config::EngineConfig;
use crate::directory::ObjectDirectory;
use crate::registry::{CallableDescriptor, RegistryError, TypeRegistry};
use crate::slot::{ConstructorSlot, ResolvedInvocation, Slot, SlotContext};

use super::completion::complete_to_fixed_point;

/// How far an expression is from an executable statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Valid and executable as typed.
    Complete,
    /// Could become valid with more input.
    Partial,
    /// Cannot become valid by typing more.
    None,
}

/// Owns the type registry.
///
/// Register types with `register()`, then query through `analysis()`.
#[derive(Debug, Default)]
pub struct AnalysisHost {
    registry: TypeRegistry,
}

impl AnalysisHost {
    /// Create a host with an empty registry and the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            registry: TypeRegistry::with_config(config),
        }
    }

    /// Wrap an already populated registry.
    pub fn from_registry(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    /// Register a type. See [`TypeRegistry::register`].
    pub fn register(
        &mut self,
        type_name: &str,
        constructors: Vec<CallableDescriptor>,
        methods: Vec<CallableDescriptor>,
    ) -> Result<(), RegistryError> {
        self.registry.register(type_name, constructors, methods)
    }

    /// Register every type of a descriptor table.
    #[cfg(feature = "interchange")]
    pub fn install(
        &mut self,
        table: &crate::registry::DescriptorTable,
    ) -> Result<(), crate::registry::TableError> {
        table.install(&mut self.registry)
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        self.registry.config()
    }

    /// Get a snapshot that evaluates expressions against `directory`.
    pub fn analysis<'a>(&'a self, directory: &'a dyn ObjectDirectory) -> Analysis<'a> {
        Analysis::new(&self.registry, directory)
    }
}

/// A read-only view of a registry and a directory.
///
/// An expression is one of two statements: a constructor call, or a statement
/// starting from a live object. Every query considers both.
pub struct Analysis<'a> {
    registry: &'a TypeRegistry,
    constructor: ConstructorSlot<'a>,
    chain: StatementChain<'a>,
}

impl<'a> Analysis<'a> {
    pub fn new(registry: &'a TypeRegistry, directory: &'a dyn ObjectDirectory) -> Self {
        let ctx = SlotContext::new(registry, directory);
        Self {
            registry,
            constructor: ConstructorSlot::new(ctx),
            chain: StatementChain::new(ctx),
        }
    }

    fn alternatives(&self) -> [&dyn Slot; 2] {
        [&self.constructor, &self.chain]
    }

    /// Whether `expression` could become a valid statement with more input.
    pub fn partial_matches(&self, expression: &str) -> bool {
        self.alternatives()
            .iter()
            .any(|slot| slot.partial_matches(expression))
    }

    /// Whether `expression` is a valid, unambiguous statement.
    pub fn complete_matches(&self, expression: &str) -> bool {
        self.alternatives()
            .iter()
            .any(|slot| slot.complete_matches(expression))
    }

    pub fn match_outcome(&self, expression: &str) -> MatchOutcome {
        if self.complete_matches(expression) {
            MatchOutcome::Complete
        } else if self.partial_matches(expression) {
            MatchOutcome::Partial
        } else {
            MatchOutcome::None
        }
    }

    /// What a complete statement invokes, with its arguments converted.
    ///
    /// `None` for incomplete statements and for arguments that do not convert
    /// to their parameter types.
    pub fn resolve(&self, expression: &str) -> Option<ResolvedInvocation> {
        self.alternatives()
            .iter()
            .find_map(|slot| slot.resolve(expression))
    }

    /// Extend `expression` with everything that can be inserted without
    /// guessing.
    ///
    /// Returns the whole completed expression, which is `expression` itself
    /// when nothing is certain. `None` if `expression` is not a partial match.
    /// Completing the result again returns it unchanged.
    pub fn auto_complete(&self, expression: &str) -> Option<String> {
        complete_to_fixed_point(
            &self.alternatives(),
            expression,
            self.registry.config().max_autocomplete_steps,
        )
    }

    /// Candidate insertions at the end of `expression`, in lookup order.
    pub fn suggestions(&self, expression: &str) -> Vec<String> {
        let suggestions: IndexSet<String> = self
            .alternatives()
            .iter()
            .filter(|slot| slot.partial_matches(expression))
            .flat_map(|slot| slot.suggestions(expression))
            .collect();
        suggestions.into_iter().collect()
    }
}
