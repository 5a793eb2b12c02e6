//! # cali-base
//!
//! Expression resolution and incremental auto-completion for interactively
//! invoking constructors and methods of registered types.
//!
//! Given a registry of callable types and a partially typed expression such as
//! `w1.rename("x"`, the engine decides whether the text is a prefix of a valid
//! statement, whether it is complete, what it invokes, and what can be
//! inserted next.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide        → AnalysisHost/Analysis: whole-expression queries
//!   ↓
//! chain      → Statement chain: object reference [. method call]
//!   ↓
//! slot       → Constructor, object-reference and method-call slots
//!   ↓
//! suggest    → Common stems, parameter hints, argument auto-correction
//!   ↓
//! parser     → Argument list parser (five parse states)
//!   ↓
//! directory  → ObjectDirectory collaborator, in-memory directory
//! registry   → TypeTag, CallableDescriptor, TypeRegistry
//!   ↓
//! config     → EngineConfig
//! base       → Lexical tokens, identifier utilities, delimiter scanner
//! ```

// ============================================================================
// MODULES (dependency order: base → registry → parser → slot → chain → ide)
// ============================================================================

/// Foundation: lexical tokens, identifiers, nesting-aware scanning
pub mod base;

/// Engine configuration
pub mod config;

/// Type registry and callable descriptors
pub mod registry;

/// Object directory collaborator
pub mod directory;

/// Argument list parser
pub mod parser;

/// Suggestion building: stems, parameter hints, auto-correction
pub mod suggest;

/// Parameter slots
pub mod slot;

/// Statement chain
pub mod chain;

/// Whole-expression queries: partial/complete match, resolve, auto-complete
pub mod ide;

pub use config::EngineConfig;

// Re-export the types every caller touches
pub use chain::StatementChain;
pub use directory::{Identifier, InMemoryDirectory, ObjectDirectory};
pub use ide::{Analysis, AnalysisHost, MatchOutcome};
pub use registry::{CallableDescriptor, RegistryError, SharedRegistry, TypeRegistry, TypeTag};
pub use slot::{ResolvedInvocation, Slot, SlotContext, Value};
