//! Query facade: evaluating whole expressions.
//!
//! This module ties the constructor slot and the statement chain together and
//! answers the caller-facing questions for an expression as the user types
//! it.
//!
//! ## Usage
//!
//! ```ignore
//! use cali::ide::AnalysisHost;
//!
//! let mut host = AnalysisHost::new();
//! host.register("Widget", constructors, methods)?;
//!
//! let analysis = host.analysis(&directory);
//! let completed = analysis.auto_complete("Wid");
//! ```

mod analysis;
mod completion;

pub use analysis::{Analysis, AnalysisHost, MatchOutcome};
