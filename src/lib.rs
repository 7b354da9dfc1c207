//! MAL Parser Generator
//!
//! One-shot build tool for the MAL language toolchain: it makes sure the
//! pinned ANTLR tool archive is available (downloading it on first use),
//! runs it against `mal.g4` with the Rust target and visitor support, and
//! renames the generated sources to the module names the downstream
//! compiler imports.
//!
//! The system is organized into functional modules:
//! - **error**: per-step error types and the pipeline error
//! - **workspace**: fixed tool/grammar/output identities and path resolution
//! - **fetch**: tool archive acquisition (fetch iff absent)
//! - **generate**: generator invocation against the grammar
//! - **outputs**: renames to the canonical downstream names
//! - **orchestrator**: sequential pipeline and phase tracking

// Core foundational modules
pub mod error;
pub mod workspace;

// Pipeline steps, in execution order
pub mod fetch;
pub mod generate;
pub mod outputs;

// Sequential pipeline and phase state management
pub mod orchestrator;

// Re-export the log crate for macro usage
pub use log;

// Re-export error types for easy access
pub use error::{FetchError, GenerateError, PipelineError, RenameError, Result};

// Re-export the pipeline surface
pub use fetch::FetchOutcome;
pub use orchestrator::{Orchestrator, Phase, PipelineState};
pub use workspace::Workspace;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
