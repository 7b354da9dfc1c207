//! Error type hierarchy for the MAL parser generator
//!
//! Provides structured error handling with FetchError, GenerateError,
//! RenameError (one per pipeline step), and the PipelineError umbrella
//! returned by the orchestrator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Tool archive acquisition errors.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Download of {url} failed: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Download of {url} returned HTTP status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to write tool archive {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Generator invocation errors.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Grammar file not found: {}", .path.display())]
    GrammarMissing { path: PathBuf },

    #[error("Failed to launch '{java}': {source}")]
    Spawn {
        java: String,
        #[source]
        source: io::Error,
    },

    #[error("Generator failed: {exit}")]
    ToolFailed { exit: String },
}

/// Generated output installation errors.
#[derive(Error, Debug)]
pub enum RenameError {
    #[error(
        "Expected generated file not found: {} (the generator's output naming may have changed)",
        .expected.display()
    )]
    MissingSource { expected: PathBuf },

    #[error("Failed to rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Pipeline-level error covering every phase of a run.
///
/// Step errors convert via `From`, so the orchestrator propagates each
/// step with `?` and callers match on the failing phase when they care.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Tool archive acquisition failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Parser generation failed: {0}")]
    Generate(#[from] GenerateError),

    #[error("Output installation failed: {0}")]
    Rename(#[from] RenameError),

    #[error("Invalid phase transition: {from} -> {to}")]
    PhaseTransition {
        from: &'static str,
        to: &'static str,
    },
}

/// Result type returned by the orchestrator and the pipeline steps.
pub type Result<T> = std::result::Result<T, PipelineError>;
