//! Error types for Flowstep operations.
//!
//! This module provides the main error type [`FlowstepError`]. Resolution
//! itself never fails; errors come from reading documents, requests and
//! configuration.

use std::io;

use thiserror::Error;

use flowstep_document::error::DocumentError;

/// The main error type for Flowstep operations.
///
/// # Diagnostic Variants
///
/// The `Document` variant keeps the document text next to its diagnostics,
/// so their spans can be rendered against the source.
#[derive(Debug, Error)]
pub enum FlowstepError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Document { err: DocumentError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    Request(#[from] serde_json::Error),
}

impl FlowstepError {
    /// Create a new `Document` error with the associated document text.
    pub fn new_document_error(err: DocumentError, src: impl Into<String>) -> Self {
        Self::Document {
            err,
            src: src.into(),
        }
    }
}
