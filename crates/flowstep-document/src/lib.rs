//! # Flowstep Document
//!
//! Loader for flow tree documents: the JSON form of the typed tree an
//! integration-flow editor's markup parser produces. Loading turns the
//! document into a [`flowstep_core::artifact::Artifact`] ready for step-over
//! resolution.
//!
//! ## Usage
//!
//! ```
//! # use flowstep_document::{parse, error::DocumentError};
//!
//! fn main() -> Result<(), DocumentError> {
//!     let source = r#"{
//!         "kind": "sequence",
//!         "name": "main",
//!         "range": {"container": {
//!             "startTag": {"start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 24}},
//!             "endTag": {"start": {"line": 3, "column": 0}, "end": {"line": 3, "column": 11}}
//!         }},
//!         "mediators": [
//!             {"tag": "log", "range": {"selfClosed": {
//!                 "start": {"line": 2, "column": 4}, "end": {"line": 2, "column": 10}
//!             }}}
//!         ]
//!     }"#;
//!
//!     let loaded = parse(source)?;
//!     assert_eq!(loaded.artifact().name(), "main");
//!     Ok(())
//! }
//! ```

pub mod error;

mod elaborate;
mod raw;
mod span;
mod validate;

pub use span::Span;

use log::{debug, info, trace};

use flowstep_core::artifact::Artifact;

use elaborate::Builder;
use error::{Diagnostic, DiagnosticCollector, DocumentError};

/// A successfully loaded document and the warnings found while loading it.
#[derive(Debug)]
pub struct Loaded {
    artifact: Artifact,
    warnings: Vec<Diagnostic>,
}

impl Loaded {
    pub fn artifact(&self) -> &Artifact {
        &self.artifact
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Split into the artifact and the warnings.
    pub fn into_parts(self) -> (Artifact, Vec<Diagnostic>) {
        (self.artifact, self.warnings)
    }
}

/// Load a flow document.
///
/// 1. **Read** - Deserialize the JSON into raw records
/// 2. **Elaborate** - Resolve mediator tags into typed mediator kinds
/// 3. **Validate** - Check source ranges
///
/// # Errors
///
/// Returns a [`DocumentError`] with every error diagnostic (and any warnings
/// found along the way) if the document is malformed or has unusable ranges.
pub fn parse(source: &str) -> Result<Loaded, DocumentError> {
    info!(len = source.len(); "Loading flow document");

    let raw = raw::read_document(source)?;

    let mut collector = DiagnosticCollector::new();
    let artifact = Builder::new(&mut collector).build(raw);
    debug!(kind = artifact.kind_name(), name = artifact.name(); "Document elaborated");

    validate::validate_artifact(&artifact, &mut collector);
    let warnings = collector.finish()?;

    debug!(warnings = warnings.len(); "Document loaded");
    trace!(artifact:?; "Loaded artifact");

    Ok(Loaded { artifact, warnings })
}
