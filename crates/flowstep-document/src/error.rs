//! Error and diagnostic system for flow document loading.
//!
//! Loading a document reports problems as [`Diagnostic`]s: a severity, an
//! optional [`ErrorCode`], a message, labeled byte spans into the document
//! text and optional help. Errors fail the load and are returned together in a
//! [`DocumentError`]; warnings are handed back alongside the loaded artifact.
//!
//! # Example
//!
//! ```
//! # use flowstep_document::error::{Diagnostic, ErrorCode};
//! # use flowstep_document::Span;
//!
//! let diag = Diagnostic::error("malformed flow document: expected `,` or `}`")
//!     .with_code(ErrorCode::E001)
//!     .with_label(Span::new(42..43), "here")
//!     .with_help("the document must be a single JSON object");
//! ```

mod collector;
mod diagnostic;
mod document_error;
mod error_code;
mod label;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use document_error::DocumentError;
pub use error_code::ErrorCode;
pub use label::Label;
pub use severity::Severity;
