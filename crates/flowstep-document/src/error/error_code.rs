//! Error codes for flow document diagnostics.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Reading the JSON document
//! - `E1xx` - Source range checks
//! - `E2xx` - Flow tree structure

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Malformed document.
    ///
    /// The document is not valid JSON.
    E001,

    /// Document shape mismatch.
    ///
    /// The document is valid JSON but a field is missing or has the wrong
    /// type, or the artifact `kind` is not one of `api`, `proxy`, `sequence`
    /// or `template`.
    E002,

    // =========================================================================
    // Range Errors (E1xx)
    // =========================================================================
    /// Inverted range.
    ///
    /// A tag range ends before it starts.
    E100,

    /// Misordered tags.
    ///
    /// An element's end tag starts before its start tag ends.
    E101,

    // =========================================================================
    // Structure Warnings (E2xx)
    // =========================================================================
    /// Empty branch.
    ///
    /// A nested flow was declared without mediators. It is treated as absent.
    E200,

    /// Unknown mediator.
    ///
    /// The tag is not a known mediator. It is treated as a mediator without
    /// nested flows.
    E201,

    /// Unsupported branch.
    ///
    /// A nested flow was declared on a mediator that does not have that
    /// branch. It is ignored.
    E202,

    /// Child outside parent.
    ///
    /// A node's range is not enclosed by the range of the node containing it.
    E203,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed document",
            ErrorCode::E002 => "document shape mismatch",
            ErrorCode::E100 => "inverted range",
            ErrorCode::E101 => "misordered tags",
            ErrorCode::E200 => "empty branch",
            ErrorCode::E201 => "unknown mediator",
            ErrorCode::E202 => "unsupported branch",
            ErrorCode::E203 => "child outside parent",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
