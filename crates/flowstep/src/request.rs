//! JSON request and response types for single-call step-over resolution.
//!
//! A request carries the flow document inline alongside the breakpoint:
//!
//! ```json
//! {"document": {"kind": "sequence", ...}, "breakpoint": {"line": 4, "column": 8}}
//! ```
//!
//! and the response lists the positions to arm:
//!
//! ```json
//! {"breakpoints": [{"line": 5, "column": 8}]}
//! ```

use serde::{Deserialize, Serialize};

use flowstep_core::breakpoint::Breakpoint;

/// A step-over request.
#[derive(Debug, Clone, Deserialize)]
pub struct StepOverRequest {
    document: serde_json::Value,
    breakpoint: Breakpoint,
}

impl StepOverRequest {
    pub fn new(document: serde_json::Value, breakpoint: Breakpoint) -> Self {
        Self {
            document,
            breakpoint,
        }
    }

    /// The flow document, as an untyped JSON value.
    pub fn document(&self) -> &serde_json::Value {
        &self.document
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }
}

/// The positions the debugger must arm, in resolution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOverResponse {
    breakpoints: Vec<Breakpoint>,
}

impl StepOverResponse {
    pub fn new(breakpoints: Vec<Breakpoint>) -> Self {
        Self { breakpoints }
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn into_breakpoints(self) -> Vec<Breakpoint> {
        self.breakpoints
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_deserialize() {
        let request: StepOverRequest = serde_json::from_value(json!({
            "document": {"kind": "sequence"},
            "breakpoint": {"line": 4, "column": 8}
        }))
        .expect("valid request");

        assert_eq!(request.breakpoint(), Breakpoint::new(4, 8));
        assert_eq!(request.document()["kind"], "sequence");
    }

    #[test]
    fn test_request_missing_breakpoint() {
        let result = serde_json::from_value::<StepOverRequest>(json!({"document": {}}));

        assert!(result.is_err());
    }

    #[test]
    fn test_response_serialize() {
        let response = StepOverResponse::new(vec![Breakpoint::new(5, 8), Breakpoint::new(9, 12)]);

        assert_eq!(
            serde_json::to_value(&response).expect("serializable"),
            json!({"breakpoints": [{"line": 5, "column": 8}, {"line": 9, "column": 12}]})
        );
    }
}
