//! CLI logic for the Flowstep step-over tool.
//!
//! Loads a flow document, resolves the step-over targets of one breakpoint
//! and renders them for printing.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::fs;

use log::info;

use flowstep::{
    FlowstepError, StepOverEngine, breakpoint::Breakpoint, request::StepOverResponse,
};

/// Run the Flowstep CLI application
///
/// Processes the input file through the loader and resolver and returns the
/// resolved breakpoints rendered in the requested [`OutputFormat`].
///
/// # Errors
///
/// Returns `FlowstepError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Document errors
pub fn run(args: &Args) -> Result<String, FlowstepError> {
    info!(
        input_path = args.input,
        line = args.line,
        column = args.column;
        "Resolving step over"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let engine = StepOverEngine::new(app_config);
    let artifact = engine.load(&source)?;
    let breakpoints = engine.step_over(&artifact, Breakpoint::new(args.line, args.column));

    info!(count = breakpoints.len(); "Step over resolved");

    render(breakpoints, args.format)
}

fn render(breakpoints: Vec<Breakpoint>, format: OutputFormat) -> Result<String, FlowstepError> {
    match format {
        OutputFormat::Text => Ok(breakpoints
            .iter()
            .map(|breakpoint| format!("{breakpoint}\n"))
            .collect()),
        OutputFormat::Json => {
            let response = StepOverResponse::new(breakpoints);
            Ok(serde_json::to_string_pretty(&response)? + "\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text() {
        let rendered = render(
            vec![Breakpoint::new(11, 12), Breakpoint::new(5, 12)],
            OutputFormat::Text,
        )
        .expect("renders");

        assert_eq!(rendered, "11:12\n5:12\n");
    }

    #[test]
    fn test_render_empty_text() {
        assert_eq!(render(Vec::new(), OutputFormat::Text).expect("renders"), "");
    }

    #[test]
    fn test_render_json() {
        let rendered = render(vec![Breakpoint::new(14, 4)], OutputFormat::Json).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");

        assert_eq!(
            value,
            serde_json::json!({"breakpoints": [{"line": 14, "column": 4}]})
        );
    }
}
