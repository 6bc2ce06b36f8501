//! Flowstep - Static step-over resolution for integration flow debuggers.
//!
//! Given a loaded flow document and a breakpoint, computes every position the
//! debugger must arm so that execution halts at the next statement whichever
//! path the runtime takes: into each branch of a conditional or fan-out
//! mediator, to the next sibling, or out past the enclosing mediator when a
//! branch ends.

pub mod config;
pub mod discriminate;
pub mod locate;
pub mod request;
pub mod resolve;

mod error;
#[cfg(test)]
mod test_utils;

pub use flowstep_core::{artifact, breakpoint, flow, identifier, node, position};

pub use error::FlowstepError;

use log::{debug, info, trace, warn};

use artifact::Artifact;
use breakpoint::Breakpoint;
use config::AppConfig;
use request::{StepOverRequest, StepOverResponse};
use resolve::Resolver;

/// Engine for loading flow documents and resolving step-over breakpoints.
///
/// # Examples
///
/// ```rust,no_run
/// use flowstep::{StepOverEngine, breakpoint::Breakpoint, config::AppConfig};
///
/// let source = std::fs::read_to_string("demos/switch.json").expect("readable");
///
/// let engine = StepOverEngine::new(AppConfig::default());
/// let artifact = engine.load(&source).expect("Failed to load");
///
/// for target in engine.step_over(&artifact, Breakpoint::new(4, 8)) {
///     println!("{target}");
/// }
/// ```
#[derive(Debug, Default)]
pub struct StepOverEngine {
    config: AppConfig,
}

impl StepOverEngine {
    /// Create a new engine with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including resolver settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load a flow document into an artifact.
    ///
    /// Warnings found while loading are logged and otherwise dropped.
    ///
    /// # Errors
    ///
    /// Returns `FlowstepError::Document` with every error diagnostic if the
    /// document is malformed or carries invalid ranges.
    pub fn load(&self, source: &str) -> Result<Artifact, FlowstepError> {
        info!("Loading flow document");

        let loaded = flowstep_document::parse(source)
            .map_err(|err| FlowstepError::new_document_error(err, source))?;
        let (artifact, warnings) = loaded.into_parts();

        for warning in &warnings {
            warn!(code:? = warning.code(); "{}", warning.message());
        }

        debug!(
            kind = artifact.kind_name(),
            name = artifact.name(),
            warnings = warnings.len();
            "Flow document loaded"
        );
        Ok(artifact)
    }

    /// Compute the breakpoints that step over the statement at `breakpoint`.
    ///
    /// Returns an empty list if the breakpoint is in no flow of the artifact,
    /// or if nothing executes after the statement.
    pub fn step_over(&self, artifact: &Artifact, breakpoint: Breakpoint) -> Vec<Breakpoint> {
        info!(breakpoint:%; "Stepping over");

        let flows = locate::locate_flows(artifact, breakpoint.position());
        if flows.is_empty() {
            debug!(breakpoint:%; "Breakpoint is in no flow");
            return Vec::new();
        }

        let resolver = Resolver::new(*self.config.resolver(), breakpoint.position());
        let breakpoints = resolver.resolve(flows);

        trace!(breakpoints:?; "Step over targets");
        breakpoints
    }

    /// Answer a JSON step-over request with a JSON response.
    ///
    /// # Errors
    ///
    /// Returns `FlowstepError::Request` if the request is not valid JSON or
    /// lacks a field, and `FlowstepError::Document` if its document does not
    /// load.
    pub fn handle_request(&self, request: &str) -> Result<String, FlowstepError> {
        let request: StepOverRequest = serde_json::from_str(request)?;

        // Diagnostics carry spans into this text, not the request's.
        let source = serde_json::to_string_pretty(request.document())?;
        let artifact = self.load(&source)?;

        let response = StepOverResponse::new(self.step_over(&artifact, request.breakpoint()));
        Ok(serde_json::to_string(&response)?)
    }
}
