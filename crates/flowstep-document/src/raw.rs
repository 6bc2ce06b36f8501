//! Serialized form of a flow tree, as read from a JSON document.
//!
//! These records mirror the document layout one-to-one. Mediators carry every
//! possible branch field; which ones are meaningful depends on the tag and is
//! decided during elaboration.

use serde::Deserialize;

use flowstep_core::position::{Position, SourceRange, TagRange};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// Read a document into its raw records.
///
/// # Errors
///
/// Returns an `E001` diagnostic for malformed JSON and `E002` when the JSON
/// does not have the shape of a flow document.
pub(crate) fn read_document(source: &str) -> Result<RawArtifact, Diagnostic> {
    serde_json::from_str(source).map_err(|err| {
        let span = Span::at_line_column(source, err.line(), err.column());
        let (code, help) = if err.is_data() {
            (
                ErrorCode::E002,
                "check the field names and types against the flow document format",
            )
        } else {
            (
                ErrorCode::E001,
                "the document must be a single JSON object",
            )
        };
        Diagnostic::error(format!("malformed flow document: {err}"))
            .with_code(code)
            .with_label(span, code.description())
            .with_help(help)
    })
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct RawTagRange {
    pub start: Position,
    pub end: Position,
}

impl From<RawTagRange> for TagRange {
    fn from(raw: RawTagRange) -> Self {
        TagRange::new(raw.start, raw.end)
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum RawRange {
    SelfClosed(RawTagRange),
    #[serde(rename_all = "camelCase")]
    Container {
        start_tag: RawTagRange,
        end_tag: RawTagRange,
    },
}

impl From<RawRange> for SourceRange {
    fn from(raw: RawRange) -> Self {
        match raw {
            RawRange::SelfClosed(range) => SourceRange::SelfClosed(range.into()),
            RawRange::Container { start_tag, end_tag } => {
                SourceRange::container(start_tag.into(), end_tag.into())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFlow {
    pub tag: String,
    pub range: RawRange,
    #[serde(default)]
    pub mediators: Vec<RawMediator>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCase {
    #[serde(default = "case_tag")]
    pub tag: String,
    pub range: RawRange,
    pub regex: Option<String>,
    #[serde(default)]
    pub mediators: Vec<RawMediator>,
}

fn case_tag() -> String {
    "case".to_string()
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTarget {
    #[serde(default = "target_tag")]
    pub tag: String,
    pub range: RawRange,
    pub sequence: Option<RawFlow>,
}

fn target_tag() -> String {
    "target".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawMediator {
    pub tag: String,
    pub range: RawRange,
    pub then: Option<RawFlow>,
    #[serde(rename = "else")]
    pub otherwise: Option<RawFlow>,
    pub on_accept: Option<RawFlow>,
    pub on_reject: Option<RawFlow>,
    pub cases: Option<Vec<RawCase>>,
    pub default: Option<RawFlow>,
    pub advice: Option<RawFlow>,
    pub obligations: Option<RawFlow>,
    pub on_cache_hit: Option<RawFlow>,
    pub on_fail: Option<RawFlow>,
    pub targets: Option<Vec<RawTarget>>,
    pub target: Option<RawTarget>,
    pub sequence: Option<RawFlow>,
    pub on_complete: Option<RawFlow>,
}

impl RawMediator {
    /// Names of the branch fields declared on this mediator, in document
    /// format spelling.
    pub fn declared_branches(&self) -> Vec<&'static str> {
        let fields = [
            ("then", self.then.is_some()),
            ("else", self.otherwise.is_some()),
            ("onAccept", self.on_accept.is_some()),
            ("onReject", self.on_reject.is_some()),
            ("cases", self.cases.is_some()),
            ("default", self.default.is_some()),
            ("advice", self.advice.is_some()),
            ("obligations", self.obligations.is_some()),
            ("onCacheHit", self.on_cache_hit.is_some()),
            ("onFail", self.on_fail.is_some()),
            ("targets", self.targets.is_some()),
            ("target", self.target.is_some()),
            ("sequence", self.sequence.is_some()),
            ("onComplete", self.on_complete.is_some()),
        ];
        fields
            .into_iter()
            .filter_map(|(name, present)| present.then_some(name))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSequences {
    pub in_sequence: Option<RawFlow>,
    pub out_sequence: Option<RawFlow>,
    pub fault_sequence: Option<RawFlow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawResource {
    pub range: RawRange,
    pub uri_template: Option<String>,
    #[serde(flatten)]
    pub sequences: RawSequences,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawApi {
    pub name: String,
    pub range: RawRange,
    #[serde(default)]
    pub resources: Vec<RawResource>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawProxyTarget {
    pub range: RawRange,
    #[serde(flatten)]
    pub sequences: RawSequences,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawProxy {
    pub name: String,
    pub range: RawRange,
    pub target: Option<RawProxyTarget>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawNamedSequence {
    pub name: String,
    pub range: RawRange,
    #[serde(default)]
    pub mediators: Vec<RawMediator>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTemplate {
    pub name: String,
    pub range: RawRange,
    pub sequence: Option<RawFlow>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub(crate) enum RawArtifact {
    Api(RawApi),
    Proxy(RawProxy),
    Sequence(RawNamedSequence),
    Template(RawTemplate),
}
