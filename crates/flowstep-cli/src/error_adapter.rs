//! Rendering of [`FlowstepError`] through miette.
//!
//! A document that fails to load carries every diagnostic the loader found;
//! each becomes its own report with its labels pointing into the document
//! text. Warnings that rode along (empty branches, unknown mediators, children
//! outside their parent) are reported at warning severity so they do not read
//! as the cause of the failure.
//!
//! Errors with no document behind them (I/O, configuration, requests) become a
//! single report with a `flowstep::*` code and, where there is one, a hint.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, Severity as MietteSeverity, SourceSpan};

use flowstep::FlowstepError;
use flowstep_document::{
    Span,
    error::{Diagnostic, Severity},
};

/// One loader diagnostic, rendered against the document it was found in.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    document: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, document: &'a str) -> Self {
        Self { diag, document }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|code| Box::new(code) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.document as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = to_source_span(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// A [`FlowstepError`] without a document to point into.
pub struct ErrorAdapter<'a>(pub &'a FlowstepError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FlowstepError::Io(_) => "flowstep::io",
            FlowstepError::Document { .. } => return None,
            FlowstepError::Config(_) => "flowstep::config",
            FlowstepError::Request(_) => "flowstep::request",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            FlowstepError::Config(_) => {
                "`[resolver]` accepts absent_branches = \"fall-through\" | \"ignore\" \
                 and entry_region = \"start-tag\" | \"outside-branches\""
            }
            FlowstepError::Request(_) => {
                "a request is {\"document\": {...}, \"breakpoint\": {\"line\": N, \"column\": M}}"
            }
            FlowstepError::Io(_) | FlowstepError::Document { .. } => return None,
        };
        Some(Box::new(help))
    }
}

/// Either a loader diagnostic or a plain error, rendered uniformly.
#[derive(Debug)]
pub enum Reportable<'a> {
    Diagnostic(DiagnosticAdapter<'a>),
    Error(ErrorAdapter<'a>),
}

impl Reportable<'_> {
    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Reportable::Diagnostic(d) => d,
            Reportable::Error(e) => e,
        }
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner().source()
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn severity(&self) -> Option<MietteSeverity> {
        self.inner().severity()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Split a [`FlowstepError`] into the reports to print.
///
/// A [`FlowstepError::Document`] yields one report per diagnostic, errors and
/// warnings alike, in the order the loader found them. Every other variant
/// yields a single report.
pub fn to_reportables(err: &FlowstepError) -> Vec<Reportable<'_>> {
    match err {
        FlowstepError::Document { err: doc_err, src } => doc_err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::Diagnostic(DiagnosticAdapter::new(diag, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use flowstep::StepOverEngine;

    use super::*;

    const SELF_CLOSED: &str =
        r#"{"selfClosed": {"start": {"line": 2, "column": 4}, "end": {"line": 2, "column": 10}}}"#;
    const INVERTED: &str =
        r#"{"selfClosed": {"start": {"line": 3, "column": 20}, "end": {"line": 3, "column": 4}}}"#;
    const BODY: &str = r#"{"container": {
        "startTag": {"start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 22}},
        "endTag": {"start": {"line": 9, "column": 0}, "end": {"line": 9, "column": 11}}}}"#;

    fn load_error(mediators: &str) -> FlowstepError {
        let document = format!(
            r#"{{"kind": "sequence", "name": "main", "range": {BODY}, "mediators": [{mediators}]}}"#
        );
        StepOverEngine::default()
            .load(&document)
            .expect_err("document should not load")
    }

    fn code(reportable: &Reportable<'_>) -> Option<String> {
        reportable.code().map(|code| code.to_string())
    }

    #[test]
    fn test_inverted_range_reports_against_document() {
        let err = load_error(&format!(r#"{{"tag": "send", "range": {INVERTED}}}"#));

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        assert_eq!(code(&reportables[0]), Some("E100".to_string()));
        assert_eq!(reportables[0].severity(), Some(MietteSeverity::Error));
        assert!(reportables[0].source_code().is_some());
    }

    #[test]
    fn test_warnings_alongside_errors_keep_warning_severity() {
        let err = load_error(&format!(
            r#"{{"tag": "customMediator", "range": {SELF_CLOSED}}},
               {{"tag": "send", "range": {INVERTED}}}"#
        ));

        let reportables = to_reportables(&err);
        let found: Vec<_> = reportables
            .iter()
            .map(|reportable| (code(reportable), reportable.severity()))
            .collect();

        assert_eq!(
            found,
            vec![
                (Some("E201".to_string()), Some(MietteSeverity::Warning)),
                (Some("E100".to_string()), Some(MietteSeverity::Error)),
            ]
        );
    }

    #[test]
    fn test_malformed_document_label_points_into_source() {
        let document = "{\n  \"kind\": \"sequence\",\n  \"name\": \"main\"\n  \"mediators\": []\n}\n";
        let err = StepOverEngine::default()
            .load(document)
            .expect_err("document should not load");

        let reportables = to_reportables(&err);
        assert_eq!(code(&reportables[0]), Some("E001".to_string()));

        let labels: Vec<_> = reportables[0].labels().expect("has a label").collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert!(labels[0].offset() <= document.len());
        assert!(labels[0].offset() > document.find("\"main\"").expect("name in document"));
    }

    #[test]
    fn test_config_error_has_code_and_hint() {
        let err = FlowstepError::Config("unknown variant `sometimes`".to_string());

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        assert_eq!(
            reportables[0].to_string(),
            "Configuration error: unknown variant `sometimes`"
        );
        assert_eq!(code(&reportables[0]), Some("flowstep::config".to_string()));

        let help = reportables[0].help().map(|help| help.to_string());
        assert!(help.is_some_and(|help| help.contains("absent_branches")));
        assert!(reportables[0].labels().is_none());
    }

    #[test]
    fn test_request_error_has_code() {
        let err = StepOverEngine::default()
            .handle_request(r#"{"breakpoint": {"line": 1, "column": 0}}"#)
            .expect_err("request lacks a document");

        let reportables = to_reportables(&err);
        assert_eq!(code(&reportables[0]), Some("flowstep::request".to_string()));
        assert!(reportables[0].help().is_some());
    }
}
