//! Source range checks over an elaborated flow tree.
//!
//! Ranges come from the upstream markup parser and are trusted by the step-over
//! engine, so ranges that cannot describe an element are rejected here:
//! inverted tag ranges (`E100`) and end tags that begin before the start tag
//! ends (`E101`). Children whose ranges stick out of their parent (`E203`) are
//! only reported, since containment of the child still works on its own range.

use flowstep_core::{
    artifact::{Artifact, Sequences},
    flow::{Flow, Mediator, MediatorKind, Target},
    node::FlowNode,
    position::SourceRange,
};

use crate::error::{Diagnostic, DiagnosticCollector, ErrorCode};

/// Check every node of `artifact`.
pub(crate) fn validate_artifact(artifact: &Artifact, collector: &mut DiagnosticCollector) {
    let mut validator = Validator { collector };

    match artifact {
        Artifact::Api(api) => {
            validator.check_node(api.node());
            for resource in api.resources() {
                validator.check_child(api.node(), resource.node());
                validator.check_sequences(resource.node(), resource.sequences());
            }
        }
        Artifact::Proxy(proxy) => {
            validator.check_node(proxy.node());
            if let Some(target) = proxy.target() {
                validator.check_child(proxy.node(), target.node());
                validator.check_sequences(target.node(), target.sequences());
            }
        }
        Artifact::Sequence(sequence) => {
            validator.check_node(sequence.body().node());
            validator.check_flow_contents(sequence.body());
        }
        Artifact::Template(template) => {
            validator.check_node(template.node());
            if let Some(body) = template.body() {
                validator.check_flow(template.node(), body);
            }
        }
    }
}

struct Validator<'c> {
    collector: &'c mut DiagnosticCollector,
}

impl Validator<'_> {
    fn check_sequences(&mut self, parent: &FlowNode, sequences: &Sequences) {
        let flows = [
            &sequences.in_sequence,
            &sequences.out_sequence,
            &sequences.fault_sequence,
        ];
        for flow in flows.into_iter().flatten() {
            self.check_flow(parent, flow);
        }
    }

    fn check_flow(&mut self, parent: &FlowNode, flow: &Flow) {
        self.check_child(parent, flow.node());
        self.check_flow_contents(flow);
    }

    fn check_flow_contents(&mut self, flow: &Flow) {
        for mediator in flow.mediators() {
            self.check_child(flow.node(), mediator.node());
            self.check_mediator(mediator);
        }
    }

    fn check_mediator(&mut self, mediator: &Mediator) {
        let node = mediator.node();
        match mediator.kind() {
            MediatorKind::Iterate { target } => {
                if let Some(target) = target {
                    self.check_target(node, target);
                }
            }
            MediatorKind::Clone { targets } | MediatorKind::ScatterGather { targets } => {
                for target in targets {
                    self.check_target(node, target);
                }
            }
            kind => {
                for flow in kind.child_flows() {
                    self.check_flow(node, flow);
                }
            }
        }
    }

    fn check_target(&mut self, parent: &FlowNode, target: &Target) {
        self.check_child(parent, target.node());
        if let Some(sequence) = target.sequence() {
            self.check_flow(target.node(), sequence);
        }
    }

    /// Check `child` on its own and against the `parent` that contains it.
    fn check_child(&mut self, parent: &FlowNode, child: &FlowNode) {
        self.check_node(child);
        let parent_extent = parent.range().extent();
        let child_extent = child.range().extent();
        if !child_extent.is_inverted() && !parent_extent.encloses(child_extent) {
            self.collector.emit(
                Diagnostic::warning(format!(
                    "`{}` at {child_extent} is outside its parent `{}` at {parent_extent}",
                    child.tag(),
                    parent.tag()
                ))
                .with_code(ErrorCode::E203)
                .with_help("breakpoints inside it may not be found"),
            );
        }
    }

    fn check_node(&mut self, node: &FlowNode) {
        let tags = match node.range() {
            SourceRange::SelfClosed(range) => vec![*range],
            SourceRange::Container { start_tag, end_tag } => vec![*start_tag, *end_tag],
        };
        for range in tags.into_iter().filter(|range| range.is_inverted()) {
            self.collector.emit(
                Diagnostic::error(format!(
                    "`{}` has an inverted range {range}",
                    node.tag()
                ))
                .with_code(ErrorCode::E100)
                .with_help("a range must not end before it starts"),
            );
        }

        if let SourceRange::Container { start_tag, end_tag } = node.range() {
            if end_tag.start() < start_tag.end() {
                self.collector.emit(
                    Diagnostic::error(format!(
                        "end tag of `{}` at {} begins before its start tag ends at {}",
                        node.tag(),
                        end_tag.start(),
                        start_tag.end()
                    ))
                    .with_code(ErrorCode::E101),
                );
            }
        }
    }
}
