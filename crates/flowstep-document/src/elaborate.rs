//! Elaboration of raw document records into the flow tree.
//!
//! The mediator tag decides the [`MediatorKind`]. Branch fields that the kind
//! does not have are reported and dropped, declared-but-empty branches are
//! reported and treated as absent, and tags that are not known mediators
//! become [`MediatorKind::Simple`].

use log::trace;

use flowstep_core::{
    artifact::{Api, Artifact, NamedSequence, Proxy, ProxyTarget, Resource, Sequences, Template},
    flow::{Case, Flow, Mediator, MediatorKind, Target},
    node::FlowNode,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    raw::{
        RawApi, RawArtifact, RawCase, RawFlow, RawMediator, RawNamedSequence, RawProxy,
        RawSequences, RawTarget, RawTemplate,
    },
};

/// Mediators without nested flows.
const SIMPLE_MEDIATORS: &[&str] = &[
    "log",
    "send",
    "property",
    "propertyGroup",
    "header",
    "drop",
    "call",
    "callout",
    "respond",
    "loopback",
    "payloadFactory",
    "enrich",
    "xslt",
    "fastXSLT",
    "xquery",
    "script",
    "class",
    "pojoCommand",
    "bean",
    "ejb",
    "dblookup",
    "dbreport",
    "event",
    "smooks",
    "store",
    "transaction",
    "builder",
    "rule",
    "publishEvent",
    "ntlm",
    "datamapper",
    "jsontransform",
    "call-template",
    "sequence",
    "enqueue",
    "makefault",
    "rewrite",
    "spring",
    "oauthService",
    "conditionalRouter",
    "dataServiceCall",
];

/// Branch fields each branching mediator understands, in document format
/// spelling.
fn supported_branches(tag: &str) -> &'static [&'static str] {
    match tag {
        "filter" => &["then", "else"],
        "throttle" => &["onAccept", "onReject"],
        "switch" => &["cases", "default"],
        "entitlementService" => &["onAccept", "onReject", "advice", "obligations"],
        "cache" => &["onCacheHit"],
        "validate" => &["onFail"],
        "iterate" => &["target"],
        "foreach" => &["sequence"],
        "aggregate" => &["onComplete"],
        "clone" | "scatter-gather" => &["targets"],
        _ => &[],
    }
}

/// Builds the flow tree from raw records, reporting problems to a collector.
pub(crate) struct Builder<'c> {
    collector: &'c mut DiagnosticCollector,
}

impl<'c> Builder<'c> {
    pub fn new(collector: &'c mut DiagnosticCollector) -> Self {
        Self { collector }
    }

    pub fn build(mut self, raw: RawArtifact) -> Artifact {
        match raw {
            RawArtifact::Api(api) => Artifact::Api(self.build_api(api)),
            RawArtifact::Proxy(proxy) => Artifact::Proxy(self.build_proxy(proxy)),
            RawArtifact::Sequence(sequence) => Artifact::Sequence(self.build_sequence(sequence)),
            RawArtifact::Template(template) => Artifact::Template(self.build_template(template)),
        }
    }

    fn build_api(&mut self, raw: RawApi) -> Api {
        let resources = raw
            .resources
            .into_iter()
            .map(|resource| {
                let node = FlowNode::new("resource", resource.range.into());
                let sequences = self.build_sequences(resource.sequences);
                Resource::new(node, resource.uri_template, sequences)
            })
            .collect();
        Api::new(raw.name, FlowNode::new("api", raw.range.into()), resources)
    }

    fn build_proxy(&mut self, raw: RawProxy) -> Proxy {
        let target = raw.target.map(|target| {
            let node = FlowNode::new("target", target.range.into());
            ProxyTarget::new(node, self.build_sequences(target.sequences))
        });
        Proxy::new(raw.name, FlowNode::new("proxy", raw.range.into()), target)
    }

    fn build_sequence(&mut self, raw: RawNamedSequence) -> NamedSequence {
        let node = FlowNode::new("sequence", raw.range.into());
        let mediators = self.build_mediators(raw.mediators);
        NamedSequence::new(raw.name, Flow::new(node, mediators))
    }

    fn build_template(&mut self, raw: RawTemplate) -> Template {
        let body = raw.sequence.map(|sequence| self.build_flow(sequence));
        Template::new(raw.name, FlowNode::new("template", raw.range.into()), body)
    }

    fn build_sequences(&mut self, raw: RawSequences) -> Sequences {
        Sequences {
            in_sequence: raw.in_sequence.map(|flow| self.build_flow(flow)),
            out_sequence: raw.out_sequence.map(|flow| self.build_flow(flow)),
            fault_sequence: raw.fault_sequence.map(|flow| self.build_flow(flow)),
        }
    }

    fn build_flow(&mut self, raw: RawFlow) -> Flow {
        let node = FlowNode::new(raw.tag.as_str(), raw.range.into());
        let mediators = self.build_mediators(raw.mediators);
        Flow::new(node, mediators)
    }

    fn build_mediators(&mut self, raw: Vec<RawMediator>) -> Vec<Mediator> {
        raw.into_iter()
            .map(|mediator| self.build_mediator(mediator))
            .collect()
    }

    /// Build a nested branch, treating a declared-but-empty flow as absent.
    fn build_branch(&mut self, owner: &FlowNode, raw: Option<RawFlow>) -> Option<Flow> {
        let flow = self.build_flow(raw?);
        self.non_empty(owner, flow)
    }

    fn non_empty(&mut self, owner: &FlowNode, flow: Flow) -> Option<Flow> {
        if flow.is_empty() {
            self.collector.emit(
                Diagnostic::warning(format!(
                    "`{}` of `{}` at {} has no mediators",
                    flow.node().tag(),
                    owner.tag(),
                    owner.head()
                ))
                .with_code(ErrorCode::E200)
                .with_help("remove the empty element or add mediators to it"),
            );
            return None;
        }
        Some(flow)
    }

    fn build_case(&mut self, owner: &FlowNode, raw: RawCase) -> Case {
        let node = FlowNode::new(raw.tag.as_str(), raw.range.into());
        let mediators = self.build_mediators(raw.mediators);
        let flow = self.non_empty(owner, Flow::new(node, mediators));
        Case::new(raw.regex, flow)
    }

    fn build_target(&mut self, raw: RawTarget) -> Target {
        let node = FlowNode::new(raw.tag.as_str(), raw.range.into());
        let sequence = self.build_branch(&node, raw.sequence);
        Target::new(node, sequence)
    }

    fn build_mediator(&mut self, raw: RawMediator) -> Mediator {
        let node = FlowNode::new(raw.tag.as_str(), raw.range.into());
        self.check_branches(&node, &raw);

        let kind = match raw.tag.as_str() {
            "filter" => MediatorKind::Filter {
                then: self.build_branch(&node, raw.then),
                otherwise: self.build_branch(&node, raw.otherwise),
            },
            "throttle" => MediatorKind::Throttle {
                on_accept: self.build_branch(&node, raw.on_accept),
                on_reject: self.build_branch(&node, raw.on_reject),
            },
            "switch" => MediatorKind::Switch {
                cases: raw
                    .cases
                    .unwrap_or_default()
                    .into_iter()
                    .map(|case| self.build_case(&node, case))
                    .collect(),
                default: self.build_branch(&node, raw.default),
            },
            "entitlementService" => MediatorKind::Entitlement {
                on_accept: self.build_branch(&node, raw.on_accept),
                on_reject: self.build_branch(&node, raw.on_reject),
                advice: self.build_branch(&node, raw.advice),
                obligations: self.build_branch(&node, raw.obligations),
            },
            "cache" => MediatorKind::Cache {
                on_cache_hit: self.build_branch(&node, raw.on_cache_hit),
            },
            "validate" => MediatorKind::Validate {
                on_fail: self.build_branch(&node, raw.on_fail),
            },
            "iterate" => MediatorKind::Iterate {
                target: raw.target.map(|target| self.build_target(target)),
            },
            "foreach" => MediatorKind::Foreach {
                sequence: self.build_branch(&node, raw.sequence),
            },
            "aggregate" => MediatorKind::Aggregate {
                on_complete: self.build_branch(&node, raw.on_complete),
            },
            "clone" => MediatorKind::Clone {
                targets: self.build_targets(raw.targets),
            },
            "scatter-gather" => MediatorKind::ScatterGather {
                targets: self.build_targets(raw.targets),
            },
            tag => {
                if !SIMPLE_MEDIATORS.contains(&tag) {
                    self.collector.emit(
                        Diagnostic::warning(format!(
                            "unknown mediator `{tag}` at {}",
                            node.head()
                        ))
                        .with_code(ErrorCode::E201)
                        .with_help("it is stepped over as a mediator without nested flows"),
                    );
                }
                MediatorKind::Simple
            }
        };

        trace!(tag = raw.tag, shape:? = kind.shape(); "Elaborated mediator");
        Mediator::new(node, kind)
    }

    fn build_targets(&mut self, raw: Option<Vec<RawTarget>>) -> Vec<Target> {
        raw.unwrap_or_default()
            .into_iter()
            .map(|target| self.build_target(target))
            .collect()
    }

    /// Report branch fields the mediator's kind does not have.
    fn check_branches(&mut self, node: &FlowNode, raw: &RawMediator) {
        let supported = supported_branches(&raw.tag);
        for field in raw.declared_branches() {
            if !supported.contains(&field) {
                self.collector.emit(
                    Diagnostic::warning(format!(
                        "`{}` at {} has no `{field}` branch",
                        raw.tag,
                        node.head()
                    ))
                    .with_code(ErrorCode::E202)
                    .with_help("the branch is ignored"),
                );
            }
        }
    }
}
