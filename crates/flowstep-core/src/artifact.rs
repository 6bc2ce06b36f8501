//! Root artifacts.
//!
//! An artifact is the top-level document a breakpoint is set in. Each kind
//! exposes its flows differently:
//!
//! - [`Api`]: resources, each with in/out/fault sequences
//! - [`Proxy`]: a single target with in/out/fault sequences
//! - [`NamedSequence`]: the sequence itself is the flow
//! - [`Template`]: a sequence template wrapping one flow

use crate::{flow::Flow, node::FlowNode};

/// A parsed root document.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    Api(Api),
    Proxy(Proxy),
    Sequence(NamedSequence),
    Template(Template),
}

impl Artifact {
    /// The artifact's declared name.
    pub fn name(&self) -> &str {
        match self {
            Self::Api(api) => api.name(),
            Self::Proxy(proxy) => proxy.name(),
            Self::Sequence(sequence) => sequence.name(),
            Self::Template(template) => template.name(),
        }
    }

    /// The artifact kind as it appears in documents.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Api(_) => "api",
            Self::Proxy(_) => "proxy",
            Self::Sequence(_) => "sequence",
            Self::Template(_) => "template",
        }
    }
}

/// A REST API with one or more resources.
#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    name: String,
    node: FlowNode,
    resources: Vec<Resource>,
}

impl Api {
    pub fn new(name: impl Into<String>, node: FlowNode, resources: Vec<Resource>) -> Self {
        Self {
            name: name.into(),
            node,
            resources,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node(&self) -> &FlowNode {
        &self.node
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

/// The three mediation sequences shared by API resources and proxy targets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequences {
    pub in_sequence: Option<Flow>,
    pub out_sequence: Option<Flow>,
    pub fault_sequence: Option<Flow>,
}

/// One resource of an [`Api`].
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    node: FlowNode,
    uri_template: Option<String>,
    sequences: Sequences,
}

impl Resource {
    pub fn new(node: FlowNode, uri_template: Option<String>, sequences: Sequences) -> Self {
        Self {
            node,
            uri_template,
            sequences,
        }
    }

    pub fn node(&self) -> &FlowNode {
        &self.node
    }

    pub fn uri_template(&self) -> Option<&str> {
        self.uri_template.as_deref()
    }

    pub fn sequences(&self) -> &Sequences {
        &self.sequences
    }
}

/// A proxy service.
#[derive(Debug, Clone, PartialEq)]
pub struct Proxy {
    name: String,
    node: FlowNode,
    target: Option<ProxyTarget>,
}

impl Proxy {
    pub fn new(name: impl Into<String>, node: FlowNode, target: Option<ProxyTarget>) -> Self {
        Self {
            name: name.into(),
            node,
            target,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node(&self) -> &FlowNode {
        &self.node
    }

    pub fn target(&self) -> Option<&ProxyTarget> {
        self.target.as_ref()
    }
}

/// The `<target>` of a [`Proxy`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyTarget {
    node: FlowNode,
    sequences: Sequences,
}

impl ProxyTarget {
    pub fn new(node: FlowNode, sequences: Sequences) -> Self {
        Self { node, sequences }
    }

    pub fn node(&self) -> &FlowNode {
        &self.node
    }

    pub fn sequences(&self) -> &Sequences {
        &self.sequences
    }
}

/// A standalone named sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSequence {
    name: String,
    body: Flow,
}

impl NamedSequence {
    pub fn new(name: impl Into<String>, body: Flow) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &Flow {
        &self.body
    }
}

/// A sequence template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    name: String,
    node: FlowNode,
    body: Option<Flow>,
}

impl Template {
    pub fn new(name: impl Into<String>, node: FlowNode, body: Option<Flow>) -> Self {
        Self {
            name: name.into(),
            node,
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node(&self) -> &FlowNode {
        &self.node
    }

    pub fn body(&self) -> Option<&Flow> {
        self.body.as_ref()
    }
}
