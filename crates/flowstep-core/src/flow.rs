//! Mediators and the flows they nest.
//!
//! A [`Flow`] is an ordered list of [`Mediator`]s in document order, which is
//! also their execution order along the non-branching path. Branching
//! mediators own their nested flows directly; flows are never shared between
//! two parents.
//!
//! The set of mediator kinds is closed. Any tag that has no nested flows is a
//! [`MediatorKind::Simple`] mediator.

use crate::{
    node::FlowNode,
    position::{Position, SourceRange},
};

/// An ordered sequence of mediators, e.g. the body of `<inSequence>` or
/// `<then>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Flow {
    node: FlowNode,
    mediators: Vec<Mediator>,
}

impl Flow {
    /// Creates a flow from its enclosing element and its mediators.
    pub fn new(node: FlowNode, mediators: Vec<Mediator>) -> Self {
        Self { node, mediators }
    }

    pub fn node(&self) -> &FlowNode {
        &self.node
    }

    pub fn range(&self) -> &SourceRange {
        self.node.range()
    }

    pub fn mediators(&self) -> &[Mediator] {
        &self.mediators
    }

    pub fn is_empty(&self) -> bool {
        self.mediators.is_empty()
    }

    /// The head of the first mediator, or `None` for an empty flow.
    pub fn head(&self) -> Option<Position> {
        self.mediators.first().map(Mediator::head)
    }

    pub fn contains(&self, position: Position) -> bool {
        self.node.contains(position)
    }
}

/// A single processing step.
#[derive(Debug, Clone, PartialEq)]
pub struct Mediator {
    node: FlowNode,
    kind: MediatorKind,
}

impl Mediator {
    /// Creates a new mediator.
    pub fn new(node: FlowNode, kind: MediatorKind) -> Self {
        Self { node, kind }
    }

    /// Creates a mediator without nested flows.
    pub fn simple(node: FlowNode) -> Self {
        Self::new(node, MediatorKind::Simple)
    }

    pub fn node(&self) -> &FlowNode {
        &self.node
    }

    pub fn kind(&self) -> &MediatorKind {
        &self.kind
    }

    /// The position a breakpoint on this mediator is armed at.
    pub fn head(&self) -> Position {
        self.node.head()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.node.contains(position)
    }

    /// Returns `true` if this mediator owns nested flows.
    pub fn is_branching(&self) -> bool {
        !matches!(self.kind, MediatorKind::Simple)
    }

    /// All nested flows that are present, in document order of their fields.
    pub fn child_flows(&self) -> Vec<&Flow> {
        self.kind.child_flows()
    }
}

/// A `<case>` of a `switch` mediator.
///
/// A case without mediators keeps its slot in the switch but has no flow.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    regex: Option<String>,
    flow: Option<Flow>,
}

impl Case {
    pub fn new(regex: Option<String>, flow: Option<Flow>) -> Self {
        Self { regex, flow }
    }

    pub fn regex(&self) -> Option<&str> {
        self.regex.as_deref()
    }

    pub fn flow(&self) -> Option<&Flow> {
        self.flow.as_ref()
    }
}

/// A `<target>` of a fan-out or loop mediator.
///
/// A target may reference a named sequence or endpoint instead of declaring
/// an inline sequence, in which case `sequence` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    node: FlowNode,
    sequence: Option<Flow>,
}

impl Target {
    pub fn new(node: FlowNode, sequence: Option<Flow>) -> Self {
        Self { node, sequence }
    }

    pub fn node(&self) -> &FlowNode {
        &self.node
    }

    pub fn sequence(&self) -> Option<&Flow> {
        self.sequence.as_ref()
    }
}

/// The closed set of mediator shapes.
///
/// Nested flows are `None` when the element was not declared.
#[derive(Debug, Clone, PartialEq)]
pub enum MediatorKind {
    /// No nested flow: `log`, `send`, `property`, `drop`, `call`, ...
    Simple,

    /// `filter`: `then` / `else`.
    Filter {
        then: Option<Flow>,
        otherwise: Option<Flow>,
    },

    /// `throttle`: `onAccept` / `onReject`.
    Throttle {
        on_accept: Option<Flow>,
        on_reject: Option<Flow>,
    },

    /// `switch`: ordered cases plus an optional default.
    Switch {
        cases: Vec<Case>,
        default: Option<Flow>,
    },

    /// `entitlementService`.
    Entitlement {
        on_accept: Option<Flow>,
        on_reject: Option<Flow>,
        advice: Option<Flow>,
        obligations: Option<Flow>,
    },

    /// `cache`: `onCacheHit`.
    Cache { on_cache_hit: Option<Flow> },

    /// `validate`: `onFail`.
    Validate { on_fail: Option<Flow> },

    /// `iterate`: the iteration target's sequence.
    Iterate { target: Option<Target> },

    /// `foreach`: the per-element sequence.
    Foreach { sequence: Option<Flow> },

    /// `aggregate`: `onComplete`.
    Aggregate { on_complete: Option<Flow> },

    /// `clone`: one target per concurrent copy of the message.
    Clone { targets: Vec<Target> },

    /// `scatter-gather`: one target per concurrent request.
    ScatterGather { targets: Vec<Target> },
}

impl MediatorKind {
    /// A short name for the mediator's shape, used in logs.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Simple => Shape::Simple,
            Self::Filter { .. } | Self::Throttle { .. } => Shape::DualBranch,
            Self::Switch { .. } | Self::Entitlement { .. } => Shape::MultiBranch,
            Self::Cache { .. } | Self::Validate { .. } => Shape::SingleBranch,
            Self::Iterate { .. } | Self::Foreach { .. } => Shape::SingleBodyLoop,
            Self::Aggregate { .. } => Shape::AggregateBranch,
            Self::Clone { .. } | Self::ScatterGather { .. } => Shape::FanOutBranch,
        }
    }

    /// All nested flows that are present.
    pub fn child_flows(&self) -> Vec<&Flow> {
        match self {
            Self::Simple => Vec::new(),
            Self::Filter { then, otherwise } => [then, otherwise].into_iter().flatten().collect(),
            Self::Throttle {
                on_accept,
                on_reject,
            } => [on_accept, on_reject].into_iter().flatten().collect(),
            Self::Switch { cases, default } => cases
                .iter()
                .filter_map(Case::flow)
                .chain(default.as_ref())
                .collect(),
            Self::Entitlement {
                on_accept,
                on_reject,
                advice,
                obligations,
            } => [on_accept, on_reject, advice, obligations]
                .into_iter()
                .flatten()
                .collect(),
            Self::Cache { on_cache_hit: flow }
            | Self::Validate { on_fail: flow }
            | Self::Foreach { sequence: flow }
            | Self::Aggregate { on_complete: flow } => flow.iter().collect(),
            Self::Iterate { target } => target.iter().filter_map(Target::sequence).collect(),
            Self::Clone { targets } | Self::ScatterGather { targets } => {
                targets.iter().filter_map(Target::sequence).collect()
            }
        }
    }
}

/// Structural classification of a mediator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Simple,
    SingleBranch,
    DualBranch,
    MultiBranch,
    FanOutBranch,
    SingleBodyLoop,
    AggregateBranch,
}
