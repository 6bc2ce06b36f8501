//! Step-over resolution.
//!
//! Given the flow(s) a breakpoint lies in, compute every position the
//! debugger must arm so that resuming stops at the next statement, whichever
//! path the runtime takes.
//!
//! The scan walks a flow in document order with one [`ResolutionState`]
//! shared by every nested scan of the same request:
//!
//! 1. once `complete`, nothing more is examined;
//! 2. once `located`, the next mediator's head is armed and the state is
//!    complete;
//! 3. the mediator containing the breakpoint either fans out over its branches
//!    (breakpoint on its entry) or recurses into the one branch containing the
//!    breakpoint; if that does not complete the state, it becomes `located`.
//!
//! Because `located` survives the return from a nested scan, running off the
//! end of a branch arms whatever follows the branching mediator in the
//! enclosing flow, however deep the nesting.

use log::{debug, trace};

use flowstep_core::{
    breakpoint::Breakpoint,
    flow::{Case, Flow, Mediator, MediatorKind, Target},
    position::Position,
};

use crate::{
    config::{AbsentBranchPolicy, ResolverConfig},
    discriminate::{Placement, discriminate},
};

/// Mutable state of one resolution request.
#[derive(Debug, Default)]
pub struct ResolutionState {
    located: bool,
    complete: bool,
    breakpoints: Vec<Breakpoint>,
}

impl ResolutionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The statement holding the breakpoint has been passed; the next head
    /// seen is its successor.
    pub fn is_located(&self) -> bool {
        self.located
    }

    /// No further breakpoints will be added.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn into_breakpoints(self) -> Vec<Breakpoint> {
        self.breakpoints
    }

    fn arm(&mut self, head: Position) {
        trace!(head:% = head; "Arming breakpoint");
        self.breakpoints.push(head.into());
    }
}

/// Resolves step-over targets for one breakpoint.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    config: ResolverConfig,
    breakpoint: Position,
}

impl Resolver {
    /// Creates a resolver for the breakpoint at `breakpoint`.
    pub fn new(config: ResolverConfig, breakpoint: Position) -> Self {
        Self { config, breakpoint }
    }

    /// Resolve over `flows` in order with a single fresh state.
    pub fn resolve<'f>(&self, flows: impl IntoIterator<Item = &'f Flow>) -> Vec<Breakpoint> {
        let mut state = ResolutionState::new();
        for flow in flows {
            self.scan(flow, &mut state);
        }

        debug!(
            breakpoint:% = self.breakpoint,
            armed = state.breakpoints.len(),
            located = state.located,
            complete = state.complete;
            "Resolved step over"
        );
        state.into_breakpoints()
    }

    /// Scan one flow, continuing from whatever `state` earlier scans left.
    pub fn scan(&self, flow: &Flow, state: &mut ResolutionState) {
        trace!(flow:% = flow.node().tag(), range:% = flow.range(); "Scanning flow");

        for mediator in flow.mediators() {
            if state.complete {
                break;
            }

            if state.located {
                state.arm(mediator.head());
                state.complete = true;
                break;
            }

            if !mediator.contains(self.breakpoint) {
                continue;
            }

            trace!(
                mediator:% = mediator.node().tag(),
                shape:? = mediator.kind().shape();
                "Breakpoint is in mediator"
            );

            if let Some(branches) = policy_branches(mediator.kind()) {
                match discriminate(mediator, self.breakpoint, self.config.entry_region()) {
                    Placement::Entry => self.fan_out(mediator, &branches, state),
                    Placement::Nested(branch) => {
                        debug!(
                            mediator:% = mediator.node().tag(),
                            branch:% = branch.node().tag();
                            "Stepping inside branch"
                        );
                        self.scan(branch, state);
                    }
                    Placement::Elsewhere => {
                        debug!(mediator:% = mediator.node().tag(); "Breakpoint outside entry and branches");
                    }
                }
            }

            if !state.complete {
                state.located = true;
            }
        }
    }

    /// Arm the head of every branch of an entered mediator.
    ///
    /// The mediator is complete when at least one head was armed and the
    /// number armed matches the expected total for the configured
    /// [`AbsentBranchPolicy`]. Otherwise the caller marks the state located
    /// and the mediator's successor is armed as well.
    fn fan_out(&self, mediator: &Mediator, branches: &[Option<&Flow>], state: &mut ResolutionState) {
        let heads: Vec<Position> = branches
            .iter()
            .flatten()
            .filter_map(|branch| branch.head())
            .collect();

        let expected = match self.config.absent_branches() {
            AbsentBranchPolicy::FallThrough => branches.len(),
            AbsentBranchPolicy::Ignore => heads.len(),
        };
        let armed = heads.len();

        debug!(
            mediator:% = mediator.node().tag(),
            declared = branches.len(),
            armed,
            expected;
            "Entering branching mediator"
        );

        for head in heads {
            state.arm(head);
        }

        if armed > 0 && armed == expected {
            state.complete = true;
        }
    }
}

/// The branches of a branching mediator in the order their heads are armed,
/// or `None` for a mediator without nested flows.
///
/// Every declared branch has a slot, present or not:
///
/// | Mediator | Branches |
/// |---|---|
/// | `filter` | then, else |
/// | `throttle` | onAccept, onReject |
/// | `switch` | default, then each case |
/// | `entitlementService` | onAccept, onReject, advice, obligations |
/// | `cache`, `validate` | onCacheHit / onFail |
/// | `iterate`, `foreach` | the loop body |
/// | `aggregate` | onComplete |
/// | `clone`, `scatter-gather` | each target's sequence |
fn policy_branches(kind: &MediatorKind) -> Option<Vec<Option<&Flow>>> {
    let branches = match kind {
        MediatorKind::Simple => return None,
        MediatorKind::Filter { then, otherwise } => vec![then.as_ref(), otherwise.as_ref()],
        MediatorKind::Throttle {
            on_accept,
            on_reject,
        } => vec![on_accept.as_ref(), on_reject.as_ref()],
        MediatorKind::Switch { cases, default } => std::iter::once(default.as_ref())
            .chain(cases.iter().map(Case::flow))
            .collect(),
        MediatorKind::Entitlement {
            on_accept,
            on_reject,
            advice,
            obligations,
        } => vec![
            on_accept.as_ref(),
            on_reject.as_ref(),
            advice.as_ref(),
            obligations.as_ref(),
        ],
        MediatorKind::Cache { on_cache_hit: body }
        | MediatorKind::Validate { on_fail: body }
        | MediatorKind::Foreach { sequence: body }
        | MediatorKind::Aggregate { on_complete: body } => vec![body.as_ref()],
        MediatorKind::Iterate { target } => vec![target.as_ref().and_then(Target::sequence)],
        MediatorKind::Clone { targets } | MediatorKind::ScatterGather { targets } => {
            targets.iter().map(Target::sequence).collect()
        }
    };
    Some(branches)
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::test_utils::Layout;

    fn flat_flow(len: usize) -> Flow {
        let mut layout = Layout::new();
        layout.flow("sequence", |l| {
            (0..len).map(|i| l.leaf(&format!("m{i}"))).collect()
        })
    }

    proptest! {
        #[test]
        fn flat_flow_successor(len in 1usize..40, pick in 0usize..40) {
            let index = pick % len;
            let flow = flat_flow(len);
            let mediators = flow.mediators();
            let resolver = Resolver::new(ResolverConfig::default(), mediators[index].head());

            let result = resolver.resolve([&flow]);
            if index + 1 < len {
                prop_assert_eq!(result, vec![Breakpoint::from(mediators[index + 1].head())]);
            } else {
                prop_assert!(result.is_empty());
            }
        }

        #[test]
        fn resolution_is_idempotent(len in 1usize..20, line in 0u32..30, column in 0u32..40) {
            let flow = flat_flow(len);
            let resolver = Resolver::new(ResolverConfig::default(), Position::new(line, column));

            prop_assert_eq!(resolver.resolve([&flow]), resolver.resolve([&flow]));
        }
    }
}
