//! Entry-vs-nested discrimination for branching mediators.
//!
//! When a breakpoint lies inside a branching mediator, stepping over it either
//! enters the mediator (the breakpoint is on its header, so every branch may
//! run next) or continues inside exactly one of its branches.

use flowstep_core::{flow::Flow, flow::Mediator, position::Position};

use crate::config::EntryRegion;

/// Where a position lies within a mediator that contains it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement<'f> {
    /// On the mediator's own header.
    Entry,

    /// Inside this branch.
    Nested(&'f Flow),

    /// Inside the mediator but neither on its header nor in a branch.
    Elsewhere,
}

/// Classify `position` relative to `mediator`.
///
/// The start tag is checked first, then the present branches in field order.
/// A position that matches neither is an [`Placement::Entry`] under
/// [`EntryRegion::OutsideBranches`] and [`Placement::Elsewhere`] otherwise.
pub fn discriminate(mediator: &Mediator, position: Position, region: EntryRegion) -> Placement<'_> {
    if mediator.node().header_contains(position) {
        return Placement::Entry;
    }

    if let Some(child) = mediator
        .child_flows()
        .into_iter()
        .find(|flow| flow.contains(position))
    {
        return Placement::Nested(child);
    }

    match region {
        EntryRegion::StartTag => Placement::Elsewhere,
        EntryRegion::OutsideBranches => Placement::Entry,
    }
}

#[cfg(test)]
mod tests {
    use flowstep_core::flow::MediatorKind;

    use super::*;
    use crate::test_utils::{Layout, find, on_header};

    fn filter() -> Mediator {
        let mut layout = Layout::new();
        layout.mediator("filter", |l| MediatorKind::Filter {
            then: Some(l.flow("then", |l| vec![l.leaf("log")])),
            otherwise: Some(l.flow("else", |l| vec![l.leaf("drop")])),
        })
    }

    fn branch_tag(placement: Placement<'_>) -> Option<String> {
        match placement {
            Placement::Nested(flow) => Some(flow.node().tag().to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_header_is_entry() {
        let filter = filter();

        assert_eq!(
            discriminate(&filter, filter.head(), EntryRegion::StartTag),
            Placement::Entry
        );
        assert_eq!(
            discriminate(&filter, on_header(&filter), EntryRegion::StartTag),
            Placement::Entry
        );
    }

    #[test]
    fn test_position_in_branch_is_nested() {
        let filter = filter();
        let MediatorKind::Filter {
            then: Some(then),
            otherwise: Some(otherwise),
        } = filter.kind()
        else {
            panic!("Expected filter with both branches");
        };

        let log = find(then, "log");
        let placement = discriminate(&filter, log.head(), EntryRegion::StartTag);
        assert_eq!(branch_tag(placement), Some("then".to_string()));

        let drop = find(otherwise, "drop");
        let placement = discriminate(&filter, drop.head(), EntryRegion::StartTag);
        assert_eq!(branch_tag(placement), Some("else".to_string()));
    }

    #[test]
    fn test_branch_header_is_nested_not_entry() {
        let filter = filter();
        let MediatorKind::Filter { then: Some(then), .. } = filter.kind() else {
            panic!("Expected filter with then");
        };

        let placement = discriminate(&filter, then.node().head(), EntryRegion::StartTag);
        assert_eq!(branch_tag(placement), Some("then".to_string()));
    }

    #[test]
    fn test_end_tag_depends_on_region() {
        let filter = filter();
        let end = filter.node().range().end();

        assert_eq!(
            discriminate(&filter, end, EntryRegion::StartTag),
            Placement::Elsewhere
        );
        assert_eq!(
            discriminate(&filter, end, EntryRegion::OutsideBranches),
            Placement::Entry
        );
    }

    #[test]
    fn test_self_closed_branching_mediator_is_entry() {
        let mut layout = Layout::new();
        let clone = layout.leaf("clone");
        let clone = Mediator::new(clone.node().clone(), MediatorKind::Clone { targets: Vec::new() });

        assert_eq!(
            discriminate(&clone, clone.node().range().end(), EntryRegion::StartTag),
            Placement::Entry
        );
    }
}
