//! Flow tree builders for unit tests.
//!
//! [`Layout`] hands out source lines the way a pretty-printed document would:
//! a self-closed mediator takes one line, a container takes a line for its
//! start tag, the lines of its children, and a line for its end tag.

use flowstep_core::{
    flow::{Flow, Mediator, MediatorKind, Target},
    node::FlowNode,
    position::{Position, SourceRange, TagRange},
};

pub(crate) struct Layout {
    line: u32,
}

impl Layout {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(line: u32) -> Self {
        Self { line }
    }

    fn next_line(&mut self) -> u32 {
        let line = self.line;
        self.line += 1;
        line
    }

    fn container_range(start: u32, end: u32) -> SourceRange {
        SourceRange::container(
            TagRange::new(Position::new(start, 4), Position::new(start, 30)),
            TagRange::new(Position::new(end, 4), Position::new(end, 15)),
        )
    }

    /// A self-closed mediator on its own line.
    pub fn leaf(&mut self, tag: &str) -> Mediator {
        let line = self.next_line();
        Mediator::simple(FlowNode::new(
            tag,
            SourceRange::self_closed(Position::new(line, 4), Position::new(line, 30)),
        ))
    }

    /// A flow element wrapping the mediators `build` lays out.
    pub fn flow(&mut self, tag: &str, build: impl FnOnce(&mut Self) -> Vec<Mediator>) -> Flow {
        let start = self.next_line();
        let mediators = build(self);
        let end = self.next_line();
        Flow::new(
            FlowNode::new(tag, Self::container_range(start, end)),
            mediators,
        )
    }

    /// A branching mediator whose branches `build` lays out.
    pub fn mediator(
        &mut self,
        tag: &str,
        build: impl FnOnce(&mut Self) -> MediatorKind,
    ) -> Mediator {
        let start = self.next_line();
        let kind = build(self);
        let end = self.next_line();
        Mediator::new(FlowNode::new(tag, Self::container_range(start, end)), kind)
    }

    /// A `<target>` with an optional inline sequence.
    pub fn target(&mut self, build: impl FnOnce(&mut Self) -> Option<Flow>) -> Target {
        let start = self.next_line();
        let sequence = build(self);
        let end = self.next_line();
        Target::new(
            FlowNode::new("target", Self::container_range(start, end)),
            sequence,
        )
    }
}

/// Find the first mediator tagged `tag`, searching nested flows depth first.
pub(crate) fn find<'f>(flow: &'f Flow, tag: &str) -> &'f Mediator {
    fn search<'f>(flow: &'f Flow, tag: &str) -> Option<&'f Mediator> {
        flow.mediators().iter().find_map(|mediator| {
            if mediator.node().tag() == tag {
                Some(mediator)
            } else {
                mediator
                    .child_flows()
                    .into_iter()
                    .find_map(|child| search(child, tag))
            }
        })
    }

    search(flow, tag).unwrap_or_else(|| panic!("no mediator tagged `{tag}`"))
}

/// The position inside a mediator's start tag, past its head.
pub(crate) fn on_header(mediator: &Mediator) -> Position {
    let head = mediator.head();
    Position::new(head.line(), head.column() + 3)
}
