//! The tag + range base shared by every flow tree node.

use crate::{
    identifier::Id,
    position::{Position, SourceRange},
};

/// An element of the flow tree: its tag name and source extent.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    tag: Id,
    range: SourceRange,
}

impl FlowNode {
    /// Creates a new node.
    ///
    /// # Arguments
    ///
    /// * `tag` - The element tag name, e.g. `"filter"`
    /// * `range` - The element's source range
    pub fn new(tag: impl Into<Id>, range: SourceRange) -> Self {
        Self {
            tag: tag.into(),
            range,
        }
    }

    pub fn tag(&self) -> Id {
        self.tag
    }

    pub fn range(&self) -> &SourceRange {
        &self.range
    }

    pub fn is_self_closed(&self) -> bool {
        self.range.is_self_closed()
    }

    /// The position a breakpoint on this node is armed at: the start of its
    /// start tag.
    pub fn head(&self) -> Position {
        self.range.start()
    }

    /// Returns `true` if `position` lies anywhere within this node.
    pub fn contains(&self, position: Position) -> bool {
        self.range.contains(position)
    }

    /// Returns `true` if `position` lies within this node's own header.
    pub fn header_contains(&self, position: Position) -> bool {
        self.range.start_tag().contains(position)
    }
}
