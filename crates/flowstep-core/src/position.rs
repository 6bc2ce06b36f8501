//! Source positions and ranges.
//!
//! Positions are `(line, column)` pairs as reported by the runtime debugger and
//! the editor. A node's extent is either a single range (self-closed elements
//! such as `<drop/>`) or a pair of tag ranges (the start tag `<filter ...>` and
//! the end tag `</filter>`).
//!
//! Containment is inclusive on both ends and compares positions
//! lexicographically: lines strictly between the boundaries always match,
//! while the boundary lines compare columns against the tag boundaries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(line, column)` location in a source document.
///
/// Ordering is lexicographic: line first, then column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    line: u32,
    column: u32,
}

impl Position {
    /// Creates a new position.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A contiguous `start..=end` range, the extent of a single tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagRange {
    start: Position,
    end: Position,
}

impl TagRange {
    /// Creates a new tag range.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Returns `true` if `position` lies within `start..=end`.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Returns `true` if the range ends before it starts.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Returns `true` if `other` lies entirely within this range.
    pub fn encloses(&self, other: TagRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for TagRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// The source extent of a flow tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceRange {
    /// A self-closed element, e.g. `<log level="full"/>`.
    SelfClosed(TagRange),

    /// An element with separate start and end tags.
    Container {
        start_tag: TagRange,
        end_tag: TagRange,
    },
}

impl SourceRange {
    /// Creates the range of a self-closed element.
    pub fn self_closed(start: Position, end: Position) -> Self {
        Self::SelfClosed(TagRange::new(start, end))
    }

    /// Creates the range of an element with start and end tags.
    pub fn container(start_tag: TagRange, end_tag: TagRange) -> Self {
        Self::Container { start_tag, end_tag }
    }

    /// Returns `true` for self-closed elements.
    pub fn is_self_closed(&self) -> bool {
        matches!(self, Self::SelfClosed(_))
    }

    /// The node's header: the start tag, or the whole range when self-closed.
    pub fn start_tag(&self) -> TagRange {
        match self {
            Self::SelfClosed(range) => *range,
            Self::Container { start_tag, .. } => *start_tag,
        }
    }

    /// The end tag, if the element has one.
    pub fn end_tag(&self) -> Option<TagRange> {
        match self {
            Self::SelfClosed(_) => None,
            Self::Container { end_tag, .. } => Some(*end_tag),
        }
    }

    /// The first position of the element.
    pub fn start(&self) -> Position {
        self.start_tag().start()
    }

    /// The last position of the element.
    pub fn end(&self) -> Position {
        match self {
            Self::SelfClosed(range) => range.end(),
            Self::Container { end_tag, .. } => end_tag.end(),
        }
    }

    /// The effective extent: from the start of the start tag to the end of
    /// the end tag.
    pub fn extent(&self) -> TagRange {
        TagRange::new(self.start(), self.end())
    }

    /// Returns `true` if `position` lies within the element's effective extent.
    pub fn contains(&self, position: Position) -> bool {
        self.extent().contains(position)
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.extent().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: u32, column: u32) -> Position {
        Position::new(line, column)
    }

    fn filter_range() -> SourceRange {
        // <filter ...>   at 3:4-3:30
        // </filter>      at 9:4-9:13
        SourceRange::container(
            TagRange::new(pos(3, 4), pos(3, 30)),
            TagRange::new(pos(9, 4), pos(9, 13)),
        )
    }

    #[test]
    fn test_position_ordering() {
        assert!(pos(1, 50) < pos(2, 0));
        assert!(pos(2, 3) < pos(2, 4));
        assert_eq!(pos(4, 4), pos(4, 4));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(pos(12, 7).to_string(), "12:7");
    }

    #[test]
    fn test_self_closed_contains() {
        let range = SourceRange::self_closed(pos(5, 8), pos(5, 40));

        assert!(range.is_self_closed());
        assert!(range.contains(pos(5, 8)));
        assert!(range.contains(pos(5, 20)));
        assert!(range.contains(pos(5, 40)));
        assert!(!range.contains(pos(5, 7)));
        assert!(!range.contains(pos(5, 41)));
        assert!(!range.contains(pos(4, 20)));
        assert!(!range.contains(pos(6, 0)));
    }

    #[test]
    fn test_container_interior_lines_ignore_column() {
        let range = filter_range();

        assert!(range.contains(pos(4, 0)));
        assert!(range.contains(pos(8, 1000)));
    }

    #[test]
    fn test_container_boundary_lines_compare_columns() {
        let range = filter_range();

        assert!(!range.contains(pos(3, 3)));
        assert!(range.contains(pos(3, 4)));
        assert!(range.contains(pos(3, 100)));
        assert!(range.contains(pos(9, 0)));
        assert!(range.contains(pos(9, 13)));
        assert!(!range.contains(pos(9, 14)));
    }

    #[test]
    fn test_single_line_container() {
        let range = SourceRange::container(
            TagRange::new(pos(2, 4), pos(2, 10)),
            TagRange::new(pos(2, 11), pos(2, 18)),
        );

        assert!(range.contains(pos(2, 4)));
        assert!(range.contains(pos(2, 18)));
        assert!(!range.contains(pos(2, 19)));
        assert!(!range.contains(pos(2, 3)));
    }

    #[test]
    fn test_start_and_end_tags() {
        let range = filter_range();

        assert_eq!(range.start_tag(), TagRange::new(pos(3, 4), pos(3, 30)));
        assert_eq!(range.end_tag(), Some(TagRange::new(pos(9, 4), pos(9, 13))));
        assert_eq!(range.start(), pos(3, 4));
        assert_eq!(range.end(), pos(9, 13));

        let leaf = SourceRange::self_closed(pos(1, 0), pos(1, 9));
        assert_eq!(leaf.start_tag(), TagRange::new(pos(1, 0), pos(1, 9)));
        assert_eq!(leaf.end_tag(), None);
    }

    #[test]
    fn test_tag_range_inverted_and_encloses() {
        assert!(TagRange::new(pos(3, 0), pos(2, 0)).is_inverted());
        assert!(!TagRange::new(pos(2, 0), pos(2, 0)).is_inverted());

        let outer = TagRange::new(pos(1, 0), pos(10, 0));
        assert!(outer.encloses(TagRange::new(pos(2, 0), pos(3, 5))));
        assert!(!outer.encloses(TagRange::new(pos(2, 0), pos(10, 1))));
    }
}
