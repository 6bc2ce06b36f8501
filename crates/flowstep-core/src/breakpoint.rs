//! Breakpoints.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// A source position at which execution is, or should become, suspended.
///
/// Two breakpoints are the same breakpoint when their line and column match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Position", into = "Position")]
pub struct Breakpoint(Position);

impl Breakpoint {
    pub fn new(line: u32, column: u32) -> Self {
        Self(Position::new(line, column))
    }

    pub fn position(&self) -> Position {
        self.0
    }

    pub fn line(&self) -> u32 {
        self.0.line()
    }

    pub fn column(&self) -> u32 {
        self.0.column()
    }
}

impl From<Position> for Breakpoint {
    fn from(position: Position) -> Self {
        Self(position)
    }
}

impl From<Breakpoint> for Position {
    fn from(breakpoint: Breakpoint) -> Self {
        breakpoint.0
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
