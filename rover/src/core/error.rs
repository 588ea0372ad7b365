//! Fatal mission input errors.
//!
//! Every variant names the 1-based input line it was raised for and carries
//! that line's content verbatim.

use crate::core::grid::GridError;
use crate::core::heading::UnknownHeading;

/// Why a landing line was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LandingFault {
    #[error("expected 'X Y HEADING', found {0} token(s)")]
    TokenCount(usize),
    #[error("coordinate '{0}' is not an integer")]
    Coordinate(String),
    #[error(transparent)]
    Heading(#[from] UnknownHeading),
    #[error("landing ({x}, {y}) is outside the grid [0, {rightmost}] x [0, {uppermost}]")]
    OutOfBounds {
        x: i64,
        y: i64,
        rightmost: i64,
        uppermost: i64,
    },
}

/// Why the grid bounds line was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsFault {
    #[error("missing grid bounds line")]
    Missing,
    #[error("expected 'RIGHTMOST UPPERMOST', found {0} token(s)")]
    TokenCount(usize),
    #[error("bound '{0}' is not an integer")]
    NotInteger(String),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// A fatal problem with one line of mission input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Error on input line {line}: {content}, {fault}")]
    InvalidBounds {
        line: usize,
        content: String,
        fault: BoundsFault,
    },
    #[error("Error on input line {line}: {content}, invalid landing: {fault}")]
    InvalidLanding {
        line: usize,
        content: String,
        fault: LandingFault,
    },
    #[error(
        "Error on input line {line}: {content}, unknown directive '{symbol}' at column {column}"
    )]
    InvalidDirective {
        line: usize,
        content: String,
        symbol: char,
        column: usize,
    },
}

impl InputError {
    /// 1-based line number the error is attributed to.
    pub fn line(&self) -> usize {
        match self {
            InputError::InvalidBounds { line, .. }
            | InputError::InvalidLanding { line, .. }
            | InputError::InvalidDirective { line, .. } => *line,
        }
    }
}
