//! Rover movement and collision state machine.
//!
//! A [`Rover`] borrows the mission [`Grid`] and never references other rovers.
//! Callers pass the rovers that finished before this one as the obstacle set
//! on every forward move.

use crate::core::directive::Directive;
use crate::core::grid::{Grid, Position};
use crate::core::heading::Heading;

/// Result of a single forward move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The rover advanced to the new cell.
    Moved(Position),
    /// The target cell is outside the grid; the rover stayed put.
    ///
    /// Carries the current cell instead when the step would overflow `i64`.
    OffGrid(Position),
    /// The target cell holds an earlier rover; the rover stayed put.
    Blocked(Position),
}

impl MoveOutcome {
    pub fn is_rejected(&self) -> bool {
        !matches!(self, MoveOutcome::Moved(_))
    }

    /// Operator-facing notice for a rejected move.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            MoveOutcome::Moved(_) => None,
            MoveOutcome::OffGrid(_) => Some("ignoring move, I would fall off the edge!"),
            MoveOutcome::Blocked(_) => Some("ignoring move, another rover is blocking the way"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rover<'g> {
    position: Position,
    heading: Heading,
    grid: &'g Grid,
}

impl<'g> Rover<'g> {
    /// Place a rover. Landing coordinates are validated by the input parser;
    /// this constructor trusts its caller.
    pub fn new(position: Position, heading: Heading, grid: &'g Grid) -> Self {
        Self {
            position,
            heading,
            grid,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn rotate_left(&mut self) {
        self.heading = self.heading.left();
    }

    pub fn rotate_right(&mut self) {
        self.heading = self.heading.right();
    }

    /// Advance one cell unless the target is off the grid or occupied by
    /// one of `obstacles`. Bounds are checked before collisions.
    pub fn move_forward(&mut self, obstacles: &[Rover<'_>]) -> MoveOutcome {
        let Some(target) = self.position.step(self.heading) else {
            return MoveOutcome::OffGrid(self.position);
        };
        if !self.grid.contains(target) {
            return MoveOutcome::OffGrid(target);
        }
        if obstacles.iter().any(|other| other.position == target) {
            return MoveOutcome::Blocked(target);
        }
        self.position = target;
        MoveOutcome::Moved(target)
    }

    /// Apply one directive. Rotations return `None`; moves return their outcome.
    pub fn apply(&mut self, directive: Directive, obstacles: &[Rover<'_>]) -> Option<MoveOutcome> {
        match directive {
            Directive::Left => {
                self.rotate_left();
                None
            }
            Directive::Right => {
                self.rotate_right();
                None
            }
            Directive::Move => Some(self.move_forward(obstacles)),
        }
    }
}
