//! Inclusive rectangular plateau anchored at the origin.

use crate::core::heading::Heading;

/// A cell on the plateau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step along `heading`.
    ///
    /// Returns `None` only when the step overflows `i64`, which no grid can contain.
    pub fn step(self, heading: Heading) -> Option<Position> {
        let (dx, dy) = heading.offset();
        Some(Position {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid bounds must be non-negative, got ({rightmost}, {uppermost})")]
    NegativeBound { rightmost: i64, uppermost: i64 },
}

/// Immutable bounds `[0, rightmost] x [0, uppermost]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    rightmost: i64,
    uppermost: i64,
}

impl Grid {
    pub fn new(rightmost: i64, uppermost: i64) -> Result<Self, GridError> {
        if rightmost < 0 || uppermost < 0 {
            return Err(GridError::NegativeBound {
                rightmost,
                uppermost,
            });
        }
        Ok(Self {
            rightmost,
            uppermost,
        })
    }

    pub fn rightmost(&self) -> i64 {
        self.rightmost
    }

    pub fn uppermost(&self) -> i64 {
        self.uppermost
    }

    /// True if `position` lies inside the inclusive rectangle.
    pub fn contains(&self, position: Position) -> bool {
        (0..=self.rightmost).contains(&position.x) && (0..=self.uppermost).contains(&position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_every_edge() {
        let grid = Grid::new(5, 3).expect("grid");
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(5, 3)));
        assert!(grid.contains(Position::new(5, 0)));
        assert!(grid.contains(Position::new(0, 3)));
        assert!(!grid.contains(Position::new(6, 3)));
        assert!(!grid.contains(Position::new(5, 4)));
        assert!(!grid.contains(Position::new(-1, 0)));
        assert!(!grid.contains(Position::new(0, -1)));
    }

    #[test]
    fn single_cell_grid_contains_only_origin() {
        let grid = Grid::new(0, 0).expect("grid");
        assert!(grid.contains(Position::new(0, 0)));
        assert!(!grid.contains(Position::new(1, 0)));
        assert!(!grid.contains(Position::new(0, 1)));
    }

    #[test]
    fn negative_bounds_are_rejected() {
        assert_eq!(
            Grid::new(-1, 4),
            Err(GridError::NegativeBound {
                rightmost: -1,
                uppermost: 4
            })
        );
    }

    #[test]
    fn step_overflow_yields_none() {
        assert_eq!(Position::new(i64::MAX, 0).step(Heading::East), None);
        assert_eq!(
            Position::new(2, 2).step(Heading::South),
            Some(Position::new(2, 1))
        );
    }
}
