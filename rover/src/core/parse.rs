//! Line parsers for mission input.
//!
//! Parsers are pure: they take the raw line, its 1-based number, and whatever
//! context validation needs, and return typed records or an [`InputError`].

use crate::core::directive::{Directive, UnknownDirectivePolicy, parse_directives};
use crate::core::error::{BoundsFault, InputError, LandingFault};
use crate::core::grid::{Grid, Position};
use crate::core::heading::Heading;

/// Initial placement of a rover, already validated against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub position: Position,
    pub heading: Heading,
}

/// Parse `RIGHTMOST UPPERMOST`.
pub fn parse_bounds(line_no: usize, line: &str) -> Result<Grid, InputError> {
    bounds_from_tokens(line).map_err(|fault| InputError::InvalidBounds {
        line: line_no,
        content: line.trim_end().to_string(),
        fault,
    })
}

fn bounds_from_tokens(line: &str) -> Result<Grid, BoundsFault> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [right, upper] = tokens.as_slice() else {
        return Err(BoundsFault::TokenCount(tokens.len()));
    };
    let rightmost = parse_int(right).ok_or_else(|| BoundsFault::NotInteger(right.to_string()))?;
    let uppermost = parse_int(upper).ok_or_else(|| BoundsFault::NotInteger(upper.to_string()))?;
    Ok(Grid::new(rightmost, uppermost)?)
}

/// Parse `X Y HEADING` and check the landing cell lies inside `grid`.
pub fn parse_landing(line_no: usize, line: &str, grid: &Grid) -> Result<Landing, InputError> {
    landing_from_tokens(line, grid).map_err(|fault| InputError::InvalidLanding {
        line: line_no,
        content: line.trim_end().to_string(),
        fault,
    })
}

fn landing_from_tokens(line: &str, grid: &Grid) -> Result<Landing, LandingFault> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y, heading] = tokens.as_slice() else {
        return Err(LandingFault::TokenCount(tokens.len()));
    };
    let x = parse_int(x).ok_or_else(|| LandingFault::Coordinate(x.to_string()))?;
    let y = parse_int(y).ok_or_else(|| LandingFault::Coordinate(y.to_string()))?;
    let heading: Heading = heading.parse()?;
    let position = Position::new(x, y);
    if !grid.contains(position) {
        return Err(LandingFault::OutOfBounds {
            x,
            y,
            rightmost: grid.rightmost(),
            uppermost: grid.uppermost(),
        });
    }
    Ok(Landing { position, heading })
}

/// Parse a directive line under `policy`.
pub fn parse_directive_line(
    line_no: usize,
    line: &str,
    policy: UnknownDirectivePolicy,
) -> Result<Vec<Directive>, InputError> {
    parse_directives(line, policy).map_err(|unknown| InputError::InvalidDirective {
        line: line_no,
        content: line.trim_end().to_string(),
        symbol: unknown.symbol,
        column: unknown.column,
    })
}

fn parse_int(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}
