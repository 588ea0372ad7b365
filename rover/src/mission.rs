//! Mission driver: streams rover records from input text and runs each rover
//! against the rovers that finished before it.

use std::io;
use std::iter::Enumerate;
use std::str::Lines;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::directive::{Directive, UnknownDirectivePolicy};
use crate::core::error::{BoundsFault, InputError, LandingFault};
use crate::core::grid::Grid;
use crate::core::heading::Heading;
use crate::core::parse::{Landing, parse_bounds, parse_directive_line, parse_landing};
use crate::core::rover::{MoveOutcome, Rover};

/// One landing line plus the directive line that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoverRecord {
    /// 1-based rover number in landing order.
    pub rover: usize,
    /// 1-based input line of the landing.
    pub line: usize,
    pub landing: Landing,
    pub directives: Vec<Directive>,
}

/// Lazily parses mission input, one rover record at a time.
///
/// The bounds line is parsed eagerly by [`MissionReader::new`]. After the first
/// error the reader yields nothing further.
#[derive(Debug, Clone)]
pub struct MissionReader<'a> {
    lines: Enumerate<Lines<'a>>,
    grid: Grid,
    policy: UnknownDirectivePolicy,
    rovers: usize,
    failed: bool,
}

impl<'a> MissionReader<'a> {
    pub fn new(input: &'a str, policy: UnknownDirectivePolicy) -> Result<Self, InputError> {
        let mut lines = input.lines().enumerate();
        let grid = match lines.next() {
            Some((idx, line)) => parse_bounds(idx + 1, line)?,
            None => {
                return Err(InputError::InvalidBounds {
                    line: 1,
                    content: String::new(),
                    fault: BoundsFault::Missing,
                });
            }
        };
        Ok(Self {
            lines,
            grid,
            policy,
            rovers: 0,
            failed: false,
        })
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    fn only_blank_lines_remain(&self) -> bool {
        self.lines.clone().all(|(_, line)| line.trim().is_empty())
    }

    fn read_record(&mut self, idx: usize, line: &str) -> Result<RoverRecord, InputError> {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            return Err(InputError::InvalidLanding {
                line: line_no,
                content: line.to_string(),
                fault: LandingFault::TokenCount(0),
            });
        }
        let landing = parse_landing(line_no, line, &self.grid)?;
        let directives = match self.lines.next() {
            Some((idx, line)) => parse_directive_line(idx + 1, line, self.policy)?,
            None => Vec::new(),
        };
        self.rovers += 1;
        Ok(RoverRecord {
            rover: self.rovers,
            line: line_no,
            landing,
            directives,
        })
    }
}

impl Iterator for MissionReader<'_> {
    type Item = Result<RoverRecord, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.only_blank_lines_remain() {
            return None;
        }
        let (idx, line) = self.lines.next()?;
        let record = self.read_record(idx, line);
        self.failed = record.is_err();
        Some(record)
    }
}

/// Final state of one rover, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoverReport {
    pub rover: usize,
    pub x: i64,
    pub y: i64,
    pub heading: Heading,
}

impl RoverReport {
    fn from_rover(rover: usize, state: &Rover<'_>) -> Self {
        let position = state.position();
        Self {
            rover,
            x: position.x,
            y: position.y,
            heading: state.heading(),
        }
    }
}

impl std::fmt::Display for RoverReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.heading)
    }
}

/// Receives mission events as they happen.
///
/// Results are delivered per rover, so output for earlier rovers is already
/// out by the time a later line fails to parse.
pub trait MissionObserver {
    fn rover_landed(&mut self, _record: &RoverRecord) -> io::Result<()> {
        Ok(())
    }

    /// A move directive was refused; the rover stayed where it was.
    fn move_rejected(&mut self, rover: usize, outcome: MoveOutcome) -> io::Result<()>;

    fn rover_finished(&mut self, report: &RoverReport) -> io::Result<()>;
}

/// Counters collected over a whole mission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MissionSummary {
    pub rovers: usize,
    pub moves: usize,
    pub off_grid: usize,
    pub blocked: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("write mission report: {0}")]
    Report(#[from] io::Error),
}

/// Run every rover in `input` in landing order.
///
/// Each rover's moves are checked against the rovers that finished before it.
/// A rover is only added to that obstacle set after its last directive.
pub fn run_mission(
    input: &str,
    policy: UnknownDirectivePolicy,
    observer: &mut dyn MissionObserver,
) -> Result<MissionSummary, MissionError> {
    let reader = MissionReader::new(input, policy)?;
    let grid = reader.grid();
    info!(
        rightmost = grid.rightmost(),
        uppermost = grid.uppermost(),
        "mission started"
    );

    let mut landed: Vec<Rover<'_>> = Vec::new();
    let mut summary = MissionSummary::default();
    for record in reader {
        let record =
            record.inspect_err(|err| warn!(line = err.line(), "mission input rejected"))?;
        debug!(
            rover = record.rover,
            line = record.line,
            x = record.landing.position.x,
            y = record.landing.position.y,
            heading = %record.landing.heading,
            "rover landed"
        );
        observer.rover_landed(&record)?;

        let mut rover = Rover::new(record.landing.position, record.landing.heading, &grid);
        for &directive in &record.directives {
            let Some(outcome) = rover.apply(directive, &landed) else {
                continue;
            };
            match outcome {
                MoveOutcome::Moved(_) => summary.moves += 1,
                MoveOutcome::OffGrid(target) => {
                    summary.off_grid += 1;
                    warn!(rover = record.rover, x = target.x, y = target.y, "move off grid");
                }
                MoveOutcome::Blocked(target) => {
                    summary.blocked += 1;
                    warn!(rover = record.rover, x = target.x, y = target.y, "move blocked");
                }
            }
            if outcome.is_rejected() {
                observer.move_rejected(record.rover, outcome)?;
            }
        }

        let report = RoverReport::from_rover(record.rover, &rover);
        debug!(rover = report.rover, final_state = %report, "rover finished");
        observer.rover_finished(&report)?;
        landed.push(rover);
        summary.rovers += 1;
    }

    info!(
        rovers = summary.rovers,
        moves = summary.moves,
        off_grid = summary.off_grid,
        blocked = summary.blocked,
        "mission finished"
    );
    Ok(summary)
}

/// Parse the whole input without simulating it. Returns the rover count.
pub fn check_mission(input: &str, policy: UnknownDirectivePolicy) -> Result<usize, InputError> {
    let reader = MissionReader::new(input, policy)?;
    let mut rovers = 0;
    for record in reader {
        record?;
        rovers += 1;
    }
    debug!(rovers, "mission input checked");
    Ok(rovers)
}
