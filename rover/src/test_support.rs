//! Test-only helpers: report fixtures, a recording observer, and temp input files.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::heading::Heading;
use crate::core::rover::MoveOutcome;
use crate::mission::{MissionObserver, RoverRecord, RoverReport};

/// Input for the two-rover scenario on a 5x5 grid.
pub const TWO_ROVER_MISSION: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n";

/// Build the expected report for rover number `rover`.
pub fn report(rover: usize, x: i64, y: i64, heading: Heading) -> RoverReport {
    RoverReport {
        rover,
        x,
        y,
        heading,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissionEvent {
    Landed { rover: usize, line: usize },
    Rejected { rover: usize, outcome: MoveOutcome },
    Finished(RoverReport),
}

/// Observer that keeps every event in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<MissionEvent>,
}

impl RecordingObserver {
    pub fn reports(&self) -> Vec<RoverReport> {
        self.events
            .iter()
            .filter_map(|event| match event {
                MissionEvent::Finished(report) => Some(*report),
                _ => None,
            })
            .collect()
    }
}

impl MissionObserver for RecordingObserver {
    fn rover_landed(&mut self, record: &RoverRecord) -> io::Result<()> {
        self.events.push(MissionEvent::Landed {
            rover: record.rover,
            line: record.line,
        });
        Ok(())
    }

    fn move_rejected(&mut self, rover: usize, outcome: MoveOutcome) -> io::Result<()> {
        self.events.push(MissionEvent::Rejected { rover, outcome });
        Ok(())
    }

    fn rover_finished(&mut self, report: &RoverReport) -> io::Result<()> {
        self.events.push(MissionEvent::Finished(*report));
        Ok(())
    }
}

/// A mission input written to a temporary directory.
pub struct InputFile {
    dir: tempfile::TempDir,
    path: PathBuf,
}

impl InputFile {
    pub fn new(contents: &str) -> Result<Self> {
        Self::named("mission.txt", contents)
    }

    pub fn named(name: &str, contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let path = dir.path().join(name);
        std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(Self { dir, path })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Write a sibling file in the same temporary directory.
    pub fn sibling(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }
}
