//! Writes mission results to stdout and rover notices to stderr.

use std::io::{self, Write};

use crate::core::error::InputError;
use crate::core::rover::MoveOutcome;
use crate::io::config::OutputFormat;
use crate::mission::{MissionObserver, RoverReport};

/// Prefix every operator-facing diagnostic with the rover's voice.
pub fn rover_says(message: &str) -> String {
    format!("rover says \"{message}\"")
}

/// Format a fatal input error as a rover notice.
pub fn fatal_notice(err: &InputError) -> String {
    rover_says(&err.to_string())
}

/// [`MissionObserver`] that prints results as they arrive.
pub struct ReportWriter<O: Write, E: Write> {
    out: O,
    err: E,
    format: OutputFormat,
    quiet_notices: bool,
}

impl<O: Write, E: Write> ReportWriter<O, E> {
    pub fn new(out: O, err: E, format: OutputFormat, quiet_notices: bool) -> Self {
        Self {
            out,
            err,
            format,
            quiet_notices,
        }
    }

    /// Flush both channels and hand them back.
    pub fn finish(mut self) -> io::Result<(O, E)> {
        self.out.flush()?;
        self.err.flush()?;
        Ok((self.out, self.err))
    }
}

impl<O: Write, E: Write> MissionObserver for ReportWriter<O, E> {
    fn move_rejected(&mut self, _rover: usize, outcome: MoveOutcome) -> io::Result<()> {
        if self.quiet_notices {
            return Ok(());
        }
        match outcome.notice() {
            Some(notice) => writeln!(self.err, "{}", rover_says(notice)),
            None => Ok(()),
        }
    }

    fn rover_finished(&mut self, report: &RoverReport) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{report}"),
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, report)?;
                writeln!(self.out)
            }
        }
    }
}
