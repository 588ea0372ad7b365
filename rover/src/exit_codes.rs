//! Stable exit codes for rover CLI commands.

/// Mission ran (or input checked) to the end.
pub const OK: i32 = 0;
/// Mission input was malformed or not UTF-8; the run stopped at the offending line.
pub const INVALID_INPUT: i32 = 1;
/// Input or config could not be read, or output could not be written.
pub const IO: i32 = 2;
