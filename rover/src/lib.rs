//! Rover mission simulator.
//!
//! Rovers land on a rectangular plateau and follow `L`/`R`/`M` directives.
//! Each rover is blocked by the rovers that finished before it. The crate
//! keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (headings, grid, rover state
//!   machine, line parsers). No I/O.
//! - **[`io`]**: Side-effecting operations (reading input and config,
//!   writing reports).
//!
//! [`mission`] coordinates the two to implement the CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod mission;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
