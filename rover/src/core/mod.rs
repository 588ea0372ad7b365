//! Deterministic, pure rover logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod directive;
pub mod error;
pub mod grid;
pub mod heading;
pub mod parse;
pub mod rover;
