//! I/O helpers for rover commands.

pub mod config;
pub mod input;
pub mod report;
