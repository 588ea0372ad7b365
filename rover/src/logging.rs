//! Development-time tracing for debugging missions.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Dev diagnostics via `RUST_LOG`, output to stderr.
//!   Not part of the rover product output.
//!
//! - **Rover notices (`io/report`)**: `rover says "..."` lines on stderr.
//!   Always written, unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `error` if unset so that rejected-move
/// warnings do not duplicate the rover notices.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=rover=debug cargo run -- run mission.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
