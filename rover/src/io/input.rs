//! Mission input loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read the whole mission file as UTF-8 text.
///
/// Undecodable bytes surface as a [`std::string::FromUtf8Error`] in the error
/// chain, separate from read failures.
pub fn load_input(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "loading mission input");
    let bytes = fs::read(path).with_context(|| format!("read input {}", path.display()))?;
    let contents = String::from_utf8(bytes)
        .with_context(|| format!("input {} is not valid UTF-8", path.display()))?;
    debug!(bytes = contents.len(), lines = contents.lines().count(), "mission input loaded");
    Ok(contents)
}
