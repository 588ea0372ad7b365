//! Optional mission configuration (TOML), overridable from the command line.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::directive::UnknownDirectivePolicy;

/// Shape of the per-rover result lines on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `X Y HEADING`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Mission configuration.
///
/// Every field is optional in the file; missing fields take the defaults
/// below, which reproduce the plain `X Y HEADING` behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct MissionConfig {
    pub format: OutputFormat,

    /// Treatment of characters other than `L`, `R`, `M` on directive lines.
    pub unknown_directives: UnknownDirectivePolicy,

    /// Suppress `rover says` notices for rejected moves. Fatal errors are
    /// always reported.
    pub quiet_notices: bool,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub format: Option<OutputFormat>,
    pub strict: bool,
    pub quiet: bool,
}

impl MissionConfig {
    pub fn apply(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if overrides.strict {
            self.unknown_directives = UnknownDirectivePolicy::Reject;
        }
        if overrides.quiet {
            self.quiet_notices = true;
        }
        self
    }
}

/// Load config from a TOML file, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<MissionConfig> {
    let Some(path) = path else {
        return Ok(MissionConfig::default());
    };
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: MissionConfig =
        toml::from_str(&contents).with_context(|| format!("parse config {}", path.display()))?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_returns_default() {
        assert_eq!(load_config(None).expect("load"), MissionConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rover.toml");
        fs::write(&path, "format = \"json\"\n").expect("write");
        let cfg = load_config(Some(&path)).expect("load");
        assert_eq!(cfg.format, OutputFormat::Json);
        assert_eq!(cfg.unknown_directives, UnknownDirectivePolicy::Ignore);
        assert!(!cfg.quiet_notices);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rover.toml");
        fs::write(&path, "fromat = \"json\"\n").expect("write");
        let err = load_config(Some(&path)).expect_err("typo");
        assert!(format!("{err:#}").contains("parse config"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_config(Some(&temp.path().join("missing.toml"))).expect_err("missing");
        assert!(err.to_string().contains("read config"));
    }

    #[test]
    fn overrides_take_precedence() {
        let cfg = MissionConfig {
            format: OutputFormat::Json,
            unknown_directives: UnknownDirectivePolicy::Ignore,
            quiet_notices: false,
        }
        .apply(&ConfigOverrides {
            format: Some(OutputFormat::Text),
            strict: true,
            quiet: false,
        });
        assert_eq!(cfg.format, OutputFormat::Text);
        assert_eq!(cfg.unknown_directives, UnknownDirectivePolicy::Reject);
        assert!(!cfg.quiet_notices);
    }

    #[test]
    fn strict_key_in_file_rejects_unknown_directives() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rover.toml");
        fs::write(&path, "unknown_directives = \"reject\"\n").expect("write");
        let cfg = load_config(Some(&path)).expect("load");
        assert_eq!(cfg.unknown_directives, UnknownDirectivePolicy::Reject);
    }
}
