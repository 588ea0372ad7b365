//! Single-character rover directives.

use serde::{Deserialize, Serialize};

/// One step of a rover's directive line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Spin 90 degrees left (`L`).
    Left,
    /// Spin 90 degrees right (`R`).
    Right,
    /// Move forward one cell (`M`).
    Move,
}

impl Directive {
    pub fn from_char(symbol: char) -> Option<Directive> {
        match symbol.to_ascii_uppercase() {
            'L' => Some(Directive::Left),
            'R' => Some(Directive::Right),
            'M' => Some(Directive::Move),
            _ => None,
        }
    }
}

/// How a directive line treats characters outside `L`, `R`, `M`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownDirectivePolicy {
    /// Fail the line.
    Reject,
    /// Skip the character.
    #[default]
    Ignore,
}

/// A character that is not a directive, with its 1-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownSymbol {
    pub symbol: char,
    pub column: usize,
}

/// Parse a directive line. Leading/trailing whitespace is not significant;
/// an empty line yields no directives.
pub fn parse_directives(
    line: &str,
    policy: UnknownDirectivePolicy,
) -> Result<Vec<Directive>, UnknownSymbol> {
    let leading = line.len() - line.trim_start().len();
    let mut directives = Vec::with_capacity(line.len());
    for (idx, symbol) in line.trim().chars().enumerate() {
        match Directive::from_char(symbol) {
            Some(directive) => directives.push(directive),
            None if policy == UnknownDirectivePolicy::Ignore => {
                tracing::debug!(%symbol, "skipping unknown directive");
            }
            None => {
                return Err(UnknownSymbol {
                    symbol,
                    column: leading + idx + 1,
                });
            }
        }
    }
    Ok(directives)
}
