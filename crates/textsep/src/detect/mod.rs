//! # Content Detection
//!
//! Turns a pasted blob into an ordered list of [`ContentItem`]s. Two
//! strategies exist and the caller always picks one explicitly; they are
//! never mixed within a single call.
//!
//! ## Pattern strategy
//!
//! Line oriented. Each trimmed line is tested against, in this order:
//!
//! | Pattern | Label |
//! |---|---|
//! | `1. text` | `Numbered Item (1)` |
//! | `a. text` | `Lettered Item (a)` |
//! | `- text`, `* text`, `• text` | `Bullet Point` |
//! | `iv. text` | `Roman Numeral (iv)` |
//! | `Step 3: text` | `Step 3` |
//!
//! The first match wins, so a single-letter numeral such as `i.` is always
//! lettered. A line that matches nothing extends the item in progress
//! (wrapped text), or is dropped when nothing is in progress. A blank line
//! closes the item in progress.
//!
//! ## Delimiter strategy
//!
//! Splits on the literal `<_>` token when present, otherwise on the custom
//! separator when it is present, otherwise returns the whole text as one
//! `Single Content` item. Blank fragments are dropped.

use crate::model::ContentItem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod delimiter;
mod pattern;

pub use delimiter::{detect_delimited, DEFAULT_SEPARATOR};
pub use pattern::detect_patterns;

/// Which detector [`detect`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Pattern,
    Delimiter,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Pattern => f.write_str("pattern"),
            Strategy::Delimiter => f.write_str("delimiter"),
        }
    }
}

impl FromStr for Strategy {
    type Err = crate::error::TextsepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pattern" | "patterns" => Ok(Strategy::Pattern),
            "delimiter" | "delimited" => Ok(Strategy::Delimiter),
            other => Err(crate::error::TextsepError::Api(format!(
                "Unknown detection strategy: {}",
                other
            ))),
        }
    }
}

/// Splits `text` with the selected strategy.
///
/// `custom_separator` only matters for [`Strategy::Delimiter`].
pub fn detect(text: &str, custom_separator: &str, strategy: Strategy) -> Vec<ContentItem> {
    let items = match strategy {
        Strategy::Pattern => detect_patterns(text),
        Strategy::Delimiter => detect_delimited(text, custom_separator),
    };
    tracing::debug!(%strategy, count = items.len(), "detected items");
    items
}
