//! Driving-intent labels.
//!
//! The label set is closed and ordered: `Left < Keep < Right`. The order is
//! the row order of every per-class table in a fitted model and the
//! tie-break order of the arg-max decision rule.

use crate::error::{IntentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Short-term driving intent of a vehicle.
///
/// # Examples
///
/// ```
/// use lane_intent::Label;
///
/// let label: Label = "keep".parse().expect("known symbol");
/// assert_eq!(label, Label::Keep);
/// assert_eq!(label.index(), 1);
/// assert!("straight".parse::<Label>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Moving into the left lane.
    Left,
    /// Keeping the current lane.
    Keep,
    /// Moving into the right lane.
    Right,
}

impl Label {
    /// Number of labels.
    pub const COUNT: usize = 3;

    /// All labels in fixed index order.
    pub const ALL: [Label; Label::COUNT] = [Label::Left, Label::Keep, Label::Right];

    /// Table index of this label.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Label::Left => 0,
            Label::Keep => 1,
            Label::Right => 2,
        }
    }

    /// Label at a table index, `None` past the end.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical symbol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Label::Left => "left",
            Label::Keep => "keep",
            Label::Right => "right",
        }
    }

    /// Parses a sequence of symbols, rejecting the first unrecognized one.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::UnknownLabel`] carrying the offending symbol and
    /// its position.
    pub fn parse_all<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<Label>> {
        symbols
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let s = s.as_ref();
                Self::lookup(s).ok_or_else(|| IntentError::unknown_label(s, Some(i)))
            })
            .collect()
    }

    fn lookup(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|label| label.as_str() == symbol)
    }
}

impl FromStr for Label {
    type Err = IntentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::lookup(s).ok_or_else(|| IntentError::unknown_label(s, None))
    }
}

impl TryFrom<&str> for Label {
    type Error = IntentError;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
