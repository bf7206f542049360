//! Person names with prefix-first ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A full person name: last, first, and middle components.
///
/// Ordering compares the concatenated three-character prefixes of the
/// components first, then falls back to full component comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    last: String,
    first: String,
    middle: String,
}

fn prefix3(s: &str) -> String {
    s.chars().take(3).collect()
}

impl PersonName {
    /// Create a name from its three components.
    #[must_use]
    pub fn new(
        last: impl Into<String>,
        first: impl Into<String>,
        middle: impl Into<String>,
    ) -> Self {
        Self { last: last.into(), first: first.into(), middle: middle.into() }
    }

    /// The last name.
    #[must_use]
    pub fn last(&self) -> &str {
        &self.last
    }

    /// The first name.
    #[must_use]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The middle name.
    #[must_use]
    pub fn middle(&self) -> &str {
        &self.middle
    }
}

impl Ord for PersonName {
    fn cmp(&self, other: &Self) -> Ordering {
        let this_prefix =
            format!("{}{}{}", prefix3(&self.last), prefix3(&self.first), prefix3(&self.middle));
        let other_prefix = format!(
            "{}{}{}",
            prefix3(&other.last),
            prefix3(&other.first),
            prefix3(&other.middle)
        );

        this_prefix
            .cmp(&other_prefix)
            .then_with(|| self.first.cmp(&other.first))
            .then_with(|| self.last.cmp(&other.last))
            .then_with(|| self.middle.cmp(&other.middle))
    }
}

impl PartialOrd for PersonName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.last, self.first, self.middle)
    }
}

impl FromStr for PersonName {
    type Err = CoreError;

    /// Parse a whitespace-separated `"last first middle"` triple.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(last), Some(first), Some(middle)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(CoreError::Parse(format!("malformed person name: {s:?}")));
        };
        Ok(Self::new(last, first, middle))
    }
}
