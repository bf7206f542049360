//! Person records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

use super::{Date, PersonName};

/// A person record: full name, study group, and birth date.
///
/// Ordering is by name, then group, then birth date.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Person {
    name: PersonName,
    group: i32,
    birth_date: Date,
}

impl Person {
    /// Create a person record, validating the group number.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the group is outside 1-11.
    pub fn new(name: PersonName, group: i32, birth_date: Date) -> CoreResult<Self> {
        if !(1..=11).contains(&group) {
            return Err(CoreError::Validation(format!("group out of range: {group}")));
        }
        Ok(Self { name, group, birth_date })
    }

    /// The person's full name.
    #[must_use]
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// The study group (1-11).
    #[must_use]
    pub const fn group(&self) -> i32 {
        self.group
    }

    /// The birth date.
    #[must_use]
    pub const fn birth_date(&self) -> Date {
        self.birth_date
    }
}

impl fmt::Display for Person {
    /// Tab-separated columns: name, group, birth date.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.name, self.group, self.birth_date)
    }
}

impl FromStr for Person {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cols: Vec<&str> = s.split('\t').collect();
        let [name, group, birth_date] = cols[..] else {
            return Err(CoreError::Parse(format!(
                "person record needs 3 columns, got {}",
                cols.len()
            )));
        };

        let group: i32 = group
            .trim()
            .parse()
            .map_err(|_| CoreError::Parse(format!("malformed group: {group:?}")))?;

        Self::new(name.parse()?, group, birth_date.parse()?)
    }
}
