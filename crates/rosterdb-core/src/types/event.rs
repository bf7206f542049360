//! Event records: a scored subject entry for a person on a date.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

use super::{Date, PersonName};

/// An event record referencing a person by name and birth date.
///
/// Ordering is by person name, person birth date, subject, score, then
/// event date.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Event {
    person_name: PersonName,
    person_birth_date: Date,
    subject: String,
    score: i32,
    date: Date,
}

impl Event {
    /// Create an event record, validating the subject and score.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the subject is empty or the
    /// score is outside 1-5.
    pub fn new(
        person_name: PersonName,
        person_birth_date: Date,
        subject: impl Into<String>,
        score: i32,
        date: Date,
    ) -> CoreResult<Self> {
        let subject = subject.into();
        if subject.is_empty() {
            return Err(CoreError::Validation("subject is empty".to_owned()));
        }
        if !(1..=5).contains(&score) {
            return Err(CoreError::Validation(format!("score out of range: {score}")));
        }
        Ok(Self { person_name, person_birth_date, subject, score, date })
    }

    /// The referenced person's name.
    #[must_use]
    pub fn person_name(&self) -> &PersonName {
        &self.person_name
    }

    /// The referenced person's birth date.
    #[must_use]
    pub const fn person_birth_date(&self) -> Date {
        self.person_birth_date
    }

    /// The subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The score (1-5).
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// The event date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }
}

impl fmt::Display for Event {
    /// Tab-separated columns: person name, birth date, subject, score, date.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.person_name, self.person_birth_date, self.subject, self.score, self.date
        )
    }
}

impl FromStr for Event {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cols: Vec<&str> = s.split('\t').collect();
        let [name, birth_date, subject, score, date] = cols[..] else {
            return Err(CoreError::Parse(format!(
                "event record needs 5 columns, got {}",
                cols.len()
            )));
        };

        let score: i32 = score
            .trim()
            .parse()
            .map_err(|_| CoreError::Parse(format!("malformed score: {score:?}")))?;

        Self::new(name.parse()?, birth_date.parse()?, subject, score, date.parse()?)
    }
}
