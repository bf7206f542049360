//! Denormalized person-event join rows.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Date, Event, Person, PersonName};

/// One row of a filtered join: the person's identity plus one event.
///
/// Ordering is by event date first, then the person fields, so a joined
/// report reads chronologically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonEvent {
    person_name: PersonName,
    group: i32,
    birth_date: Date,
    subject: String,
    score: i32,
    event_date: Date,
}

impl PersonEvent {
    /// Assemble a join row from its two sides.
    #[must_use]
    pub fn new(person: &Person, event: &Event) -> Self {
        Self {
            person_name: person.name().clone(),
            group: person.group(),
            birth_date: person.birth_date(),
            subject: event.subject().to_owned(),
            score: event.score(),
            event_date: event.date(),
        }
    }

    /// The person's full name.
    #[must_use]
    pub fn person_name(&self) -> &PersonName {
        &self.person_name
    }

    /// The person's study group.
    #[must_use]
    pub const fn group(&self) -> i32 {
        self.group
    }

    /// The person's birth date.
    #[must_use]
    pub const fn birth_date(&self) -> Date {
        self.birth_date
    }

    /// The event subject.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// The event score.
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    /// The event date.
    #[must_use]
    pub const fn event_date(&self) -> Date {
        self.event_date
    }
}

impl Ord for PersonEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.event_date
            .cmp(&other.event_date)
            .then_with(|| self.person_name.cmp(&other.person_name))
            .then_with(|| self.group.cmp(&other.group))
            .then_with(|| self.birth_date.cmp(&other.birth_date))
            .then_with(|| self.subject.cmp(&other.subject))
            .then_with(|| self.score.cmp(&other.score))
    }
}

impl PartialOrd for PersonEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PersonEvent {
    /// Tab-separated columns: name, group, birth date, subject, score, event date.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.person_name, self.group, self.birth_date, self.subject, self.score,
            self.event_date
        )
    }
}
