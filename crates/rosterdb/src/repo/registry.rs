//! The composing repository: people plus events, kept referentially
//! consistent.

use rosterdb_core::{Date, Event, KeyFn, Person, PersonEvent};
use tracing::{debug, info};

use crate::error::{Error, Result};

use super::{EventRepo, PersonRepo};

/// Both collections behind one facade.
///
/// Construction validates that every event resolves to a person;
/// mutations keep that invariant: an event for an unknown person is
/// rejected, and a person with remaining events cannot be deleted
/// (dependents first, no cascade).
#[derive(Debug)]
pub struct Registry {
    people: PersonRepo,
    events: EventRepo,
    to_key: KeyFn,
}

impl Registry {
    /// Bulk-load both repositories and verify referential integrity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Integrity`] when any event key fails to
    /// resolve to a loaded person; the registry is not constructed.
    pub fn new(
        people: Vec<Person>,
        events: Vec<Event>,
        to_key: KeyFn,
        capacity: Option<usize>,
    ) -> Result<Self> {
        let people = PersonRepo::from_rows(people, to_key, capacity)?;
        let events = EventRepo::from_rows(events, to_key)?;

        info!("verifying referential integrity");
        let mut steps = 0;
        for key in events.keys() {
            if people.search(&key, &mut steps).is_none() {
                return Err(Error::Integrity { key });
            }
        }
        info!("referential integrity verified");

        Ok(Self { people, events, to_key })
    }

    /// Add a person. Returns `Ok(false)` when the identity key is
    /// already taken.
    pub fn add_person(&mut self, person: &Person) -> Result<bool> {
        self.people.add(person)
    }

    /// Delete a person by full value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonHasEvents`] while any event still
    /// references the person; dependents must be deleted first.
    pub fn delete_person(&mut self, person: &Person) -> Result<bool> {
        let key = (self.to_key)(person.name(), &person.birth_date());

        let mut steps = 0;
        if !self.events.search(&key, &mut steps)?.is_empty() {
            return Err(Error::PersonHasEvents { key });
        }

        let deleted = self.people.delete(person)?;
        debug!(key = %key, deleted, "person deletion finished");
        Ok(deleted)
    }

    /// Look up a person by identity key.
    pub fn search_person(&self, key: &str, steps: &mut usize) -> Option<&Person> {
        self.people.search(key, steps)
    }

    /// Add an event.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPerson`] when the referenced person
    /// does not exist.
    pub fn add_event(&mut self, event: Event) -> Result<bool> {
        let key = (self.to_key)(event.person_name(), &event.person_birth_date());

        let mut steps = 0;
        if self.people.search(&key, &mut steps).is_none() {
            return Err(Error::UnknownPerson { key });
        }

        self.events.add(event)
    }

    /// Delete an event by full value.
    pub fn delete_event(&mut self, event: &Event) -> Result<bool> {
        self.events.delete(event)
    }

    /// Delete every event recorded under one identity key. Returns how
    /// many were removed.
    pub fn delete_events(&mut self, key: &str) -> Result<usize> {
        let mut steps = 0;
        let rows = self.events.search(key, &mut steps)?;

        let mut deleted = 0;
        for event in &rows {
            if self.events.delete(event)? {
                deleted += 1;
            }
        }
        debug!(key = %key, deleted, "events deleted by key");
        Ok(deleted)
    }

    /// Every event under one identity key.
    pub fn search_events(&self, key: &str, steps: &mut usize) -> Result<Vec<Event>> {
        self.events.search(key, steps)
    }

    /// Filtered join: events dated within `start..=end`, filtered by
    /// owner birth date and subject, joined with the owning person.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an empty subject or a start
    /// date after the end date.
    pub fn get_filtered(
        &self,
        birth_date: Date,
        subject: &str,
        start: Date,
        end: Date,
        steps: &mut usize,
    ) -> Result<Vec<PersonEvent>> {
        if subject.is_empty() {
            return Err(Error::Validation("subject is empty".to_owned()));
        }
        if start > end {
            return Err(Error::Validation("period start is after its end".to_owned()));
        }

        let events = self.events.search_in_date_range(start, end, steps)?;

        let mut result = Vec::new();
        for event in &events {
            if event.person_birth_date() != birth_date {
                continue;
            }
            if event.subject() != subject {
                continue;
            }

            let key = (self.to_key)(event.person_name(), &event.person_birth_date());
            let Some(person) = self.people.search(&key, steps) else {
                continue;
            };
            result.push(PersonEvent::new(person, event));
        }

        debug!(rows = result.len(), subject, "filtered join assembled");
        Ok(result)
    }

    /// The number of stored people.
    #[must_use]
    pub fn people_count(&self) -> usize {
        self.people.size()
    }

    /// The people rows in row-id order, for an external writer.
    #[must_use]
    pub fn people(&self) -> &[Person] {
        self.people.rows()
    }

    /// The number of stored events.
    #[must_use]
    pub fn events_count(&self) -> usize {
        self.events.size()
    }

    /// The event rows in row-id order, for an external writer.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        self.events.rows()
    }

    /// Diagnostic dump of the event key tree.
    #[must_use]
    pub fn render_key_tree(&self) -> String {
        self.events.render_key_tree()
    }

    /// Diagnostic dump of the event date tree.
    #[must_use]
    pub fn render_date_tree(&self) -> String {
        self.events.render_date_tree()
    }

    /// Diagnostic dump of the people hash index.
    #[must_use]
    pub fn render_people_index(&self, show_only_occupied: bool) -> String {
        self.people.render_index(show_only_occupied)
    }
}
