//! People repository: swap-delete array plus a hash index.

use rosterdb_core::{KeyFn, Person};
use rosterdb_store::{DynArray, HashTable};
use tracing::{debug, info};

use crate::error::Result;

/// People keyed by a composite identity (name plus birth date).
///
/// The hash index maps each key to the row id in the primary array.
/// After a swap-delete moves the tail row, only that one row's index
/// entry needs re-pointing; the integration tests pin this down with a
/// property test over interior deletions.
#[derive(Debug)]
pub struct PersonRepo {
    people: DynArray<Person>,
    index: HashTable<String, usize>,
    to_key: KeyFn,
}

impl PersonRepo {
    /// Bulk-load a repository from parsed rows.
    ///
    /// The hash index capacity defaults to twice the row count and is
    /// fixed from then on.
    ///
    /// # Errors
    ///
    /// Returns a store error when two rows share an identity key or
    /// the requested capacity cannot hold the rows.
    pub fn from_rows(rows: Vec<Person>, to_key: KeyFn, capacity: Option<usize>) -> Result<Self> {
        let capacity = capacity.unwrap_or(rows.len() * 2);
        let mut index = HashTable::with_capacity(capacity);

        for (id, person) in rows.iter().enumerate() {
            index.insert(to_key(person.name(), &person.birth_date()), id)?;
        }

        info!(rows = rows.len(), capacity = index.capacity(), "people repository loaded");
        Ok(Self { people: DynArray::from_rows(rows), index, to_key })
    }

    /// Add a person. Returns `Ok(false)` when a person with the same
    /// identity key already exists.
    ///
    /// # Errors
    ///
    /// Propagates a hash overflow when the fixed-capacity index is
    /// full.
    pub fn add(&mut self, person: &Person) -> Result<bool> {
        let key = (self.to_key)(person.name(), &person.birth_date());
        if self.index.search(&key, || {}).is_some() {
            return Ok(false);
        }

        self.index.insert(key, self.people.len())?;
        self.people.push(person.clone());
        debug!(person = %person, "person added");
        Ok(true)
    }

    /// Delete a person by full value.
    ///
    /// The index hit is verified against the stored row with full
    /// value equality, so a key collision cannot delete a different
    /// person. Returns `Ok(false)` on a key miss or a value mismatch.
    pub fn delete(&mut self, person: &Person) -> Result<bool> {
        let key = (self.to_key)(person.name(), &person.birth_date());

        let Some(&id) = self.index.search(&key, || {}) else {
            return Ok(false);
        };
        if self.people.get(id)? != person {
            return Ok(false);
        }

        self.index.delete_pair(&key, &id);
        let outcome = self.people.swap_delete(id)?;

        // Swap-delete only ever moves the tail row, so that is the one
        // row whose index entry went stale.
        if outcome.relocated.is_some() {
            let moved = self.people.get(id)?;
            let moved_key = (self.to_key)(moved.name(), &moved.birth_date());
            self.index.update(&moved_key, id, || {});
        }

        debug!(key = %key, "person deleted");
        Ok(true)
    }

    /// Look up a person by identity key. `steps` accumulates the probe
    /// count for diagnostics.
    pub fn search(&self, key: &str, steps: &mut usize) -> Option<&Person> {
        let key = key.to_owned();
        let id = *self.index.search(&key, || *steps += 1)?;
        self.people.get(id).ok()
    }

    /// The number of stored people.
    #[must_use]
    pub fn size(&self) -> usize {
        self.people.len()
    }

    /// The rows in row-id order, for an external writer to persist.
    #[must_use]
    pub fn rows(&self) -> &[Person] {
        self.people.as_slice()
    }

    /// Diagnostic dump of the hash index slots.
    #[must_use]
    pub fn render_index(&self, show_only_occupied: bool) -> String {
        self.index.render(show_only_occupied)
    }
}
