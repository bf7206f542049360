//! Events repository: swap-delete array plus two AVL indexes.

use rosterdb_core::{Date, Event, KeyFn};
use rosterdb_store::{AvlTree, DynArray};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Events indexed twice over the same row set: by owner composite key
/// (all events for one person) and by event date (range filtering).
///
/// Both trees are populated in lockstep with the array and re-pointed
/// together after every swap-delete.
#[derive(Debug)]
pub struct EventRepo {
    events: DynArray<Event>,
    key_tree: AvlTree<String>,
    date_tree: AvlTree<Date>,
    to_key: KeyFn,
}

impl EventRepo {
    /// Bulk-load a repository from parsed rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when two loaded rows are exact
    /// duplicates sharing a key.
    pub fn from_rows(rows: Vec<Event>, to_key: KeyFn) -> Result<Self> {
        let mut events = DynArray::new();
        let mut key_tree = AvlTree::new();
        let mut date_tree = AvlTree::new();

        for event in rows {
            let key = to_key(event.person_name(), &event.person_birth_date());
            for id in key_tree.ids(&key, || {}) {
                if events.get(id)? == &event {
                    return Err(Error::Validation(format!("duplicate event: {event}")));
                }
            }

            let id = events.len();
            let date = event.date();
            events.push(event);
            key_tree.insert(key, id);
            date_tree.insert(date, id);
        }

        info!(rows = events.len(), "events repository loaded");
        Ok(Self { events, key_tree, date_tree, to_key })
    }

    /// Add an event. Returns `Ok(false)` when an exact duplicate
    /// already sits in the key bucket.
    pub fn add(&mut self, event: Event) -> Result<bool> {
        let key = (self.to_key)(event.person_name(), &event.person_birth_date());
        for id in self.key_tree.ids(&key, || {}) {
            if self.events.get(id)? == &event {
                return Ok(false);
            }
        }

        let id = self.events.len();
        let date = event.date();
        debug!(event = %event, id, "event added");
        self.events.push(event);
        self.key_tree.insert(key, id);
        self.date_tree.insert(date, id);
        Ok(true)
    }

    /// Delete the first stored event equal to `event`.
    ///
    /// Removes the id from both trees, re-points both trees for the
    /// row that a swap-delete moves into the hole, then shrinks the
    /// array. Returns `Ok(false)` when no stored row matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when no event at all is recorded
    /// under the key.
    pub fn delete(&mut self, event: &Event) -> Result<bool> {
        if self.events.is_empty() {
            return Ok(false);
        }

        let key = (self.to_key)(event.person_name(), &event.person_birth_date());
        let ids = self.key_tree.ids(&key, || {});
        if ids.is_empty() {
            return Err(Error::Validation(format!("no events recorded under key: {key}")));
        }

        let mut found = None;
        for id in ids {
            if self.events.get(id)? == event {
                found = Some(id);
                break;
            }
        }
        let Some(id) = found else {
            return Ok(false);
        };

        let date = self.events.get(id)?.date();
        self.date_tree.remove(&date, id);
        self.key_tree.remove(&key, id);

        // The tail row is about to move into the freed slot; re-point
        // its entries in both trees before the array shifts.
        let last = self.events.len() - 1;
        if id != last {
            let moved = self.events.get(last)?;
            let moved_key = (self.to_key)(moved.person_name(), &moved.person_birth_date());
            let moved_date = moved.date();
            self.key_tree.replace_id(&moved_key, last, id);
            self.date_tree.replace_id(&moved_date, last, id);
        }

        self.events.swap_delete(id)?;
        debug!(key = %key, id, "event deleted");
        Ok(true)
    }

    /// Every event under one identity key. `steps` accumulates the
    /// tree-search step count.
    pub fn search(&self, key: &str, steps: &mut usize) -> Result<Vec<Event>> {
        let key = key.to_owned();
        let Some(ids) = self.key_tree.search(&key, || *steps += 1) else {
            return Ok(Vec::new());
        };

        let mut rows = Vec::with_capacity(ids.len());
        for id in ids.iter() {
            rows.push(self.events.get(id)?.clone());
        }
        Ok(rows)
    }

    /// Every event dated within `low..=high`, in date order. `steps`
    /// counts the qualifying tree nodes visited.
    pub fn search_in_date_range(
        &self,
        low: Date,
        high: Date,
        steps: &mut usize,
    ) -> Result<Vec<Event>> {
        let mut ids = Vec::new();
        self.date_tree.range_search(&low, &high, |bucket| {
            *steps += 1;
            ids.extend(bucket.iter());
        });

        let mut rows = Vec::with_capacity(ids.len());
        for id in ids {
            rows.push(self.events.get(id)?.clone());
        }
        Ok(rows)
    }

    /// Every distinct identity key present, in ascending order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.key_tree.keys_in_order()
    }

    /// The number of stored events.
    #[must_use]
    pub fn size(&self) -> usize {
        self.events.len()
    }

    /// The rows in row-id order, for an external writer to persist.
    #[must_use]
    pub fn rows(&self) -> &[Event] {
        self.events.as_slice()
    }

    /// Diagnostic dump of the key tree.
    #[must_use]
    pub fn render_key_tree(&self) -> String {
        self.key_tree.render()
    }

    /// Diagnostic dump of the date tree.
    #[must_use]
    pub fn render_date_tree(&self) -> String {
        self.date_tree.render()
    }
}
