//! Fixed-capacity open-addressing hash index with tombstone deletion.
//!
//! Capacity is chosen at construction and never changes; running out
//! of slots is a hard [`StoreError::TableOverflow`], not a resize
//! trigger. Callers size the table generously up front (the repository
//! layer doubles the expected row count).
//!
//! The probe sequence is `(primary + attempt) % capacity` — double
//! hashing with a constant secondary step, which degenerates to linear
//! probing. Kept as-is so probe order stays compatible; see
//! [`TableKey`] for the string hash sharing the same trade-off.

mod key;
mod slot;

use std::fmt;
use std::fmt::Write as _;

use crate::error::{StoreError, StoreResult};

pub use key::TableKey;
pub use slot::Slot;

/// An open-addressing hash table mapping each key to a single value.
#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    slots: Vec<Slot<K, V>>,
    len: usize,
}

impl<K: TableKey, V> HashTable<K, V> {
    /// Create a table with a fixed capacity.
    ///
    /// A requested capacity of 3 or less falls back to 16.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity > 3 { capacity } else { 16 };
        Self { slots: (0..capacity).map(|_| Slot::Empty).collect(), len: 0 }
    }

    /// The number of live entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no live entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The fixed capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn primary_index(&self, key: &K) -> usize {
        (key.raw_hash() % self.slots.len() as u64) as usize
    }

    fn secondary_index(&self, primary: usize, attempt: usize) -> usize {
        (primary + attempt) % self.slots.len()
    }

    /// Locate the slot for a new entry: the primary slot when empty,
    /// otherwise the first tombstone seen while probing, otherwise the
    /// first empty slot.
    fn prepare_insert(&self, key: &K) -> StoreResult<usize>
    where
        K: fmt::Display,
    {
        let primary = self.primary_index(key);
        if self.slots[primary].is_empty() {
            return Ok(primary);
        }

        let capacity = self.slots.len();
        let mut attempt = 1;
        let mut current = primary;
        let mut tombstone = None;

        while attempt < capacity && !self.slots[current].is_empty() {
            if self.slots[current].is_deleted() && tombstone.is_none() {
                tombstone = Some(current);
            }
            if let Slot::Occupied(existing, _) = &self.slots[current] {
                if existing == key {
                    return Err(StoreError::DuplicateKey { key: key.to_string() });
                }
            }
            current = self.secondary_index(primary, attempt);
            attempt += 1;
        }

        if attempt == capacity {
            return tombstone.ok_or(StoreError::TableOverflow { capacity });
        }
        Ok(tombstone.unwrap_or(current))
    }

    /// Insert a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TableOverflow`] when the table is full or
    /// probing exhausts every slot, and [`StoreError::DuplicateKey`]
    /// when an equal key is met during the probe.
    pub fn insert(&mut self, key: K, value: V) -> StoreResult<()>
    where
        K: fmt::Display,
    {
        if self.len >= self.slots.len() {
            return Err(StoreError::TableOverflow { capacity: self.slots.len() });
        }

        let index = self.prepare_insert(&key)?;
        self.slots[index] = Slot::Occupied(key, value);
        self.len += 1;
        Ok(())
    }

    /// Probe for `key`; `visit` fires once per probed slot.
    fn find(&self, key: &K, mut visit: impl FnMut()) -> Option<usize> {
        let primary = self.primary_index(key);
        visit();

        if let Slot::Occupied(existing, _) = &self.slots[primary] {
            if existing == key {
                return Some(primary);
            }
        }

        let capacity = self.slots.len();
        let mut attempt = 1;
        let mut current = self.secondary_index(primary, attempt);

        while attempt < capacity {
            visit();
            match &self.slots[current] {
                Slot::Empty => return None,
                Slot::Occupied(existing, _) if existing == key => return Some(current),
                _ => {}
            }
            attempt += 1;
            current = self.secondary_index(primary, attempt);
        }

        None
    }

    /// Probe for the entry matching both `key` and `value`; used to
    /// disambiguate when an index entry may have gone stale.
    fn find_pair(&self, key: &K, value: &V, mut visit: impl FnMut()) -> Option<usize>
    where
        V: PartialEq,
    {
        let primary = self.primary_index(key);
        visit();

        if let Slot::Occupied(existing_key, existing_val) = &self.slots[primary] {
            if existing_key == key && existing_val == value {
                return Some(primary);
            }
        }

        let capacity = self.slots.len();
        let mut attempt = 0;
        let mut current = primary;

        while attempt < capacity {
            visit();
            match &self.slots[current] {
                Slot::Empty => return None,
                Slot::Occupied(existing_key, existing_val)
                    if existing_key == key && existing_val == value =>
                {
                    return Some(current);
                }
                _ => {}
            }
            attempt += 1;
            current = self.secondary_index(primary, attempt);
        }

        None
    }

    /// The value stored under `key`, if any.
    pub fn search(&self, key: &K, visit: impl FnMut()) -> Option<&V> {
        if self.len == 0 {
            return None;
        }
        let index = self.find(key, visit)?;
        match &self.slots[index] {
            Slot::Occupied(_, value) => Some(value),
            _ => None,
        }
    }

    /// The entry matching both `key` and `value`, if any.
    pub fn search_pair(&self, key: &K, value: &V, visit: impl FnMut()) -> Option<&V>
    where
        V: PartialEq,
    {
        let index = self.find_pair(key, value, visit)?;
        match &self.slots[index] {
            Slot::Occupied(_, stored) => Some(stored),
            _ => None,
        }
    }

    /// Overwrite the value under `key` in place. Slot status and probe
    /// reachability are unchanged. A miss is a no-op.
    pub fn update(&mut self, key: &K, value: V, visit: impl FnMut()) {
        if let Some(index) = self.find(key, visit) {
            if let Slot::Occupied(_, stored) = &mut self.slots[index] {
                *stored = value;
            }
        }
    }

    /// Tombstone the entry under `key`, returning its value.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let index = self.find(key, || {})?;
        self.take_slot(index)
    }

    /// Tombstone the entry matching both `key` and `value`.
    pub fn delete_pair(&mut self, key: &K, value: &V) -> Option<V>
    where
        V: PartialEq,
    {
        let index = self.find_pair(key, value, || {})?;
        self.take_slot(index)
    }

    fn take_slot(&mut self, index: usize) -> Option<V> {
        match std::mem::replace(&mut self.slots[index], Slot::Deleted) {
            Slot::Occupied(_, value) => {
                self.len -= 1;
                Some(value)
            }
            other => {
                self.slots[index] = other;
                None
            }
        }
    }

    /// Iterate over live entries in physical slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(key, value) => Some((key, value)),
            _ => None,
        })
    }
}

impl<K: TableKey + fmt::Display, V: fmt::Display> HashTable<K, V> {
    /// Diagnostic slot dump: `index key - value` per line. With
    /// `show_only_occupied` unset, empty and tombstoned slots are
    /// listed too.
    #[must_use]
    pub fn render(&self, show_only_occupied: bool) -> String {
        let mut out = String::new();
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Slot::Occupied(key, value) => {
                    let _ = writeln!(out, "{i} {key} - {value}");
                }
                Slot::Empty if !show_only_occupied => {
                    let _ = writeln!(out, "{i} empty - empty");
                }
                Slot::Deleted if !show_only_occupied => {
                    let _ = writeln!(out, "{i} deleted - deleted");
                }
                _ => {}
            }
        }
        out
    }
}
