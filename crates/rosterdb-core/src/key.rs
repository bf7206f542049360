//! Composite key derivation for the people index.
//!
//! A person is identified by full name plus birth date. The repository
//! layer takes the key function as a parameter so an embedding
//! application can swap the identity scheme without touching the
//! indexes.

use crate::types::{Date, PersonName};

/// Derives the index key for a person identity.
pub type KeyFn = fn(&PersonName, &Date) -> String;

/// The default composite key: `"last first middle DD mon YYYY"`.
#[must_use]
pub fn person_key(name: &PersonName, birth_date: &Date) -> String {
    format!("{name} {birth_date}")
}
