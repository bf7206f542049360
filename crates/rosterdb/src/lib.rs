//! RosterDB - a dual-index in-memory records manager.
//!
//! RosterDB keeps two related collections consistent across three
//! storage structures: a swap-delete array as the primary row store,
//! an open-addressing hash index over people, and a pair of AVL
//! indexes over events (by owner key and by date).
//!
//! # Modules
//!
//! - [`repo`] - The repository layer (PersonRepo, EventRepo, Registry)
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```
//! use rosterdb::{person_key, Date, Event, Month, Person, PersonName, Registry};
//!
//! # fn main() -> Result<(), rosterdb::Error> {
//! let person = Person::new(
//!     PersonName::new("Ivanov", "Ivan", "Ivanovich"),
//!     7,
//!     Date::new(1, Month::Jan, 2010)?,
//! )?;
//! let event = Event::new(
//!     person.name().clone(),
//!     person.birth_date(),
//!     "Math",
//!     5,
//!     Date::new(15, Month::Jan, 2020)?,
//! )?;
//!
//! let registry = Registry::new(vec![person], vec![event], person_key, None)?;
//!
//! let mut steps = 0;
//! let found = registry.search_person("Ivanov Ivan Ivanovich 01 jan 2010", &mut steps);
//! assert!(found.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! Queries return entity values, never raw row ids; ids stay an
//! internal detail of the index bookkeeping.

pub mod error;
pub mod repo;

pub use error::{Error, Result};
pub use repo::{EventRepo, PersonRepo, Registry};

// Re-export the domain types so most callers need only this crate.
pub use rosterdb_core::{
    person_key, Date, Event, KeyFn, Month, Person, PersonEvent, PersonName,
};
