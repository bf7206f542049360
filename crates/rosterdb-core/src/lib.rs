//! RosterDB Core
//!
//! This crate provides the domain value types shared by the RosterDB
//! repository layer: calendar dates, person names, person and event
//! records, and the denormalized join row.
//!
//! # Modules
//!
//! - [`types`] - Domain value types (Date, PersonName, Person, Event, PersonEvent)
//! - [`key`] - Composite key derivation for the people index
//! - [`error`] - Error types

pub mod error;
pub mod key;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, CoreResult};
pub use key::{person_key, KeyFn};
pub use types::{Date, Event, Month, Person, PersonEvent, PersonName};
