//! Domain layer for the folio backend.
//!
//! Pure logic shared by the database, generation, and API crates:
//! common ID/timestamp types, the domain error enum, slug derivation,
//! the closed icon catalogue, and site-settings section handling.
//! This crate performs no I/O.

pub mod error;
pub mod icons;
pub mod settings;
pub mod slug;
pub mod types;
