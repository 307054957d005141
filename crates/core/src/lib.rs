//! Domain layer for the wiki farm directory service.
//!
//! Zero internal dependencies: request normalization, language validation,
//! caller groups, and the listing engine live here so the database and HTTP
//! crates can share them.

pub mod caller;
pub mod directory;
pub mod error;
pub mod language;
pub mod listing;
pub mod query;
pub mod timestamp;
pub mod types;
pub mod wiki;
