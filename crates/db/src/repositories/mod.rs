//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument.

pub mod wiki_list_repo;
pub mod wiki_setting_repo;

pub use wiki_list_repo::WikiListRepo;
pub use wiki_setting_repo::WikiSettingRepo;
