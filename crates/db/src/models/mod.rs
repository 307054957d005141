//! Row structs for the directory tables.

pub mod wiki_list;
