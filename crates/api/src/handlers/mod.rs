pub mod list_wikis;
