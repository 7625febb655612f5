//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. There is no locking; concurrent writers are last-write-wins.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{load_json, write_json_atomic, JsonFile};
