//! Directory scanning

pub mod file_finder;

pub use file_finder::{find, find_with_progress};
