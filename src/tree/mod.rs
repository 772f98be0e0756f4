//! Tree module - In-memory file system tree and its hierarchy dump

pub mod entry;
pub mod hierarchy;

pub use entry::{Directory, Entry, File};
pub use hierarchy::{log_hierarchy, write_hierarchy, Hierarchy, HierarchyLine};
