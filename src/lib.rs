//! MenuNav - Browse a folder hierarchy and open files from a menu
//!
//! This crate provides the file system tree behind the menu, the scanner
//! that builds it, icon attachment, and the headless rule list items.

pub mod app;
pub mod error;
pub mod icons;
pub mod output;
pub mod rule;
pub mod scan;
pub mod tree;

pub use error::{MenuNavError, Result};
