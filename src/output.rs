//! Non-interactive output of a scanned tree
//!
//! Writes the tree to stdout (or any writer) as a hierarchy dump, as JSON,
//! or as a flat list of file paths.

use std::io::{self, Write};
use std::str::FromStr;

use serde_json::{json, Value};

use crate::error::Result;
use crate::tree::{write_hierarchy, Directory, Entry, File};

/// Exit codes for the application
///
/// These codes are stable and can be relied upon for scripting:
/// - `SUCCESS` (0): Tree written
/// - `ERROR` (2): Runtime error (unreadable root, I/O error, etc.)
/// - `INVALID` (3): Invalid command-line arguments or option values
pub mod exit_code {
    /// Normal exit
    pub const SUCCESS: i32 = 0;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag, invalid format)
    pub const INVALID: i32 = 3;
}

/// Output format for a scanned tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented hierarchy dump (default)
    #[default]
    Hierarchy,
    /// JSON document of the whole tree
    Json,
    /// One file path per line
    Files,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hierarchy" | "tree" => Ok(Self::Hierarchy),
            "json" => Ok(Self::Json),
            "files" | "paths" => Ok(Self::Files),
            _ => Err(()),
        }
    }
}

/// Write `root` to stdout in `format`
pub fn output_tree(root: &Directory, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let handle = stdout.lock();
    write_tree(root, format, handle)
}

/// Write `root` to `out` in `format`
pub fn write_tree<W: Write>(root: &Directory, format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Hierarchy => write_hierarchy(root, &mut out)?,
        OutputFormat::Json => {
            let value = directory_json(root);
            serde_json::to_writer_pretty(&mut out, &value)?;
            writeln!(out)?;
        }
        OutputFormat::Files => {
            write_file_paths(root, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Every file path below `dir`, depth-first in stored order
fn write_file_paths<W: Write>(dir: &Directory, out: &mut W) -> io::Result<()> {
    for child in dir.children() {
        match child {
            Entry::Directory(sub) => write_file_paths(sub, out)?,
            Entry::File(file) => writeln!(out, "{}", file.path().display())?,
        }
    }
    Ok(())
}

/// JSON representation of an entry
pub fn entry_json(entry: &Entry) -> Value {
    match entry {
        Entry::Directory(dir) => directory_json(dir),
        Entry::File(file) => file_json(file),
    }
}

fn directory_json(dir: &Directory) -> Value {
    let mut value = json!({
        "kind": "directory",
        "name": dir.name(),
        "display_name": dir.display_name(),
        "path": dir.path().display().to_string(),
        "children": dir.children().iter().map(entry_json).collect::<Vec<_>>(),
    });
    if let Some(icon) = dir.icon() {
        value["icon"] = json!(icon.glyph());
    }
    value
}

fn file_json(file: &File) -> Value {
    let mut value = json!({
        "kind": "file",
        "name": file.name(),
        "extension": file.extension(),
        "display_name": file.display_name(),
        "path": file.path().display().to_string(),
    });
    if let Some(icon) = file.icon() {
        value["icon"] = json!(icon.glyph());
    }
    value
}
