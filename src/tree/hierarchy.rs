//! Hierarchy dump - a depth-annotated, pre-order walk of a directory
//!
//! The walk is exposed as an iterator so callers pick the sink (stdout,
//! logs, a UI list). Files are listed at the depth of the directory that
//! contains them; each subdirectory is one level deeper than its parent.

use std::fmt;
use std::io::{self, Write};
use std::slice;

use super::{Directory, Entry};

/// Spaces added per nesting level
pub const INDENT_WIDTH: usize = 2;

/// One line of a hierarchy dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyLine {
    /// Nesting level (0 = the directory the walk started from)
    pub depth: usize,
    /// Debug label of the entry
    pub label: String,
    pub is_directory: bool,
}

impl fmt::Display for HierarchyLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = " ".repeat(self.depth * INDENT_WIDTH);
        if self.is_directory {
            write!(f, "{} - [{}]", indent, self.label)
        } else {
            write!(f, "{} - {}", indent, self.label)
        }
    }
}

/// Lazy pre-order walk over a directory subtree.
///
/// Cloning the iterator snapshots its position; calling
/// [`Directory::hierarchy`] again restarts from the top.
#[derive(Debug, Clone)]
pub struct Hierarchy<'a> {
    root: Option<&'a Directory>,
    stack: Vec<(usize, slice::Iter<'a, Entry>)>,
}

impl<'a> Hierarchy<'a> {
    pub(crate) fn new(root: &'a Directory) -> Self {
        Self {
            root: Some(root),
            stack: Vec::new(),
        }
    }
}

impl<'a> Iterator for Hierarchy<'a> {
    type Item = HierarchyLine;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack.push((0, root.children().iter()));
            return Some(HierarchyLine {
                depth: 0,
                label: root.debug_label(),
                is_directory: true,
            });
        }

        loop {
            let (depth, children) = self.stack.last_mut()?;
            let depth = *depth;
            match children.next() {
                Some(Entry::Directory(dir)) => {
                    self.stack.push((depth + 1, dir.children().iter()));
                    return Some(HierarchyLine {
                        depth: depth + 1,
                        label: dir.debug_label(),
                        is_directory: true,
                    });
                }
                Some(Entry::File(file)) => {
                    return Some(HierarchyLine {
                        depth,
                        label: file.debug_label(),
                        is_directory: false,
                    });
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl Directory {
    /// Walk this subtree as hierarchy lines
    pub fn hierarchy(&self) -> Hierarchy<'_> {
        Hierarchy::new(self)
    }

    /// Print the hierarchy dump to stdout
    pub fn print_hierarchy(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        // Write errors on stdout are ignored
        let _ = write_hierarchy(self, &mut handle);
    }
}

/// Write the hierarchy dump of `dir` to any sink, one line per entry
pub fn write_hierarchy<W: Write>(dir: &Directory, mut out: W) -> io::Result<()> {
    for line in dir.hierarchy() {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Emit the hierarchy dump through the log at debug level
pub fn log_hierarchy(dir: &Directory) {
    for line in dir.hierarchy() {
        tracing::debug!(target: "menunav::hierarchy", "{}", line);
    }
}
