//! Tree entry definitions
//!
//! An [`Entry`] is either a [`Directory`] or a [`File`]. Directories own their
//! children by value, so a subtree can only ever hang off one parent.

use std::path::{Path, PathBuf};

use crate::icons::Icon;

/// A node in the file system tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Directory(Directory),
    File(File),
}

/// A directory and its direct children, in scan order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    name: String,
    path: PathBuf,
    icon: Option<Icon>,
    children: Vec<Entry>,
}

/// A file, split into base name and extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    extension: String,
    path: PathBuf,
    icon: Option<Icon>,
}

impl Entry {
    /// Base name
    pub fn name(&self) -> &str {
        match self {
            Entry::Directory(dir) => dir.name(),
            Entry::File(file) => file.name(),
        }
    }

    /// Name formatted for menu labels
    pub fn display_name(&self) -> String {
        match self {
            Entry::Directory(dir) => dir.display_name(),
            Entry::File(file) => file.display_name(),
        }
    }

    /// Diagnostic label
    pub fn debug_label(&self) -> String {
        match self {
            Entry::Directory(dir) => dir.debug_label(),
            Entry::File(file) => file.debug_label(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Entry::Directory(dir) => dir.path(),
            Entry::File(file) => file.path(),
        }
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        match self {
            Entry::Directory(dir) => dir.set_path(path),
            Entry::File(file) => file.set_path(path),
        }
    }

    pub fn icon(&self) -> Option<&Icon> {
        match self {
            Entry::Directory(dir) => dir.icon(),
            Entry::File(file) => file.icon(),
        }
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        match self {
            Entry::Directory(dir) => dir.set_icon(icon),
            Entry::File(file) => file.set_icon(icon),
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Entry::File(_))
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    pub fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Entry::Directory(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Entry::File(file) => Some(file),
            Entry::Directory(_) => None,
        }
    }
}

impl From<Directory> for Entry {
    fn from(dir: Directory) -> Self {
        Entry::Directory(dir)
    }
}

impl From<File> for Entry {
    fn from(file: File) -> Self {
        Entry::File(file)
    }
}

impl Directory {
    /// Create an empty directory
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directories are shown by their plain name
    pub fn display_name(&self) -> String {
        self.name.clone()
    }

    pub fn debug_label(&self) -> String {
        self.name.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn path_mut(&mut self) -> &mut PathBuf {
        &mut self.path
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = icon;
    }

    /// Append a child at the end.
    ///
    /// No duplicate or cycle checks are made; the builder owns that guarantee.
    pub fn add(&mut self, child: impl Into<Entry>) {
        self.children.push(child.into());
    }

    /// Get children (immutable)
    pub fn children(&self) -> &[Entry] {
        &self.children
    }

    /// Get children (mutable)
    pub fn children_mut(&mut self) -> &mut [Entry] {
        &mut self.children
    }

    /// Direct children that are files, in stored order
    pub fn files(&self) -> impl Iterator<Item = &File> + '_ {
        self.children.iter().filter_map(Entry::as_file)
    }

    /// Direct children that are directories, in stored order
    pub fn directories(&self) -> impl Iterator<Item = &Directory> + '_ {
        self.children.iter().filter_map(Entry::as_directory)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl File {
    /// Create a file entry. `extension` is given without the leading dot.
    pub fn new(
        name: impl Into<String>,
        extension: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
            path: path.into(),
            icon: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// `name.extension`, or just `name` when there is no extension
    pub fn display_name(&self) -> String {
        if self.extension.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.name, self.extension)
        }
    }

    /// Always `name.extension`; an empty extension leaves a trailing dot.
    pub fn debug_label(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn path_mut(&mut self) -> &mut PathBuf {
        &mut self.path
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: Option<Icon>) {
        self.icon = icon;
    }
}
