//! File system scanner - builds a [`Directory`] tree from a real path
//!
//! Only the root has to be readable. Anything below it that fails (permission
//! denied, broken symlink, vanished entry) is logged and left out, so a scan
//! always yields a usable, possibly partial, tree.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MenuNavError, Result};
use crate::tree::{Directory, File};

/// Options controlling what a scan includes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Include entries whose name starts with '.'
    pub show_hidden: bool,
    /// Deepest level to descend to (root = 0, None = unlimited)
    pub max_depth: Option<usize>,
    /// Descend into symlinked directories
    pub follow_symlinks: bool,
    /// List directories before files
    pub directories_first: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            show_hidden: false,
            max_depth: None,
            follow_symlinks: false,
            directories_first: true,
        }
    }
}

/// Counters gathered during a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Directories in the tree, root included
    pub directories: usize,
    pub files: usize,
    /// Entries left out because they could not be read
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Directory,
    File,
}

#[derive(Debug)]
struct Candidate {
    path: PathBuf,
    name: String,
    kind: Kind,
}

/// Walks the file system and populates a tree
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan `root` into a tree
    pub fn scan(&self, root: &Path) -> Result<Directory> {
        self.scan_with_stats(root).map(|(dir, _)| dir)
    }

    /// Scan `root` into a tree and report what was included and skipped
    pub fn scan_with_stats(&self, root: &Path) -> Result<(Directory, ScanStats)> {
        let metadata =
            fs::metadata(root).map_err(|e| MenuNavError::path(root, e.to_string()))?;
        if !metadata.is_dir() {
            return Err(MenuNavError::path(root, "not a directory"));
        }
        let entries = fs::read_dir(root).map_err(|e| MenuNavError::path(root, e.to_string()))?;

        let mut ancestors = Vec::new();
        if self.options.follow_symlinks {
            let canonical = root
                .canonicalize()
                .map_err(|e| MenuNavError::path(root, e.to_string()))?;
            ancestors.push(canonical);
        }

        let mut stats = ScanStats {
            directories: 1,
            ..ScanStats::default()
        };
        let mut dir = Directory::new(entry_name(root), root);
        self.fill(&mut dir, entries, 0, &mut ancestors, &mut stats);

        tracing::debug!(
            root = %root.display(),
            directories = stats.directories,
            files = stats.files,
            skipped = stats.skipped,
            "scan finished"
        );
        Ok((dir, stats))
    }

    fn fill(
        &self,
        dir: &mut Directory,
        entries: fs::ReadDir,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
        stats: &mut ScanStats,
    ) {
        if self.options.max_depth.is_some_and(|max| depth >= max) {
            return;
        }

        let mut candidates = self.collect_candidates(entries, stats);
        self.sort(&mut candidates);

        for candidate in candidates {
            match candidate.kind {
                Kind::File => {
                    let (name, extension) = split_file_name(&candidate.name);
                    dir.add(File::new(name, extension, candidate.path));
                    stats.files += 1;
                }
                Kind::Directory => {
                    if let Some(sub) = self.scan_subdirectory(candidate, depth, ancestors, stats) {
                        dir.add(sub);
                        stats.directories += 1;
                    }
                }
            }
        }
    }

    fn scan_subdirectory(
        &self,
        candidate: Candidate,
        depth: usize,
        ancestors: &mut Vec<PathBuf>,
        stats: &mut ScanStats,
    ) -> Option<Directory> {
        let mut canonical = None;
        if self.options.follow_symlinks {
            match candidate.path.canonicalize() {
                Ok(path) if ancestors.contains(&path) => {
                    tracing::warn!(path = %candidate.path.display(), "skipping directory cycle");
                    stats.skipped += 1;
                    return None;
                }
                Ok(path) => canonical = Some(path),
                Err(e) => {
                    tracing::warn!(path = %candidate.path.display(), error = %e, "skipping unresolvable directory");
                    stats.skipped += 1;
                    return None;
                }
            }
        }

        let mut sub = Directory::new(candidate.name, candidate.path);
        let descend = self.options.max_depth.is_none_or(|max| depth + 1 < max);
        if !descend {
            return Some(sub);
        }

        let entries = match fs::read_dir(sub.path()) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %sub.path().display(), error = %e, "skipping unreadable directory");
                stats.skipped += 1;
                return None;
            }
        };

        let pushed = match canonical {
            Some(path) => {
                ancestors.push(path);
                true
            }
            None => false,
        };
        self.fill(&mut sub, entries, depth + 1, ancestors, stats);
        if pushed {
            ancestors.pop();
        }
        Some(sub)
    }

    fn collect_candidates(&self, entries: fs::ReadDir, stats: &mut ScanStats) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    stats.skipped += 1;
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.options.show_hidden && name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(file_type) => file_type,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping entry with unknown type");
                    stats.skipped += 1;
                    continue;
                }
            };

            let kind = if file_type.is_symlink() {
                match fs::metadata(&path) {
                    Ok(target) if target.is_dir() && !self.options.follow_symlinks => {
                        tracing::debug!(path = %path.display(), "not following symlinked directory");
                        stats.skipped += 1;
                        continue;
                    }
                    Ok(target) if target.is_dir() => Kind::Directory,
                    Ok(_) => Kind::File,
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "skipping broken symlink");
                        stats.skipped += 1;
                        continue;
                    }
                }
            } else if file_type.is_dir() {
                Kind::Directory
            } else {
                Kind::File
            };

            candidates.push(Candidate { path, name, kind });
        }
        candidates
    }

    fn sort(&self, candidates: &mut [Candidate]) {
        let directories_first = self.options.directories_first;
        candidates.sort_by(|a, b| match (a.kind, b.kind) {
            (Kind::Directory, Kind::File) if directories_first => Ordering::Less,
            (Kind::File, Kind::Directory) if directories_first => Ordering::Greater,
            _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        });
    }
}

/// Name shown for a scan root: its last component, or the whole path
fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Split a file name into base name and extension (without the dot)
pub fn split_file_name(file_name: &str) -> (String, String) {
    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.to_string());
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    (stem, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_test_dir() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("src")).unwrap();
        fs::write(temp.path().join("src/main.rs"), "fn main() {}").unwrap();
        fs::create_dir(temp.path().join("src/bin")).unwrap();
        fs::write(temp.path().join("src/bin/tool.rs"), "").unwrap();
        fs::write(temp.path().join("Cargo.toml"), "[package]").unwrap();
        fs::write(temp.path().join("LICENSE"), "MIT").unwrap();
        fs::write(temp.path().join(".hidden"), "hidden").unwrap();
        temp
    }

    fn names(dir: &Directory) -> Vec<String> {
        dir.children().iter().map(|e| e.display_name()).collect()
    }

    #[test]
    fn test_split_file_name() {
        assert_eq!(split_file_name("main.rs"), ("main".into(), "rs".into()));
        assert_eq!(split_file_name("LICENSE"), ("LICENSE".into(), "".into()));
        assert_eq!(
            split_file_name("archive.tar.gz"),
            ("archive.tar".into(), "gz".into())
        );
        assert_eq!(
            split_file_name(".gitignore"),
            (".gitignore".into(), "".into())
        );
    }

    #[test]
    fn test_scan_directories_first_then_alphabetical() {
        let temp = setup_test_dir();
        let root = Scanner::default().scan(temp.path()).unwrap();
        assert_eq!(names(&root), vec!["src", "Cargo.toml", "LICENSE"]);
    }

    #[test]
    fn test_scan_alphabetical_only() {
        let temp = setup_test_dir();
        let scanner = Scanner::new(ScanOptions {
            directories_first: false,
            ..ScanOptions::default()
        });
        let root = scanner.scan(temp.path()).unwrap();
        assert_eq!(names(&root), vec!["Cargo.toml", "LICENSE", "src"]);
    }

    #[test]
    fn test_scan_splits_extension() {
        let temp = setup_test_dir();
        let root = Scanner::default().scan(temp.path()).unwrap();
        let files: Vec<_> = root
            .files()
            .map(|f| (f.name().to_string(), f.extension().to_string()))
            .collect();
        assert_eq!(
            files,
            vec![
                ("Cargo".to_string(), "toml".to_string()),
                ("LICENSE".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_scan_root_name_and_paths() {
        let temp = setup_test_dir();
        let root = Scanner::default().scan(temp.path()).unwrap();
        let expected = temp.path().file_name().unwrap().to_string_lossy();
        assert_eq!(root.name(), &*expected);
        assert_eq!(root.path(), temp.path());

        let src = root.directories().next().unwrap();
        assert_eq!(src.path(), temp.path().join("src"));
        assert_eq!(names(src), vec!["bin", "main.rs"]);
    }

    #[test]
    fn test_scan_hidden_files() {
        let temp = setup_test_dir();
        let root = Scanner::default().scan(temp.path()).unwrap();
        assert!(!names(&root).contains(&".hidden".to_string()));

        let scanner = Scanner::new(ScanOptions {
            show_hidden: true,
            ..ScanOptions::default()
        });
        let root = scanner.scan(temp.path()).unwrap();
        assert!(names(&root).contains(&".hidden".to_string()));
    }

    #[test]
    fn test_scan_depth_limit() {
        let temp = setup_test_dir();
        let scanner = Scanner::new(ScanOptions {
            max_depth: Some(1),
            ..ScanOptions::default()
        });
        let root = scanner.scan(temp.path()).unwrap();
        let src = root.directories().next().unwrap();
        assert_eq!(src.name(), "src");
        assert!(src.is_empty());

        let scanner = Scanner::new(ScanOptions {
            max_depth: Some(0),
            ..ScanOptions::default()
        });
        assert!(scanner.scan(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_stats() {
        let temp = setup_test_dir();
        let (_, stats) = Scanner::default().scan_with_stats(temp.path()).unwrap();
        assert_eq!(stats.directories, 3);
        assert_eq!(stats.files, 4);
        assert_eq!(stats.skipped, 0);
    }

    #[test]
    fn test_scan_missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        let result = Scanner::default().scan(&temp.path().join("nope"));
        assert!(matches!(result, Err(MenuNavError::Path { .. })));
    }

    #[test]
    fn test_scan_file_root_is_error() {
        let temp = setup_test_dir();
        let result = Scanner::default().scan(&temp.path().join("LICENSE"));
        assert!(matches!(result, Err(MenuNavError::Path { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_broken_symlink() {
        let temp = setup_test_dir();
        std::os::unix::fs::symlink(temp.path().join("missing"), temp.path().join("dangling"))
            .unwrap();
        let (root, stats) = Scanner::default().scan_with_stats(temp.path()).unwrap();
        assert!(!names(&root).contains(&"dangling".to_string()));
        assert_eq!(stats.skipped, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_symlinked_directory_cycle() {
        let temp = setup_test_dir();
        std::os::unix::fs::symlink(temp.path(), temp.path().join("src/loop")).unwrap();

        let root = Scanner::default().scan(temp.path()).unwrap();
        let src = root.directories().next().unwrap();
        assert!(!names(src).contains(&"loop".to_string()));

        let scanner = Scanner::new(ScanOptions {
            follow_symlinks: true,
            ..ScanOptions::default()
        });
        let (root, stats) = scanner.scan_with_stats(temp.path()).unwrap();
        let src = root.directories().next().unwrap();
        assert!(!names(src).contains(&"loop".to_string()));
        assert_eq!(stats.skipped, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_follows_symlinked_directory() {
        let temp = setup_test_dir();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("linked.txt"), "").unwrap();
        std::os::unix::fs::symlink(outside.path(), temp.path().join("shared")).unwrap();

        let scanner = Scanner::new(ScanOptions {
            follow_symlinks: true,
            ..ScanOptions::default()
        });
        let root = scanner.scan(temp.path()).unwrap();
        let shared = root
            .directories()
            .find(|d| d.name() == "shared")
            .unwrap();
        assert_eq!(names(shared), vec!["linked.txt"]);
    }
}
