//! Integration tests for MenuNav
//!
//! These tests scan real temporary folders and check the resulting tree the
//! way the menu builder reads it.

use std::fs;
use std::path::Path;

use menunav::icons::{attach_icons, DEFAULT_FOLDER_ICON};
use menunav::output::{write_tree, OutputFormat};
use menunav::scan::{ScanOptions, Scanner};
use menunav::tree::{write_hierarchy, Directory, Entry, File};
use tempfile::TempDir;

fn setup_projects() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("Work/Reports")).unwrap();
    fs::write(root.join("Work/Reports/q3.pdf"), "").unwrap();
    fs::write(root.join("Work/todo.txt"), "").unwrap();
    fs::create_dir(root.join("Music")).unwrap();
    fs::write(root.join("Music/song.mp3"), "").unwrap();
    fs::write(root.join("README"), "").unwrap();
    fs::write(root.join("notes.md"), "").unwrap();
    fs::write(root.join(".DS_Store"), "").unwrap();
    temp
}

fn find_dir<'a>(dir: &'a Directory, name: &str) -> &'a Directory {
    dir.directories()
        .find(|d| d.name() == name)
        .unwrap_or_else(|| panic!("no directory named {}", name))
}

// =============================================================================
// Scanned Tree Shape
// =============================================================================

mod scanned_tree_tests {
    use super::*;

    #[test]
    fn test_menu_reads_files_and_directories() {
        let temp = setup_projects();
        let root = Scanner::default().scan(temp.path()).unwrap();

        let dirs: Vec<_> = root.directories().map(Directory::name).collect();
        assert_eq!(dirs, vec!["Music", "Work"]);

        let files: Vec<_> = root.files().map(File::display_name).collect();
        assert_eq!(files, vec!["notes.md", "README"]);
    }

    #[test]
    fn test_files_do_not_include_grandchildren() {
        let temp = setup_projects();
        let root = Scanner::default().scan(temp.path()).unwrap();
        let work = find_dir(&root, "Work");

        let files: Vec<_> = work.files().map(File::display_name).collect();
        assert_eq!(files, vec!["todo.txt"]);
        assert_eq!(work.len(), 2);
    }

    #[test]
    fn test_every_entry_path_exists() {
        fn check(dir: &Directory) {
            assert!(dir.path().is_dir(), "{}", dir.path().display());
            for child in dir.children() {
                match child {
                    Entry::Directory(sub) => check(sub),
                    Entry::File(file) => assert!(file.path().is_file()),
                }
            }
        }

        let temp = setup_projects();
        check(&Scanner::default().scan(temp.path()).unwrap());
    }

    #[test]
    fn test_hidden_files_opt_in() {
        let temp = setup_projects();
        let scanner = Scanner::new(ScanOptions {
            show_hidden: true,
            ..ScanOptions::default()
        });
        let root = scanner.scan(temp.path()).unwrap();
        assert!(root.files().any(|f| f.name() == ".DS_Store"));
    }

    #[test]
    fn test_scan_then_extend_by_hand() {
        let temp = setup_projects();
        let mut root = Scanner::default().scan(temp.path()).unwrap();
        let before = root.len();

        root.add(File::new("extra", "txt", temp.path().join("extra.txt")));
        assert_eq!(root.len(), before + 1);
        assert_eq!(
            root.children().last().map(Entry::display_name),
            Some("extra.txt".to_string())
        );
    }
}

// =============================================================================
// Hierarchy Dump
// =============================================================================

mod hierarchy_tests {
    use super::*;

    #[test]
    fn test_hierarchy_of_scanned_tree() {
        let temp = setup_projects();
        let root = Scanner::default().scan(temp.path()).unwrap();

        let mut out = Vec::new();
        write_hierarchy(&root, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        let root_name = root.name().to_string();
        let expected = format!(
            " - [{}]\n   - [Music]\n   - song.mp3\n   - [Work]\n     - [Reports]\n     - q3.pdf\n   - todo.txt\n - notes.md\n - README.\n",
            root_name
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_hierarchy_lines_match_dump() {
        let temp = setup_projects();
        let root = Scanner::default().scan(temp.path()).unwrap();

        let mut out = Vec::new();
        write_hierarchy(&root, &mut out).unwrap();
        let dumped: Vec<String> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect();
        let walked: Vec<String> = root.hierarchy().map(|l| l.to_string()).collect();
        assert_eq!(dumped, walked);
    }
}

// =============================================================================
// Icons and Output
// =============================================================================

mod output_tests {
    use super::*;

    #[test]
    fn test_json_output_with_icons() {
        let temp = setup_projects();
        let mut root = Scanner::default().scan(temp.path()).unwrap();
        attach_icons(&mut root);

        let mut out = Vec::new();
        write_tree(&root, OutputFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["icon"], DEFAULT_FOLDER_ICON);
        let children = value["children"].as_array().unwrap();
        assert_eq!(children.len(), 4);
        assert!(children.iter().all(|c| c.get("icon").is_some()));
    }

    #[test]
    fn test_files_output_lists_every_file() {
        let temp = setup_projects();
        let root = Scanner::default().scan(temp.path()).unwrap();

        let mut out = Vec::new();
        write_tree(&root, OutputFormat::Files, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let paths: Vec<&Path> = output.lines().map(Path::new).collect();

        assert_eq!(paths.len(), 5);
        assert!(paths.contains(&temp.path().join("Work/Reports/q3.pdf").as_path()));
        assert!(paths.iter().all(|p| p.is_file()));
    }
}
