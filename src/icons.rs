//! Menu icons for files and directories
//!
//! Icons are Nerd Font glyphs chosen from the entry's name and extension.
//! The tree never computes them itself; [`attach_icons`] sets them in place
//! once a scan has finished.

use std::fmt;

use crate::tree::{Directory, Entry, File};

/// Glyph used when nothing more specific matches a file
pub const DEFAULT_FILE_ICON: &str = "\u{f15b}";
/// Glyph used for ordinary folders
pub const DEFAULT_FOLDER_ICON: &str = "\u{f07b}";

/// An icon attached to a tree entry for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon(&'static str);

impl Icon {
    pub const fn new(glyph: &'static str) -> Self {
        Self(glyph)
    }

    pub fn glyph(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Attach an icon to `dir` and every entry below it
pub fn attach_icons(dir: &mut Directory) {
    let icon = icon_for_directory(dir);
    dir.set_icon(Some(icon));
    for child in dir.children_mut() {
        match child {
            Entry::Directory(sub) => attach_icons(sub),
            Entry::File(file) => {
                let icon = icon_for_file(file);
                file.set_icon(Some(icon));
            }
        }
    }
}

/// Icon for a directory, by well-known folder names
pub fn icon_for_directory(dir: &Directory) -> Icon {
    let glyph = match dir.name().to_lowercase().as_str() {
        ".git" => "\u{f1d3}",
        ".config" | "config" | "configs" => "\u{e5fc}",
        ".ssh" => "\u{f084}",
        "applications" => "\u{f0ac}",
        "bin" | "sbin" | "scripts" => "\u{f489}",
        "build" | "dist" | "out" | "target" => "\u{f487}",
        "desktop" => "\u{f108}",
        "doc" | "docs" | "documents" => "\u{f02d}",
        "downloads" => "\u{f019}",
        "images" | "photos" | "pictures" => "\u{f03e}",
        "library" | "lib" => "\u{f121}",
        "movies" | "videos" => "\u{f008}",
        "music" => "\u{f001}",
        "public" => "\u{f0ac}",
        "src" | "source" => "\u{e5fc}",
        "test" | "tests" => "\u{f0c3}",
        "tmp" | "temp" => "\u{f252}",
        _ => DEFAULT_FOLDER_ICON,
    };
    Icon::new(glyph)
}

/// Icon for a file, by special file name first, then extension
pub fn icon_for_file(file: &File) -> Icon {
    let display = file.display_name().to_lowercase();
    if let Some(glyph) = special_file_glyph(&display) {
        return Icon::new(glyph);
    }
    Icon::new(extension_glyph(&file.extension().to_lowercase()))
}

fn special_file_glyph(name_lower: &str) -> Option<&'static str> {
    Some(match name_lower {
        "cargo.toml" | "cargo.lock" => "\u{e7a8}",
        "package.json" | "package-lock.json" => "\u{e71e}",
        "makefile" | "justfile" | "cmakelists.txt" => "\u{e673}",
        "dockerfile" | "docker-compose.yml" | "compose.yml" => "\u{f308}",
        ".gitignore" | ".gitattributes" | ".gitmodules" => "\u{f1d3}",
        ".ds_store" => "\u{f179}",
        "readme" | "readme.md" | "readme.txt" => "\u{f48a}",
        "license" | "license.md" | "license.txt" => "\u{f0219}",
        "changelog" | "changelog.md" => "\u{f7d9}",
        ".bashrc" | ".zshrc" | ".profile" => "\u{e795}",
        _ => return None,
    })
}

fn extension_glyph(ext_lower: &str) -> &'static str {
    match ext_lower {
        // Source code
        "rs" => "\u{e7a8}",
        "swift" => "\u{e755}",
        "m" | "mm" | "c" => "\u{e61e}",
        "cpp" | "cc" | "h" | "hpp" => "\u{e61d}",
        "py" => "\u{e73c}",
        "js" | "mjs" => "\u{e74e}",
        "ts" => "\u{e628}",
        "go" => "\u{e627}",
        "java" => "\u{e738}",
        "rb" => "\u{e791}",
        "sh" | "bash" | "zsh" | "fish" => "\u{e795}",
        "html" | "htm" => "\u{e736}",
        "css" | "scss" => "\u{e749}",

        // Data and config
        "json" => "\u{e60b}",
        "yaml" | "yml" => "\u{e6a8}",
        "toml" => "\u{e6b2}",
        "xml" | "plist" => "\u{e796}",
        "csv" | "tsv" => "\u{f0ce}",
        "sql" | "sqlite" | "db" => "\u{e706}",

        // Documents
        "md" | "markdown" => "\u{e73e}",
        "txt" | "text" | "rtf" => "\u{f0f6}",
        "pdf" => "\u{f1c1}",
        "doc" | "docx" | "pages" => "\u{f1c2}",
        "xls" | "xlsx" | "numbers" => "\u{f1c3}",
        "ppt" | "pptx" | "key" => "\u{f1c4}",

        // Media
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "heic" | "tiff" => "\u{f03e}",
        "svg" => "\u{f1c5}",
        "mp3" | "wav" | "flac" | "aac" | "m4a" => "\u{f001}",
        "mp4" | "mov" | "mkv" | "avi" | "webm" => "\u{f008}",

        // Archives and bundles
        "zip" | "tar" | "gz" | "7z" | "rar" | "xz" => "\u{f1c6}",
        "dmg" | "pkg" | "iso" => "\u{f1c6}",
        "app" => "\u{f0ac}",

        _ => DEFAULT_FILE_ICON,
    }
}
