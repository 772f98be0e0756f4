//! Application configuration from CLI arguments

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::config_file::ConfigFile;
use crate::output::{exit_code, OutputFormat};
use crate::scan::ScanOptions;

/// Application configuration from CLI args and config file
#[derive(Debug)]
pub struct Config {
    /// Folder to scan
    pub root: PathBuf,
    /// Scanner options (config file, overridden by CLI)
    pub scan: ScanOptions,
    /// Attach icons before output
    pub icons: bool,
    /// Output format
    pub format: OutputFormat,
    /// Debug logging requested
    pub verbose: bool,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        // Load config file first (provides defaults)
        let config_file = ConfigFile::load();
        Self::parse(env::args().skip(1), config_file)
    }

    /// Build a config from `args` (without the program name) over `config_file`
    pub fn parse<I>(args: I, config_file: ConfigFile) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut root: Option<PathBuf> = None;
        let mut show_hidden: Option<bool> = None;
        let mut max_depth: Option<usize> = None;
        let mut follow_symlinks: Option<bool> = None;
        let mut icons: Option<bool> = None;
        let mut format = OutputFormat::default();
        let mut verbose = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--hidden" | "-a" => show_hidden = Some(true),
                "--no-hidden" => show_hidden = Some(false),
                "--follow-symlinks" | "-L" => follow_symlinks = Some(true),
                "--icons" | "-i" => icons = Some(true),
                "--no-icons" => icons = Some(false),
                "--verbose" | "-v" => verbose = true,
                "--depth" => {
                    if let Some(depth_str) = args.next() {
                        max_depth = Some(depth_str.parse().map_err(|_| {
                            anyhow::anyhow!(
                                "--depth requires a non-negative integer, got '{}'",
                                depth_str
                            )
                        })?);
                    } else {
                        anyhow::bail!("--depth requires a value");
                    }
                }
                "--format" | "-f" => {
                    if let Some(fmt) = args.next() {
                        format = OutputFormat::from_str(&fmt).map_err(|_| {
                            anyhow::anyhow!(
                                "Invalid format '{}'. Valid formats: hierarchy, json, files",
                                fmt
                            )
                        })?;
                    } else {
                        anyhow::bail!("--format requires a value (hierarchy, json, or files)");
                    }
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(exit_code::SUCCESS);
                }
                "--version" | "-V" => {
                    println!("menunav {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(exit_code::SUCCESS);
                }
                path if !path.starts_with('-') => {
                    root = Some(resolve_root(Path::new(path))?);
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        let root = match root.or_else(|| config_file.general.root.clone()) {
            Some(root) => root,
            None => env::current_dir()?,
        };

        // CLI arguments take precedence over config file
        let defaults = config_file.scan_options();
        Ok(Self {
            root,
            scan: ScanOptions {
                show_hidden: show_hidden.unwrap_or(defaults.show_hidden),
                max_depth: max_depth.or(defaults.max_depth),
                follow_symlinks: follow_symlinks.unwrap_or(defaults.follow_symlinks),
                directories_first: defaults.directories_first,
            },
            icons: icons.unwrap_or(config_file.general.icons),
            format,
            verbose,
        })
    }
}

/// A folder argument is used as is; a file argument selects its parent folder
fn resolve_root(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_dir() {
        Ok(path.canonicalize()?)
    } else if path.is_file() {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.canonicalize()?),
            _ => Ok(env::current_dir()?),
        }
    } else {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
}

fn print_help() {
    println!(
        r#"menunav - Browse a folder hierarchy from a menu

USAGE:
    menunav [OPTIONS] [PATH]

OPTIONS:
    -a, --hidden            Show hidden files
    --no-hidden             Hide hidden files (default)
    --depth N               Limit scan depth to N levels
    -L, --follow-symlinks   Descend into symlinked folders
    -i, --icons             Attach icons to entries (default)
    --no-icons              Do not attach icons
    -f, --format FMT        Output format: hierarchy, json, files
    -v, --verbose           Log scan details to stderr
    -h, --help              Show this help message
    -V, --version           Show version

CONFIG FILE:
    ~/.config/menunav/config.toml

ENVIRONMENT:
    MENUNAV_LOG             Log filter (e.g. debug, menunav=trace)

EXIT CODES:
    0           Success
    2           Error (unreadable folder, I/O error)
    3           Invalid arguments (unknown option or invalid value)
"#
    );
}
