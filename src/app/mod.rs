//! Application module
//!
//! Configuration (CLI arguments over the config file) and the scan-and-output
//! run that the binary performs.

mod config;
mod config_file;

pub use config::Config;
pub use config_file::{ConfigFile, GeneralConfig, ScanConfig};

use crate::error::Result;
use crate::icons::attach_icons;
use crate::output::output_tree;
use crate::scan::Scanner;
use crate::tree::log_hierarchy;

/// Scan the configured root and write it to stdout
pub fn run(config: &Config) -> Result<()> {
    let scanner = Scanner::new(config.scan.clone());
    let (mut root, stats) = scanner.scan_with_stats(&config.root)?;
    if stats.skipped > 0 {
        tracing::info!(skipped = stats.skipped, "some entries could not be read");
    }

    if config.icons {
        attach_icons(&mut root);
    }
    log_hierarchy(&root);

    output_tree(&root, config.format)
}
