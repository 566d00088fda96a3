//! Project-wide package reference scanning.
//!
//! Walks a JavaScript/TypeScript project, extracts the packages each source file
//! references, and merges them into one list for the whole project.
//!
//! # Examples
//!
//! ```no_run
//! use pkgrefs_scan::{ScanConfig, run_scan};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = ScanConfig::new("/path/to/project");
//! let result = run_scan(cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! pkgrefs_scan::print_scan_report(&mut stdout, &result, false)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod collector;
mod config;
mod reporter;
mod scanner;
mod types;

// Re-export public API
pub use collector::collect_source_files;
pub use config::{ScanConfig, find_git_root, find_git_root_from};
pub use reporter::{print_no_packages_message, print_package_list, print_scan_report};
pub use scanner::{packages_for_file, run_scan};
pub use types::{FileReport, ScanFailure, ScanResult};
