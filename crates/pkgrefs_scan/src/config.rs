use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{debug, info, trace};
use std::{
    env,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "scan")]
#[command(about = "List the packages referenced by a JavaScript/TypeScript project")]
pub struct ScanConfig {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Only scan files whose root-relative path contains this pattern
    #[arg(long)]
    pub entry_glob: Option<String>,

    /// Also scan *.test.* and *.spec.* files
    #[arg(long)]
    pub include_tests: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// List the packages of every file, not just the project-wide set
    #[arg(long)]
    pub per_file: bool,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            entry_glob: None,
            include_tests: false,
            json: false,
            per_file: false,
        }
    }

    /// Resolve the root directory, falling back to the enclosing git root
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize()
                .with_context(|| format!("Root directory {} does not exist", r.display()))?
        } else {
            debug!("No root provided, searching for git root");
            find_git_root()?
        };
        info!("Using root directory: {}", root.display());
        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}

pub fn find_git_root() -> Result<PathBuf> {
    find_git_root_from(&env::current_dir()?)
}

pub fn find_git_root_from(start: &Path) -> Result<PathBuf> {
    debug!("Searching for git root");
    trace!("Starting search from: {:?}", start);

    for dir in start.ancestors() {
        let git_dir = dir.join(".git");
        trace!("Checking for .git at: {:?}", git_dir);
        if git_dir.exists() {
            debug!("Found git root at: {:?}", dir);
            return Ok(dir.to_path_buf());
        }
    }

    debug!("Could not find .git directory in any parent folder");
    Err(anyhow!("Could not find .git directory in any parent folder"))
}
