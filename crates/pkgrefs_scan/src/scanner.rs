use anyhow::{Context, Result, anyhow};
use dashmap::DashMap;
use log::{debug, info, trace, warn};
use path_clean::clean;
use pkgrefs_core::{PackageReference, ParseOptions, dedupe, extract_package_references};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    thread,
};

use crate::{
    collector::collect_source_files,
    config::ScanConfig,
    types::{FileReport, ScanFailure, ScanResult},
};

/// Read one file and list the packages it references
pub fn packages_for_file(file: &Path) -> Result<Vec<PackageReference>> {
    trace!("Parsing file for package references: {}", file.display());
    let src =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    extract_package_references(&src, &ParseOptions::for_file(file))
        .with_context(|| format!("Failed to extract packages from {}", file.display()))
}

pub fn run_scan(mut cfg: ScanConfig) -> Result<ScanResult> {
    info!("Starting package scan");

    cfg.initialize()?;
    let root = cfg.root()?.clone();

    debug!("Collecting source files with glob: {:?}", cfg.entry_glob);
    let files = collect_source_files(&cfg, &root)?;
    if files.is_empty() {
        warn!("No source files found under {}", root.display());
        return Err(anyhow!("No source files found under {}", root.display()));
    }
    info!("Processing {} source files in parallel", files.len());

    // Each file is parsed independently; failures stay with their file
    let outcomes: DashMap<PathBuf, Result<Vec<PackageReference>, String>> = DashMap::new();
    files.par_iter().for_each(|file| {
        debug!("Thread {:?} processing: {}", thread::current().id(), file.display());
        let outcome = packages_for_file(file).map_err(|e| {
            warn!("Skipping {}: {:#}", file.display(), e);
            format!("{:#}", e)
        });
        outcomes.insert(file.clone(), outcome);
    });

    let mut reports = Vec::with_capacity(files.len());
    let mut failures = Vec::new();
    for file in &files {
        let Some((_, outcome)) = outcomes.remove(file) else {
            continue;
        };
        let path = display_path(&root, file);
        match outcome {
            Ok(packages) => reports.push(FileReport { path, packages }),
            Err(error) => failures.push(ScanFailure { path, error }),
        }
    }

    // Files are merged in path order so the project-wide order is stable
    let packages = dedupe(reports.iter().flat_map(|r| r.packages.iter().cloned()));

    info!(
        "Package scan complete. Found {} packages in {} files ({} failed)",
        packages.len(),
        files.len(),
        failures.len()
    );

    Ok(ScanResult { packages, files: reports, failures, files_analyzed: files.len() })
}

fn display_path(root: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(root).unwrap_or(file);
    clean(rel).to_string_lossy().replace('\\', "/")
}
