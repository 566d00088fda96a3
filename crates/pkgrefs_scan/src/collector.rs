use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use pkgrefs_core::JS_TS_EXTENSIONS;
use std::path::{Path, PathBuf};

use crate::config::ScanConfig;

/// Directories that never hold first-party sources
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

/// Collect the JS/TS source files under `root`, sorted by path
pub fn collect_source_files(cfg: &ScanConfig, root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Collecting source files");
    let mut files: Vec<PathBuf> = Vec::new();
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .ignore(true)
        .git_ignore(true)
        .filter_entry(|dent| {
            !dent.file_name().to_str().is_some_and(|name| SKIPPED_DIRS.contains(&name))
        })
        .build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        let Some(ext) = p.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if !JS_TS_EXTENSIONS.contains(&ext) {
            continue;
        }

        // Directories above the root must not influence the filters
        let rel_str = p.strip_prefix(root).unwrap_or(p).to_string_lossy();
        if !cfg.include_tests && (rel_str.contains(".test.") || rel_str.contains(".spec.")) {
            trace!("Skipping test file: {}", rel_str);
            continue;
        }

        if let Some(gl) = &cfg.entry_glob {
            if !rel_str.contains(gl.as_str()) {
                trace!("Skipping file not matching '{}': {}", gl, rel_str);
                continue;
            }
        }

        trace!("Found source file: {}", p.display());
        files.push(p.to_path_buf());
    }

    files.sort();
    debug!("Collected {} source files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn relative(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_collects_js_ts_files_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "src/b.ts", "");
        create_test_file(root, "src/a.jsx", "");
        create_test_file(root, "lib/c.cjs", "");
        create_test_file(root, "README.md", "");
        create_test_file(root, "styles.css", "");

        let files = collect_source_files(&ScanConfig::new(root), root).unwrap();
        assert_eq!(relative(root, &files), vec!["lib/c.cjs", "src/a.jsx", "src/b.ts"]);
    }

    #[test]
    fn test_skips_node_modules() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "index.js", "");
        create_test_file(root, "node_modules/lodash/index.js", "");
        create_test_file(root, "packages/app/node_modules/x/index.js", "");

        let files = collect_source_files(&ScanConfig::new(root), root).unwrap();
        assert_eq!(relative(root, &files), vec!["index.js"]);
    }

    #[test]
    fn test_skips_test_files_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "src/a.ts", "");
        create_test_file(root, "src/a.test.ts", "");
        create_test_file(root, "src/a.spec.js", "");

        let files = collect_source_files(&ScanConfig::new(root), root).unwrap();
        assert_eq!(relative(root, &files), vec!["src/a.ts"]);

        let mut cfg = ScanConfig::new(root);
        cfg.include_tests = true;
        let files = collect_source_files(&cfg, root).unwrap();
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn test_test_marker_in_root_name_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("my.test.project");
        create_test_file(&root, "src/index.ts", "");
        create_test_file(&root, "src/index.spec.ts", "");

        let files = collect_source_files(&ScanConfig::new(&root), &root).unwrap();
        assert_eq!(relative(&root, &files), vec!["src/index.ts"]);
    }

    #[test]
    fn test_entry_glob_filters_relative_path() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "apps/web/src/index.ts", "");
        create_test_file(root, "apps/api/src/index.ts", "");

        let mut cfg = ScanConfig::new(root);
        cfg.entry_glob = Some("apps/web".to_string());
        let files = collect_source_files(&cfg, root).unwrap();
        assert_eq!(relative(root, &files), vec!["apps/web/src/index.ts"]);
    }

    #[test]
    fn test_includes_hidden_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, ".storybook/main.js", "");

        let files = collect_source_files(&ScanConfig::new(root), root).unwrap();
        assert_eq!(relative(root, &files), vec![".storybook/main.js"]);
    }
}
