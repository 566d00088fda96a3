use pkgrefs_core::PackageReference;
use serde::Serialize;

/// Packages referenced by one source file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path relative to the scan root
    pub path: String,
    pub packages: Vec<PackageReference>,
}

/// A file that could not be read or contained a malformed specifier
#[derive(Debug, Clone, Serialize)]
pub struct ScanFailure {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanResult {
    /// Every package referenced anywhere, in first-seen order across sorted files
    pub packages: Vec<PackageReference>,
    pub files: Vec<FileReport>,
    pub failures: Vec<ScanFailure>,
    pub files_analyzed: usize,
}

impl ScanResult {
    pub fn type_only_count(&self) -> usize {
        self.packages.iter().filter(|p| p.is_type_only()).count()
    }
}
