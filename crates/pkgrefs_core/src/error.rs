//! Error types for pkgrefs_core

use thiserror::Error;

/// Result type alias using pkgrefs_core Error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The specifier has no path segments once separators are stripped
    #[error("Invalid package specifier: '{specifier}'")]
    InvalidSpecifier { specifier: String },
}
