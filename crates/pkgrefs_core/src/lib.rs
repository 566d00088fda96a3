//! Package reference extraction for JavaScript/TypeScript sources.
//!
//! This crate finds every place a source file names an external module and reduces
//! them to the set of packages the file depends on:
//! - Static imports, re-exports, `import x = require(...)`
//! - Dynamic `import()` and CommonJS `require()` calls, however deeply nested
//! - Type-only imports, reported separately from value imports
//!
//! # Examples
//!
//! ```
//! use pkgrefs_core::{ParseOptions, PackageReference, ReferenceTag, extract_package_references};
//!
//! # fn main() -> pkgrefs_core::Result<()> {
//! let source = "import type { A } from '@scope/pkg/types';\nconst b = require('lodash/map');";
//! let packages = extract_package_references(source, &ParseOptions::default())?;
//!
//! assert_eq!(
//!     packages,
//!     vec![
//!         PackageReference::new("@scope/pkg", ReferenceTag::TypeOnly),
//!         PackageReference::new("lodash", ReferenceTag::Normal),
//!     ]
//! );
//! # Ok(())
//! # }
//! ```

mod constants;
mod dedupe;
mod error;
mod extractor;
mod package_name;
mod parser;
mod types;

// Re-export public API
pub use constants::JS_TS_EXTENSIONS;
pub use dedupe::dedupe;
pub use error::{Error, Result};
pub use extractor::extract_raw_references;
pub use package_name::package_name;
pub use parser::{
    DEFAULT_FILE_NAME, ParseOptions, extract_package_references, parse_and_extract,
    source_type_for,
};
pub use oxc_span::SourceType;
pub use types::{PackageReference, RawReference, ReferenceTag};
