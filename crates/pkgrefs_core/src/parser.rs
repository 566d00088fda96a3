use log::{debug, trace, warn};
use oxc_allocator::Allocator;
use oxc_parser::{Parser as OxcParser, ParserReturn};
use oxc_span::SourceType;
use std::path::{Path, PathBuf};

use crate::{
    dedupe::dedupe,
    error::Result,
    extractor::extract_raw_references,
    package_name::package_name,
    types::{PackageReference, RawReference},
};

/// File name hint used when the caller does not supply one.
pub const DEFAULT_FILE_NAME: &str = "file.ts";

/// Per-call parser configuration.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Only used to pick a source type and to label diagnostics.
    pub file_name: PathBuf,
    /// Overrides the source type derived from `file_name`.
    pub source_type: Option<SourceType>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { file_name: PathBuf::from(DEFAULT_FILE_NAME), source_type: None }
    }
}

impl ParseOptions {
    pub fn for_file(file_name: impl Into<PathBuf>) -> Self {
        Self { file_name: file_name.into(), source_type: None }
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type.unwrap_or_else(|| source_type_for(&self.file_name))
    }
}

/// Parse `source_text` and list the packages it references, one entry per package.
///
/// Relative specifiers are dropped. A package is `TypeOnly` only when every reference
/// to it is type-only.
pub fn extract_package_references(
    source_text: &str,
    options: &ParseOptions,
) -> Result<Vec<PackageReference>> {
    let raw = parse_and_extract(source_text, options);

    let mut packages = Vec::with_capacity(raw.len());
    for RawReference { specifier, tag } in raw {
        match package_name(&specifier)? {
            Some(name) => packages.push(PackageReference { name, tag }),
            None => trace!("Skipping relative reference '{}'", specifier),
        }
    }

    let packages = dedupe(packages);
    debug!("Found {} packages in {}", packages.len(), options.file_name.display());
    Ok(packages)
}

/// Parse `source_text` and return its raw reference sites in source order.
///
/// Parse errors are logged and the walk runs over whatever the parser recovered.
pub fn parse_and_extract(source_text: &str, options: &ParseOptions) -> Vec<RawReference> {
    let st = options.source_type();
    trace!("Parsing {} as {:?}", options.file_name.display(), st);

    let allocator = Allocator::default();
    let ParserReturn { program, errors, panicked, .. } =
        OxcParser::new(&allocator, source_text, st).parse();

    if panicked {
        warn!(
            "Parser gave up on {} ({} errors); results may be incomplete",
            options.file_name.display(),
            errors.len()
        );
    }
    for error in &errors {
        debug!("Parse error in {}: {}", options.file_name.display(), error);
    }

    let raw = extract_raw_references(&program);
    trace!("Found {} reference sites in {}", raw.len(), options.file_name.display());
    raw
}

/// Pick a source type from the file name. Every JS flavour is parsed with TypeScript
/// syntax enabled so type-only markers are understood in plain JS too.
pub fn source_type_for(path: &Path) -> SourceType {
    let ext = path.extension().and_then(|e| e.to_str());

    // `<T>expr` assertions are the only TS syntax JSX mode rejects, and plain JS never has them
    let jsx = !matches!(ext, Some("ts") | Some("mts") | Some("cts")) && ext.is_some_and(is_js_ts);

    SourceType::default()
        .with_typescript(true)
        .with_jsx(jsx)
        .with_module(!matches!(ext, Some("cjs") | Some("cts")))
}

fn is_js_ts(ext: &str) -> bool {
    crate::constants::JS_TS_EXTENSIONS.contains(&ext)
}
