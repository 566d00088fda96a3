//! File extensions recognised as JavaScript/TypeScript sources.
//!
//! - **TypeScript**: `.ts`, `.tsx`, `.mts` (ES module), `.cts` (CommonJS)
//! - **JavaScript**: `.js`, `.jsx`, `.mjs` (ES module), `.cjs` (CommonJS)

/// File extensions for JavaScript/TypeScript files that should be analyzed
pub const JS_TS_EXTENSIONS: &[&str] = &[
    "ts",  // TypeScript
    "tsx", // TypeScript with JSX
    "mts", // TypeScript module
    "cts", // TypeScript CommonJS
    "js",  // JavaScript
    "jsx", // JavaScript with JSX
    "mjs", // JavaScript module
    "cjs", // JavaScript CommonJS
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_ts_extensions_includes_all_variants() {
        for ext in ["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"] {
            assert!(JS_TS_EXTENSIONS.contains(&ext), "missing '{}'", ext);
        }
        assert_eq!(JS_TS_EXTENSIONS.len(), 8);
    }
}
