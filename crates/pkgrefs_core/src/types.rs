use serde::Serialize;
use std::fmt;

/// How the bindings of a module reference are used.
///
/// `Normal` dominates `TypeOnly` when references to the same package are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceTag {
    /// Bindings exist at runtime.
    Normal,
    /// Bindings are erased at compile time (`import type`, `import { type T }`).
    TypeOnly,
}

impl ReferenceTag {
    pub fn is_type_only(self) -> bool {
        matches!(self, ReferenceTag::TypeOnly)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReferenceTag::Normal => "normal",
            ReferenceTag::TypeOnly => "type-only",
        }
    }
}

impl fmt::Display for ReferenceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A module specifier exactly as written at a reference site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReference {
    pub specifier: String,
    pub tag: ReferenceTag,
}

/// A top-level package name with its merged tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PackageReference {
    pub name: String,
    pub tag: ReferenceTag,
}

impl PackageReference {
    pub fn new(name: impl Into<String>, tag: ReferenceTag) -> Self {
        Self { name: name.into(), tag }
    }

    pub fn is_type_only(&self) -> bool {
        self.tag.is_type_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_display() {
        assert_eq!(ReferenceTag::Normal.to_string(), "normal");
        assert_eq!(ReferenceTag::TypeOnly.to_string(), "type-only");
    }

    #[test]
    fn test_package_reference_is_type_only() {
        assert!(PackageReference::new("p", ReferenceTag::TypeOnly).is_type_only());
        assert!(!PackageReference::new("p", ReferenceTag::Normal).is_type_only());
    }
}
