use crate::error::{Error, Result};

/// Reduce a module specifier to the installable package it points into.
///
/// Returns `Ok(None)` for relative specifiers (`./x`, `../x`), which are not packages.
/// Scoped packages keep their scope: `@scope/name/deep` becomes `@scope/name`.
pub fn package_name(specifier: &str) -> Result<Option<String>> {
    let parts: Vec<&str> = specifier.split(['/', '\\']).filter(|p| !p.is_empty()).collect();

    let Some(first) = parts.first() else {
        return Err(Error::InvalidSpecifier { specifier: specifier.to_string() });
    };

    if matches!(*first, "." | "..") {
        return Ok(None);
    }

    if first.starts_with('@')
        && let Some(second) = parts.get(1)
    {
        return Ok(Some(format!("{first}/{second}")));
    }

    Ok(Some(first.to_string()))
}
