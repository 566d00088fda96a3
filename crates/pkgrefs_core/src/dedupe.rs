use indexmap::IndexMap;
use log::trace;

use crate::types::{PackageReference, ReferenceTag};

/// Collapse repeated package names into one entry each.
///
/// The merged tag is `Normal` if any occurrence was `Normal`, otherwise `TypeOnly`.
/// Output keeps the order in which each name was first seen. Empty names are skipped.
pub fn dedupe<I>(references: I) -> Vec<PackageReference>
where
    I: IntoIterator<Item = PackageReference>,
{
    let merged = references.into_iter().fold(
        IndexMap::<String, ReferenceTag>::new(),
        |mut acc, PackageReference { name, tag }| {
            if name.is_empty() {
                return acc;
            }
            match acc.get_mut(&name) {
                Some(recorded) => {
                    // Normal is sticky
                    if *recorded != ReferenceTag::Normal {
                        *recorded = tag;
                    }
                }
                None => {
                    trace!("First reference to package '{}' ({})", name, tag);
                    acc.insert(name, tag);
                }
            }
            acc
        },
    );

    merged.into_iter().map(|(name, tag)| PackageReference { name, tag }).collect()
}
