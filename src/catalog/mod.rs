//! Boss catalog loading
//!
//! The default catalog is compiled into the binary so the game plays out of
//! the box; a custom catalog file can be supplied instead. The loader is the
//! only place catalog JSON is parsed; the core receives already-loaded data.

mod loader;

pub use loader::{CatalogError, load_default, load_from_file, parse_catalog};

/// The embedded default catalog
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/bosses.json");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses_and_is_nonempty() {
        let catalog = load_default().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn embedded_names_are_unique_after_normalization() {
        use crate::core::normalize;
        use std::collections::HashSet;

        let catalog = load_default().unwrap();
        let mut seen = HashSet::new();
        for boss in catalog.entries() {
            assert!(
                seen.insert(normalize(&boss.name)),
                "duplicate normalized name: {}",
                boss.name
            );
        }
    }

    #[test]
    fn embedded_aliases_resolve() {
        let catalog = load_default().unwrap();
        for boss in catalog.entries() {
            if let Some(alias) = &boss.alias {
                let found = catalog.find(alias).unwrap();
                assert_eq!(found.name, boss.name, "alias '{alias}' resolves elsewhere");
            }
        }
    }

    #[test]
    fn embedded_attributes_are_nonempty() {
        let catalog = load_default().unwrap();
        for boss in catalog.entries() {
            assert!(!boss.name.trim().is_empty());
            assert!(!boss.region.trim().is_empty());
            assert!(!boss.kind.trim().is_empty());
            assert!(!boss.damage.trim().is_empty());
        }
    }
}
