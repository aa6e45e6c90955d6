//! Boss catalog entries and name normalization
//!
//! A `Boss` is one guessable entry: a display name plus the attributes the
//! player receives feedback on. Identity is the *normalized* name, so
//! "Margit, the Fell Omen" and "margit the fell omen" are the same guess.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry in the boss catalog
///
/// Entries are immutable after load. The JSON field names match the original
/// catalog file (`type` and capitalized `Remembrance`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boss {
    pub name: String,
    pub region: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub damage: String,
    #[serde(rename = "Remembrance")]
    pub remembrance: bool,
    /// Optional short name accepted as an alternate guess spelling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Boss {
    /// The canonical identity of this entry
    #[must_use]
    pub fn normalized_name(&self) -> String {
        normalize(&self.name)
    }

    /// Whether two entries are the same guess (normalized-name equality)
    #[must_use]
    pub fn same_boss(&self, other: &Self) -> bool {
        self.normalized_name() == other.normalized_name()
    }
}

impl fmt::Display for Boss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Normalize a boss name for comparison and lookup
///
/// Trims, lowercases, strips characters that are neither word characters
/// (alphanumeric or underscore) nor whitespace, and collapses internal
/// whitespace runs to a single space.
///
/// # Examples
/// ```
/// use bossdle::core::normalize;
///
/// assert_eq!(normalize("Margit, the Fell Omen"), "margit the fell omen");
/// assert_eq!(normalize("  Fire   Giant  "), "fire giant");
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_space = false;

    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            if !out.is_empty() {
                pending_space = true;
            }
        } else if ch.is_alphanumeric() || ch == '_' {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.extend(ch.to_lowercase());
        }
        // Punctuation and symbols are dropped entirely
    }

    out
}

/// The ordered boss catalog with a normalized-name lookup index
///
/// Order matters: day→target selection indexes into this sequence, so the
/// catalog must be treated as append-only across deployments.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Boss>,
    index: FxHashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from an ordered list of entries
    ///
    /// Both the normalized name and the normalized alias (when present) are
    /// indexed for lookup. On a collision the earlier entry wins.
    #[must_use]
    pub fn new(entries: Vec<Boss>) -> Self {
        let mut index = FxHashMap::default();
        for (i, boss) in entries.iter().enumerate() {
            index.entry(boss.normalized_name()).or_insert(i);
            if let Some(alias) = &boss.alias {
                index.entry(normalize(alias)).or_insert(i);
            }
        }
        Self { entries, index }
    }

    /// Look up an entry by raw guess text
    ///
    /// The query is normalized before lookup; a return of `None` is the
    /// user-facing "invalid boss name" rejection.
    #[must_use]
    pub fn find(&self, query: &str) -> Option<&Boss> {
        self.index.get(&normalize(query)).map(|&i| &self.entries[i])
    }

    /// All entries in catalog order
    #[must_use]
    pub fn entries(&self) -> &[Boss] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boss(name: &str) -> Boss {
        Boss {
            name: name.to_string(),
            region: "Limgrave".to_string(),
            kind: "Beast".to_string(),
            damage: "Physical".to_string(),
            remembrance: false,
            alias: None,
        }
    }

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(
            normalize("Margit, the Fell Omen"),
            normalize("margit the fell omen")
        );
        assert_eq!(normalize("Margit, the Fell Omen"), "margit the fell omen");
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  Fire \t  Giant "), "fire giant");
        assert_eq!(normalize("Fire\nGiant"), "fire giant");
    }

    #[test]
    fn normalize_keeps_word_characters() {
        assert_eq!(normalize("Astel_2"), "astel_2");
        assert_eq!(normalize("Mohg, Lord of Blood!"), "mohg lord of blood");
    }

    #[test]
    fn normalize_leading_punctuation() {
        assert_eq!(normalize("-- Margit"), "margit");
        assert_eq!(normalize("...!"), "");
    }

    #[test]
    fn same_boss_ignores_formatting() {
        let a = boss("Margit, the Fell Omen");
        let b = boss("MARGIT the Fell   Omen");
        assert!(a.same_boss(&b));
    }

    #[test]
    fn catalog_find_by_name() {
        let catalog = Catalog::new(vec![boss("Fire Giant"), boss("Tree Sentinel")]);
        assert_eq!(catalog.find("fire giant").unwrap().name, "Fire Giant");
        assert_eq!(catalog.find("  TREE Sentinel ").unwrap().name, "Tree Sentinel");
        assert!(catalog.find("Malenia").is_none());
    }

    #[test]
    fn catalog_find_by_alias() {
        let mut margit = boss("Margit, the Fell Omen");
        margit.alias = Some("Margit".to_string());
        let catalog = Catalog::new(vec![margit]);

        assert!(catalog.find("margit").is_some());
        assert!(catalog.find("margit the fell omen").is_some());
    }

    #[test]
    fn catalog_collision_keeps_first_entry() {
        let catalog = Catalog::new(vec![boss("Fire Giant"), boss("FIRE GIANT")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("fire giant").unwrap().name, "Fire Giant");
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.find("anything").is_none());
    }
}
