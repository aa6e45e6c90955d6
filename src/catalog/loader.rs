//! Catalog parsing and file loading

use super::EMBEDDED_CATALOG;
use crate::core::{Boss, Catalog};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error loading the boss catalog
#[derive(Debug)]
pub enum CatalogError {
    /// The catalog parsed but contains no entries; the puzzle cannot start
    Empty,
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "catalog contains no bosses"),
            Self::Io(err) => write!(f, "failed to read catalog: {err}"),
            Self::Parse(err) => write!(f, "failed to parse catalog: {err}"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<io::Error> for CatalogError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Parse catalog JSON (an ordered array of boss records)
///
/// # Errors
/// Returns `Parse` on malformed JSON and `Empty` for a zero-entry catalog.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let entries: Vec<Boss> = serde_json::from_str(text)?;
    if entries.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(Catalog::new(entries))
}

/// Load the embedded default catalog
///
/// # Errors
/// Only fails if the embedded data is invalid, which the test suite pins.
pub fn load_default() -> Result<Catalog, CatalogError> {
    parse_catalog(EMBEDDED_CATALOG)
}

/// Load a custom catalog from a JSON file
///
/// # Errors
/// Returns `Io` if the file cannot be read, otherwise as [`parse_catalog`].
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let text = fs::read_to_string(path)?;
    parse_catalog(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_catalog() {
        let catalog = parse_catalog(
            r#"[{"name":"Fire Giant","region":"Mountaintops of the Giants",
                 "type":"Giant","damage":"Fire","Remembrance":true}]"#,
        )
        .unwrap();

        let boss = catalog.find("fire giant").unwrap();
        assert_eq!(boss.kind, "Giant");
        assert!(boss.remembrance);
        assert_eq!(boss.alias, None);
    }

    #[test]
    fn parse_rejects_empty_array() {
        assert!(matches!(parse_catalog("[]"), Err(CatalogError::Empty)));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(parse_catalog("not json"), Err(CatalogError::Parse(_))));
        assert!(matches!(
            parse_catalog(r#"[{"name":"missing fields"}]"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/bosses.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn load_from_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(
            &path,
            r#"[{"name":"Tree Sentinel","region":"Limgrave","type":"Knight",
                 "damage":"Physical","Remembrance":false,"alias":"Sentinel"}]"#,
        )
        .unwrap();

        let catalog = load_from_file(&path).unwrap();
        assert_eq!(catalog.find("sentinel").unwrap().name, "Tree Sentinel");
    }
}
