use std::fs;
use std::path::{Path, PathBuf};

use crate::model::catalog::{Catalog, CatalogSource};
use crate::model::config::Config;
use crate::model::opening::Opening;

/// The catalog compiled into the binary
pub const BUILTIN_CATALOG: &str = include_str!("../../data/openings.json");

/// Error type for catalog loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not parse built-in catalog: {0}")]
    BuiltinParseError(serde_json::Error),
    #[error("catalog {0} contains no openings")]
    Empty(PathBuf),
}

/// Parse catalog JSON: an array of opening records.
pub fn parse_catalog(json: &str) -> Result<Vec<Opening>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load the catalog compiled into the binary.
pub fn load_builtin() -> Result<Catalog, CatalogError> {
    let openings = parse_catalog(BUILTIN_CATALOG).map_err(CatalogError::BuiltinParseError)?;
    Ok(Catalog::new(CatalogSource::Builtin, openings))
}

/// Load a catalog from a JSON file.
pub fn load_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let text = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let openings = parse_catalog(&text).map_err(|e| CatalogError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    if openings.is_empty() {
        return Err(CatalogError::Empty(path.to_path_buf()));
    }
    tracing::debug!(path = %path.display(), count = openings.len(), "loaded catalog");
    Ok(Catalog::new(CatalogSource::File(path.to_path_buf()), openings))
}

/// Load the catalog from `path` when given, else the built-in one.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(p) => load_catalog_file(p),
        None => load_builtin(),
    }
}

/// The catalog file to use: an explicit path beats `catalog.path` from
/// the config. `None` means the built-in catalog.
pub fn catalog_path(explicit: Option<&Path>, config: &Config) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.catalog.path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TWO_OPENINGS: &str = r#"[
  {"name": "English Opening", "eco": "A10", "moves": ["c4"], "ideas": "Flank play", "style": "flexible", "famous": ["Botvinnik"]},
  {"name": "Dutch Defense", "eco": "A80", "moves": ["d4", "f5"], "ideas": "Kingside grip", "style": "aggressive", "famous": []}
]"#;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = load_builtin().unwrap();
        assert_eq!(catalog.source, CatalogSource::Builtin);
        assert!(catalog.len() > 20);
    }

    #[test]
    fn load_from_file_keeps_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("openings.json");
        fs::write(&path, TWO_OPENINGS).unwrap();

        let catalog = load_catalog(Some(&path)).unwrap();
        assert_eq!(catalog.file(), Some(&path));
        let names: Vec<&str> = catalog.openings.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["English Opening", "Dutch Defense"]);
    }

    #[test]
    fn missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_catalog_file(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::ReadError { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "[{\"name\": \"x\"").unwrap();
        let err = load_catalog_file(&path).unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn explicit_catalog_beats_config() {
        let mut config = Config::default();
        assert_eq!(catalog_path(None, &config), None);
        config.catalog.path = Some(PathBuf::from("/cfg/openings.json"));
        assert_eq!(
            catalog_path(None, &config),
            Some(PathBuf::from("/cfg/openings.json"))
        );
        assert_eq!(
            catalog_path(Some(Path::new("mine.json")), &config),
            Some(PathBuf::from("mine.json"))
        );
    }

    #[test]
    fn empty_array_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.json");
        fs::write(&path, "[]").unwrap();
        assert!(matches!(
            load_catalog_file(&path).unwrap_err(),
            CatalogError::Empty(_)
        ));
    }
}
