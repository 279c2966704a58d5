use std::path::PathBuf;

use super::opening::Opening;

/// Where a catalog was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog compiled into the binary
    Builtin,
    /// A user-supplied JSON file
    File(PathBuf),
}

/// The immutable, ordered list of openings the app browses
#[derive(Debug, Clone)]
pub struct Catalog {
    pub source: CatalogSource,
    pub openings: Vec<Opening>,
}

impl Catalog {
    pub fn new(source: CatalogSource, openings: Vec<Opening>) -> Self {
        Catalog { source, openings }
    }

    pub fn len(&self) -> usize {
        self.openings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.openings.is_empty()
    }

    /// Path of the backing file, if any
    pub fn file(&self) -> Option<&PathBuf> {
        match &self.source {
            CatalogSource::File(path) => Some(path),
            CatalogSource::Builtin => None,
        }
    }

    /// Find an opening for a free-form lookup: an exact ECO code or name
    /// (case-insensitive) wins, otherwise the first name containing the text.
    pub fn lookup(&self, query: &str) -> Option<&Opening> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return None;
        }
        self.openings
            .iter()
            .find(|o| o.eco.to_lowercase() == q || o.name.to_lowercase() == q)
            .or_else(|| {
                self.openings
                    .iter()
                    .find(|o| o.name.to_lowercase().contains(&q))
            })
    }
}
