//! Read-only hat catalog.
//!
//! A [`Catalog`] is built once at process start and never mutated
//! afterwards, so it can be shared between request handlers without
//! locking.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::hat::{Hat, HatId};

/// Collection of hats keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hats: HashMap<HatId, Hat>,
    source: Option<PathBuf>,
}

impl Catalog {
    /// The catalog every producer starts with when no file is configured.
    pub fn seeded() -> Self {
        let hats = [
            Hat::new(1, "Sombrero", 30, "red"),
            Hat::new(2, "Beanie", 5, "blue"),
        ];

        Self {
            hats: hats.into_iter().map(|hat| (hat.id, hat)).collect(),
            source: None,
        }
    }

    /// Build a catalog from arbitrary records.
    ///
    /// Every record must pass [`Hat::validate`] and identifiers must be
    /// unique.
    pub fn from_hats<I>(hats: I) -> Result<Self>
    where
        I: IntoIterator<Item = Hat>,
    {
        let mut map = HashMap::new();

        for hat in hats {
            hat.validate()?;
            if map.contains_key(&hat.id) {
                return Err(Error::DuplicateHatId { id: hat.id });
            }
            map.insert(hat.id, hat);
        }

        Ok(Self {
            hats: map,
            source: None,
        })
    }

    /// Load a catalog from a JSON file holding an array of hat records.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        debug!(path = %path.display(), hats = catalog.len(), "loaded hat catalog");
        Ok(catalog)
    }

    /// Load a catalog from a reader yielding a JSON array of hat records.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let hats: Vec<Hat> = serde_json::from_reader(reader)?;
        Self::from_hats(hats)
    }

    /// Look up a hat by identifier.
    ///
    /// `None` means the identifier is not in the catalog, which is an
    /// ordinary outcome rather than a failure.
    pub fn find_by_id(&self, id: HatId) -> Option<&Hat> {
        self.hats.get(&id)
    }

    /// Identifiers in ascending order.
    pub fn ids(&self) -> Vec<HatId> {
        let mut ids: Vec<HatId> = self.hats.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.hats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hats.is_empty()
    }

    /// File the catalog was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_holds_two_hats() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.ids(), vec![1, 2]);
        assert!(catalog.source().is_none());
    }

    #[test]
    fn seeded_keys_match_record_ids() {
        let catalog = Catalog::seeded();
        for id in catalog.ids() {
            assert_eq!(catalog.find_by_id(id).map(|h| h.id), Some(id));
        }
    }

    #[test]
    fn from_hats_rejects_duplicates() {
        let err = Catalog::from_hats([
            Hat::new(1, "Sombrero", 30, "red"),
            Hat::new(1, "Beanie", 5, "blue"),
        ])
        .unwrap_err();

        match err {
            Error::DuplicateHatId { id } => assert_eq!(id, 1),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn from_hats_accepts_empty_input() {
        let catalog = Catalog::from_hats(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.find_by_id(1).is_none());
    }

    #[test]
    fn from_reader_rejects_malformed_json() {
        let err = Catalog::from_reader("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
