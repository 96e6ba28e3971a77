use std::path::PathBuf;

use thiserror::Error;

use crate::hat::HatId;

/// Convenient result alias for the hat catalog library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Lookups never produce an error: an unknown identifier is reported as an
/// absent result by [`crate::Catalog::find_by_id`]. These variants cover
/// building a catalog from untrusted records.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a record violates the hat data model.
    #[error("invalid hat {id}: {message}")]
    InvalidHat { id: HatId, message: String },

    /// Raised when two records share an identifier.
    #[error("duplicate hat id encountered: {id}")]
    DuplicateHatId { id: HatId },

    /// Raised when a catalog file does not exist.
    #[error("catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
