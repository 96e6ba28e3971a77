//! Application state for the producer service.
//!
//! This module provides the shared state structure that axum handlers use to
//! reach the hat catalog.

use std::path::Path;
use std::sync::Arc;

use hats_lib::{Catalog, Error as LibError};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Failed to load or validate the catalog file.
    CatalogLoad(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CatalogLoad(e) => write!(f, "failed to load hat catalog: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CatalogLoad(e) => Some(e),
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::CatalogLoad(err)
    }
}

/// Shared application state for all producer handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor. The catalog is never mutated after
/// construction, so no lock guards it.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use hats_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let hat = state.catalog().find_by_id(1);
///     // ... use hat
/// }
///
/// let app = Router::new()
///     .route("/api/v1/hats/{id}", get(handler))
///     .with_state(AppState::seeded());
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Catalog,
    service: String,
}

/// Service name used when none is given.
pub const DEFAULT_SERVICE_NAME: &str = "producer";

impl AppState {
    /// State backed by the built-in seed catalog.
    pub fn seeded() -> Self {
        Self::from_catalog(Catalog::seeded())
    }

    /// Load application state from an optional catalog file.
    ///
    /// Falls back to the seed catalog when no path is given.
    pub fn load(catalog_path: Option<&Path>) -> Result<Self, AppStateError> {
        let Some(path) = catalog_path else {
            tracing::info!("no catalog file configured, using seed catalog");
            return Ok(Self::seeded());
        };

        tracing::info!(path = %path.display(), "loading hat catalog");
        let catalog = Catalog::from_path(path)?;
        tracing::info!(hats = catalog.len(), "hat catalog loaded successfully");

        Ok(Self::from_catalog(catalog))
    }

    /// Create application state from a pre-built catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self::new(catalog, DEFAULT_SERVICE_NAME)
    }

    /// Create application state for a named service.
    ///
    /// The name labels business metrics, so the contract stub can be told
    /// apart from the live producer.
    pub fn new(catalog: Catalog, service: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                service: service.into(),
            }),
        }
    }

    /// Access the loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Name of the service this state belongs to.
    pub fn service(&self) -> &str {
        &self.inner.service
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service", &self.inner.service)
            .field("hat_count", &self.inner.catalog.len())
            .field("source", &self.inner.catalog.source())
            .finish()
    }
}
