//! Contract fixtures shared by producer stubs and consumer tests.
//!
//! The contract pins the request shapes and status codes of the lookup
//! endpoint, not the live seed data: a stub producer answers with these
//! fixture hats, and consumers are verified against the stub.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::hat::{Hat, HatId};

/// Path template of the lookup endpoint.
pub const HAT_PATH_TEMPLATE: &str = "/api/v1/hats/{id}";

/// Default port the stub producer listens on.
pub const STUB_PORT: u16 = 8100;

/// Identifier the contract expects to be absent.
pub const MISSING_HAT_ID: HatId = 3;

/// Build the request path for a hat lookup.
pub fn hat_path(id: HatId) -> String {
    format!("/api/v1/hats/{}", id)
}

/// Hats the stub producer serves.
pub fn fixture_hats() -> Vec<Hat> {
    vec![
        Hat::new(1, "Test Hat 1", 10, "striped"),
        Hat::new(2, "Test Hat 2", 7, "green"),
    ]
}

/// Catalog backing the stub producer.
pub fn catalog() -> Result<Catalog> {
    Catalog::from_hats(fixture_hats())
}
