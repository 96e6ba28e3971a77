//! Hat catalog library entry points.
//!
//! This crate owns the hat record type, the read-only catalog that answers
//! lookups by identifier, and the contract fixtures that stub producers
//! serve. The HTTP services depend on the items exported here instead of
//! keeping their own copies of the model.

#![deny(warnings)]

pub mod catalog;
pub mod contract;
pub mod error;
pub mod hat;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use hat::{Hat, HatId};
