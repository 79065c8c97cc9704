//! Products domain module.
//!
//! This crate contains the product record shape and its field constraints,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;

pub use product::{Product, ProductDraft, ProductPatch};
