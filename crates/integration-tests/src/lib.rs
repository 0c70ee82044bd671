//! Integration tests for Loomwear.
//!
//! Tests in `tests/` exercise the storefront library across crate
//! boundaries: the shop state store with its on-disk slot, and the
//! checkout flow driven from a populated cart. Every test gets its own
//! temporary data directory, so they are safe to run in parallel.
//!
//! ```bash
//! cargo test -p loomwear-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use loomwear_core::ProductId;
use loomwear_storefront::catalog::{Catalog, Product};
use loomwear_storefront::store::{ShopStore, StateSlot};

/// Open a store backed by a `shop_state` slot under `data_dir`.
#[must_use]
pub fn open_store(data_dir: &Path) -> ShopStore {
    ShopStore::open(StateSlot::new(data_dir, "shop_state"))
}

/// Fetch a catalog product by ID.
///
/// # Panics
///
/// Panics if the ID is not in the embedded catalog.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn catalog_product(id: &str) -> Product {
    Catalog::shared()
        .product(&ProductId::new(id))
        .unwrap()
        .clone()
}
