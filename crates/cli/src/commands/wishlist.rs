//! Wishlist management commands.

#![allow(clippy::print_stdout)]

use loomwear_core::ProductId;
use loomwear_storefront::catalog::Catalog;
use loomwear_storefront::error::{AppError, Result};
use loomwear_storefront::store::ShopStore;

/// Add a product to the wishlist. Adding a product twice is a no-op.
pub fn add(store: &mut ShopStore, id: &str) -> Result<()> {
    let product_id = ProductId::new(id);
    let product = Catalog::shared()
        .product(&product_id)
        .ok_or(AppError::ProductNotFound(product_id))?;

    store.add_to_wishlist(product.clone());
    println!("{} is on the wishlist.", product.name);
    Ok(())
}

/// Remove a product from the wishlist. Removing an absent product is a
/// no-op.
pub fn remove(store: &mut ShopStore, id: &str) {
    store.remove_from_wishlist(ProductId::new(id));
    show(store);
}

/// Print the wishlist.
pub fn show(store: &ShopStore) {
    let wishlist = &store.state().wishlist;
    if wishlist.is_empty() {
        println!("Wishlist is empty.");
        return;
    }

    for product in wishlist {
        println!("{:>4}  {:<24} {}", product.id, product.name, product.price);
    }
}
