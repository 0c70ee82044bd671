//! Cart management commands.

#![allow(clippy::print_stdout)]

use loomwear_core::ProductId;
use loomwear_storefront::catalog::Catalog;
use loomwear_storefront::error::{AppError, Result};
use loomwear_storefront::store::ShopStore;

/// Add a product variant to the cart.
pub fn add(
    store: &mut ShopStore,
    id: &str,
    quantity: u32,
    size: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let product_id = ProductId::new(id);
    let product = Catalog::shared()
        .product(&product_id)
        .ok_or(AppError::ProductNotFound(product_id))?;

    store.add_to_cart(product.clone(), quantity, size, color);
    println!("Added {quantity} x {} to cart.", product.name);
    show(store);
    Ok(())
}

/// Remove a cart line by its key. Removing an absent line is a no-op.
pub fn remove(store: &mut ShopStore, id: &str, size: Option<String>, color: Option<String>) {
    store.remove_from_cart(ProductId::new(id), size, color);
    show(store);
}

/// Set a cart line's quantity; zero removes the line.
pub fn update(
    store: &mut ShopStore,
    id: &str,
    quantity: u32,
    size: Option<String>,
    color: Option<String>,
) {
    store.update_quantity(ProductId::new(id), quantity, size, color);
    show(store);
}

/// Empty the cart.
pub fn clear(store: &mut ShopStore) {
    store.clear_cart();
    println!("Cart cleared.");
}

/// Print the cart with derived totals.
pub fn show(store: &ShopStore) {
    let state = store.state();
    if state.cart.is_empty() {
        println!("Cart is empty.");
        return;
    }

    for line in &state.cart {
        let mut variant = String::new();
        if let Some(size) = &line.size {
            variant.push_str(&format!(" size={size}"));
        }
        if let Some(color) = &line.color {
            variant.push_str(&format!(" color={color}"));
        }
        println!(
            "{:>3} x {:<24}{}  @ {} = {}",
            line.quantity,
            line.product.name,
            variant,
            line.product.price,
            line.line_total()
        );
    }

    println!(
        "total: {} ({} items)",
        store.cart_total(),
        store.cart_count()
    );
}
