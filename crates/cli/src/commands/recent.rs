//! Recently-viewed listing.

#![allow(clippy::print_stdout)]

use loomwear_storefront::store::ShopStore;

/// Print the recently-viewed products, most recent first.
pub fn show(store: &ShopStore) {
    let recent = &store.state().recently_viewed;
    if recent.is_empty() {
        println!("No recently viewed products.");
        return;
    }

    for product in recent {
        println!("{:>4}  {:<24} {}", product.id, product.name, product.price);
    }
}
