//! Checkout command.

#![allow(clippy::print_stdout)]

use loomwear_core::Email;
use loomwear_storefront::checkout::{CheckoutClient, CheckoutItem};
use loomwear_storefront::error::Result;
use loomwear_storefront::store::ShopStore;

/// Create a checkout session from the cart and clear it on success.
pub fn run(store: &mut ShopStore, client: &CheckoutClient, email: &str) -> Result<()> {
    let email = Email::parse(email)?;

    let items: Vec<CheckoutItem> = store.state().cart.iter().map(CheckoutItem::from).collect();
    let total = store.cart_total();

    let session = client.create_session(&items, &email)?;

    // Mirrors the storefront flow: a successful session hand-off empties
    // the cart before redirecting.
    store.clear_cart();

    println!("Checkout session {} created.", session.session_id);
    println!("  charged to: {email}");
    println!("  total:      {total}");
    println!("  continue:   {}", session.url);
    Ok(())
}
