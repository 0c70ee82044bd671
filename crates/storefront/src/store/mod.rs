//! Shop state store: cart, wishlist, and recently viewed.
//!
//! [`ShopStore`] is the single owner of the [`ShopState`] for a
//! process. Opening the store reads the persistent slot once; every
//! mutation runs the pure reducer and then writes the whole state back,
//! fire-and-forget. Write failures are logged and the in-memory state
//! stays authoritative for the session.

mod slot;
mod state;

pub use slot::{SCHEMA_VERSION, SlotError, StateSlot};
pub use state::{CartLine, RECENTLY_VIEWED_CAP, ShopAction, ShopState};

use tracing::warn;

use loomwear_core::{Price, ProductId};

use crate::catalog::Product;

/// The shop state store.
///
/// All mutations go through [`ShopStore::dispatch`] (or the named
/// convenience methods, which build the action for you). The store is
/// driven by a single logical actor issuing one operation at a time, so
/// there is no locking.
#[derive(Debug)]
pub struct ShopStore {
    state: ShopState,
    slot: StateSlot,
}

impl ShopStore {
    /// Open the store, loading state from the slot.
    ///
    /// An absent or corrupt slot silently yields the empty default
    /// state; see [`StateSlot::load`].
    #[must_use]
    pub fn open(slot: StateSlot) -> Self {
        let state = slot.load();
        Self { state, slot }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &ShopState {
        &self.state
    }

    /// Apply one action and persist the resulting state.
    pub fn dispatch(&mut self, action: ShopAction) {
        let prior = std::mem::take(&mut self.state);
        self.state = prior.apply(action);

        // Fire-and-forget write; a failure never reaches the caller.
        if let Err(err) = self.slot.save(&self.state) {
            warn!(error = %err, "failed to persist shop state, keeping in-memory state");
        }
    }

    /// Add `quantity` units of a product variant to the cart.
    ///
    /// Merges into an existing line with the same (product, size,
    /// color) key; otherwise appends a new line. The quantity is taken
    /// as given; callers are expected to pass at least 1.
    pub fn add_to_cart(
        &mut self,
        product: Product,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    ) {
        self.dispatch(ShopAction::AddToCart {
            product,
            quantity,
            size,
            color,
        });
    }

    /// Remove the cart line with the exact key; no-op if absent.
    pub fn remove_from_cart(
        &mut self,
        product_id: ProductId,
        size: Option<String>,
        color: Option<String>,
    ) {
        self.dispatch(ShopAction::RemoveFromCart {
            product_id,
            size,
            color,
        });
    }

    /// Set the matching line's quantity exactly; zero removes it.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    ) {
        self.dispatch(ShopAction::UpdateQuantity {
            product_id,
            quantity,
            size,
            color,
        });
    }

    /// Empty the cart, leaving wishlist and recently viewed untouched.
    pub fn clear_cart(&mut self) {
        self.dispatch(ShopAction::ClearCart);
    }

    /// Append to the wishlist; silently no-op if already present.
    pub fn add_to_wishlist(&mut self, product: Product) {
        self.dispatch(ShopAction::AddToWishlist { product });
    }

    /// Remove the wishlist entry with the given ID; no-op if absent.
    pub fn remove_from_wishlist(&mut self, product_id: ProductId) {
        self.dispatch(ShopAction::RemoveFromWishlist { product_id });
    }

    /// Record a product view, moving it to the front of the
    /// recently-viewed list.
    pub fn add_to_recently_viewed(&mut self, product: Product) {
        self.dispatch(ShopAction::AddToRecentlyViewed { product });
    }

    /// Sum of line totals over the cart.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.state.cart_total()
    }

    /// Sum of quantities over the cart.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.state.cart_count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::catalog::Catalog;

    use super::*;

    fn product(id: &str) -> Product {
        Catalog::shared()
            .product(&ProductId::new(id))
            .unwrap()
            .clone()
    }

    fn open_store(dir: &tempfile::TempDir) -> ShopStore {
        ShopStore::open(StateSlot::new(dir.path(), "shop_state"))
    }

    #[test]
    fn test_mutations_persist_across_store_instances() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = open_store(&dir);
        store.add_to_cart(product("1"), 2, Some("M".to_owned()), None);
        store.add_to_wishlist(product("4"));
        store.add_to_recently_viewed(product("2"));
        let saved = store.state().clone();

        let reopened = open_store(&dir);
        assert_eq!(reopened.state(), &saved);
        assert_eq!(reopened.cart_count(), 2);
    }

    #[test]
    fn test_open_with_corrupt_slot_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let slot = StateSlot::new(dir.path(), "shop_state");
        std::fs::write(slot.path(), "garbage").unwrap();

        let store = ShopStore::open(slot);
        assert_eq!(store.state(), &ShopState::default());
    }

    #[test]
    fn test_every_mutation_writes_the_slot() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = open_store(&dir);
        store.add_to_cart(product("1"), 1, None, None);
        // the slot on disk already reflects the first mutation
        assert_eq!(open_store(&dir).cart_count(), 1);

        store.clear_cart();
        assert_eq!(open_store(&dir).cart_count(), 0);
    }

    #[test]
    fn test_named_operations_match_reducer_semantics() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = open_store(&dir);

        store.add_to_cart(product("1"), 2, None, None);
        store.add_to_cart(product("1"), 3, None, None);
        assert_eq!(store.state().cart.len(), 1);
        assert_eq!(store.cart_count(), 5);

        store.update_quantity(ProductId::new("1"), 0, None, None);
        assert!(store.state().cart.is_empty());

        store.add_to_wishlist(product("2"));
        store.remove_from_wishlist(ProductId::new("2"));
        assert!(store.state().wishlist.is_empty());
    }
}
