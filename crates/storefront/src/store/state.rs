//! Shop state and the pure reducer over it.
//!
//! All cart, wishlist, and recently-viewed mutations are expressed as
//! [`ShopAction`] values applied by [`ShopState::apply`]. The reducer
//! consumes the prior state and returns the next one, so no partial
//! mutation is ever observable; [`super::ShopStore`] owns the current
//! value and routes every mutation through it.

use serde::{Deserialize, Serialize};

use loomwear_core::{Price, ProductId};

use crate::catalog::Product;

/// Maximum number of recently-viewed entries retained.
pub const RECENTLY_VIEWED_CAP: usize = 10;

/// A single cart entry.
///
/// Identity is the line key (product ID, size, color): the same product
/// in a different size or color is a distinct line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The catalog product this line refers to.
    pub product: Product,
    /// Number of units. Always >= 1 in stored state; a line updated to
    /// zero is removed instead.
    pub quantity: u32,
    /// Selected size, if the product has size options.
    #[serde(default)]
    pub size: Option<String>,
    /// Selected color, if the product has color options.
    #[serde(default)]
    pub color: Option<String>,
}

impl CartLine {
    /// Whether this line matches the given line key.
    fn matches_key(&self, product_id: &ProductId, size: Option<&str>, color: Option<&str>) -> bool {
        &self.product.id == product_id
            && self.size.as_deref() == size
            && self.color.as_deref() == color
    }

    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// A mutation of the shop state.
///
/// One variant per store operation; the payload shapes mirror the
/// operation arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopAction {
    /// Add `quantity` units of a product variant to the cart, merging
    /// into an existing line with the same key.
    AddToCart {
        product: Product,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    },
    /// Remove the line with the exact key; no-op if absent.
    RemoveFromCart {
        product_id: ProductId,
        size: Option<String>,
        color: Option<String>,
    },
    /// Set the matching line's quantity exactly; zero removes the line.
    UpdateQuantity {
        product_id: ProductId,
        quantity: u32,
        size: Option<String>,
        color: Option<String>,
    },
    /// Empty the cart. Wishlist and recently viewed are untouched.
    ClearCart,
    /// Append to the wishlist unless the product is already present.
    AddToWishlist { product: Product },
    /// Remove the wishlist entry with the given ID; no-op if absent.
    RemoveFromWishlist { product_id: ProductId },
    /// Move or insert the product at the front of recently viewed.
    AddToRecentlyViewed { product: Product },
}

/// The complete shop state: cart, wishlist, and recently viewed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShopState {
    /// Cart lines, unique per line key, in insertion order.
    pub cart: Vec<CartLine>,
    /// Wishlist products, unique by ID, in insertion order.
    pub wishlist: Vec<Product>,
    /// Recently-viewed products, most recent first, capped at
    /// [`RECENTLY_VIEWED_CAP`], unique by ID.
    pub recently_viewed: Vec<Product>,
}

impl ShopState {
    /// Apply one action, producing the next state.
    #[must_use]
    pub fn apply(mut self, action: ShopAction) -> Self {
        match action {
            ShopAction::AddToCart {
                product,
                quantity,
                size,
                color,
            } => {
                let existing = self.cart.iter_mut().find(|line| {
                    line.matches_key(&product.id, size.as_deref(), color.as_deref())
                });

                if let Some(line) = existing {
                    line.quantity += quantity;
                } else {
                    self.cart.push(CartLine {
                        product,
                        quantity,
                        size,
                        color,
                    });
                }
                self
            }

            ShopAction::RemoveFromCart {
                product_id,
                size,
                color,
            } => {
                self.cart
                    .retain(|line| !line.matches_key(&product_id, size.as_deref(), color.as_deref()));
                self
            }

            ShopAction::UpdateQuantity {
                product_id,
                quantity,
                size,
                color,
            } => {
                if quantity == 0 {
                    return self.apply(ShopAction::RemoveFromCart {
                        product_id,
                        size,
                        color,
                    });
                }

                for line in &mut self.cart {
                    if line.matches_key(&product_id, size.as_deref(), color.as_deref()) {
                        line.quantity = quantity;
                    }
                }
                self
            }

            ShopAction::ClearCart => {
                self.cart.clear();
                self
            }

            ShopAction::AddToWishlist { product } => {
                if !self.wishlist.iter().any(|p| p.id == product.id) {
                    self.wishlist.push(product);
                }
                self
            }

            ShopAction::RemoveFromWishlist { product_id } => {
                self.wishlist.retain(|p| p.id != product_id);
                self
            }

            ShopAction::AddToRecentlyViewed { product } => {
                self.recently_viewed.retain(|p| p.id != product.id);
                self.recently_viewed.insert(0, product);
                self.recently_viewed.truncate(RECENTLY_VIEWED_CAP);
                self
            }
        }
    }

    /// Sum of line totals over the cart. Recomputed on demand.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart
            .iter()
            .fold(Price::zero(), |total, line| total + line.line_total())
    }

    /// Sum of quantities over the cart. Recomputed on demand.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|line| line.quantity).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use crate::catalog::Catalog;

    use super::*;

    fn product(id: &str) -> Product {
        Catalog::shared()
            .product(&ProductId::new(id))
            .unwrap()
            .clone()
    }

    fn add(product: Product, quantity: u32, size: Option<&str>) -> ShopAction {
        ShopAction::AddToCart {
            product,
            quantity,
            size: size.map(str::to_owned),
            color: None,
        }
    }

    #[test]
    fn test_add_to_cart_merges_by_key() {
        let state = ShopState::default()
            .apply(add(product("1"), 2, Some("M")))
            .apply(add(product("1"), 3, Some("M")));

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart.first().unwrap().quantity, 5);
    }

    #[test]
    fn test_add_to_cart_variants_are_distinct_lines() {
        let state = ShopState::default()
            .apply(add(product("1"), 1, Some("M")))
            .apply(add(product("1"), 1, Some("L")))
            .apply(add(product("1"), 1, None));

        assert_eq!(state.cart.len(), 3);
        assert_eq!(state.cart_count(), 3);
    }

    #[test]
    fn test_remove_from_cart_exact_key() {
        let state = ShopState::default()
            .apply(add(product("1"), 1, Some("M")))
            .apply(add(product("1"), 1, Some("L")));

        let state = state.apply(ShopAction::RemoveFromCart {
            product_id: ProductId::new("1"),
            size: Some("M".to_owned()),
            color: None,
        });

        assert_eq!(state.cart.len(), 1);
        assert_eq!(state.cart.first().unwrap().size.as_deref(), Some("L"));
    }

    #[test]
    fn test_remove_from_cart_absent_key_is_noop() {
        let state = ShopState::default().apply(add(product("1"), 1, None));
        let before = state.clone();

        let state = state.apply(ShopAction::RemoveFromCart {
            product_id: ProductId::new("999"),
            size: None,
            color: None,
        });

        assert_eq!(state, before);
    }

    #[test]
    fn test_update_quantity_replaces_exactly() {
        let state = ShopState::default()
            .apply(add(product("1"), 5, None))
            .apply(ShopAction::UpdateQuantity {
                product_id: ProductId::new("1"),
                quantity: 2,
                size: None,
                color: None,
            });

        assert_eq!(state.cart.first().unwrap().quantity, 2);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let state = ShopState::default()
            .apply(add(product("1"), 2, None))
            .apply(ShopAction::UpdateQuantity {
                product_id: ProductId::new("1"),
                quantity: 0,
                size: None,
                color: None,
            });

        assert!(state.cart.is_empty());
        assert_eq!(state.cart_count(), 0);
    }

    #[test]
    fn test_clear_cart_leaves_other_collections() {
        let state = ShopState::default()
            .apply(add(product("1"), 2, None))
            .apply(ShopAction::AddToWishlist {
                product: product("2"),
            })
            .apply(ShopAction::AddToRecentlyViewed {
                product: product("3"),
            })
            .apply(ShopAction::ClearCart);

        assert!(state.cart.is_empty());
        assert_eq!(state.wishlist.len(), 1);
        assert_eq!(state.recently_viewed.len(), 1);
    }

    #[test]
    fn test_wishlist_dedupes_by_id() {
        let state = ShopState::default()
            .apply(ShopAction::AddToWishlist {
                product: product("1"),
            })
            .apply(ShopAction::AddToWishlist {
                product: product("1"),
            });

        assert_eq!(state.wishlist.len(), 1);
    }

    #[test]
    fn test_remove_from_wishlist() {
        let state = ShopState::default()
            .apply(ShopAction::AddToWishlist {
                product: product("1"),
            })
            .apply(ShopAction::RemoveFromWishlist {
                product_id: ProductId::new("1"),
            });

        assert!(state.wishlist.is_empty());

        // removing an absent ID is a no-op
        let state = state.apply(ShopAction::RemoveFromWishlist {
            product_id: ProductId::new("999"),
        });
        assert!(state.wishlist.is_empty());
    }

    #[test]
    fn test_recently_viewed_caps_at_ten() {
        let mut state = ShopState::default();
        // 11 distinct viewings across the 12-product catalog
        for id in 1..=11 {
            state = state.apply(ShopAction::AddToRecentlyViewed {
                product: product(&id.to_string()),
            });
        }

        assert_eq!(state.recently_viewed.len(), RECENTLY_VIEWED_CAP);
        // newest first; the first viewing ("1") has been evicted
        assert_eq!(
            state.recently_viewed.first().unwrap().id,
            ProductId::new("11")
        );
        assert!(
            !state
                .recently_viewed
                .iter()
                .any(|p| p.id == ProductId::new("1"))
        );
    }

    #[test]
    fn test_recently_viewed_revisit_moves_to_front() {
        let mut state = ShopState::default();
        for id in ["1", "2", "3"] {
            state = state.apply(ShopAction::AddToRecentlyViewed {
                product: product(id),
            });
        }

        let state = state.apply(ShopAction::AddToRecentlyViewed {
            product: product("1"),
        });

        assert_eq!(state.recently_viewed.len(), 3);
        assert_eq!(
            state.recently_viewed.first().unwrap().id,
            ProductId::new("1")
        );
    }

    #[test]
    fn test_cart_total_is_exact() {
        // 24.99 * 2 + 49.99 = 99.97
        let state = ShopState::default()
            .apply(add(product("1"), 2, None))
            .apply(add(product("2"), 1, None));

        assert_eq!(state.cart_total().amount, Decimal::new(9997, 2));
        assert_eq!(state.cart_count(), 3);
    }

    #[test]
    fn test_empty_cart_aggregates() {
        let state = ShopState::default();
        assert_eq!(state.cart_total(), Price::zero());
        assert_eq!(state.cart_count(), 0);
    }

    #[test]
    fn test_state_serde_roundtrip() {
        let state = ShopState::default()
            .apply(add(product("1"), 2, Some("M")))
            .apply(ShopAction::AddToWishlist {
                product: product("2"),
            })
            .apply(ShopAction::AddToRecentlyViewed {
                product: product("3"),
            });

        let json = serde_json::to_string(&state).unwrap();
        let restored: ShopState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
