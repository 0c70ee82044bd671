//! Mock checkout gateway.
//!
//! Stands in for a real payment provider: it accepts the cart contents
//! and a customer email and hands back a session identifier plus a
//! redirect URL. In production this would call a backend that creates a
//! real payment session; the storefront core only depends on receiving
//! a handle to proceed.

use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use tracing::debug;

use loomwear_core::{CheckoutSessionId, Email, Price, ProductId};

use crate::store::CartLine;

/// Errors from the checkout gateway.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    /// Checkout was requested with an empty cart.
    #[error("cannot create a checkout session for an empty cart")]
    EmptyCart,
}

/// A line item as sent to the payment gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutItem {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Number of units.
    pub quantity: u32,
}

impl From<&CartLine> for CheckoutItem {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id.clone(),
            name: line.product.name.clone(),
            price: line.product.price,
            quantity: line.quantity,
        }
    }
}

/// A created checkout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Opaque session handle.
    pub session_id: CheckoutSessionId,
    /// Where to send the customer next.
    pub url: String,
}

/// Result of a payment verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentStatus {
    /// Whether the payment settled.
    pub success: bool,
}

/// Client for the (mock) checkout gateway.
#[derive(Debug, Clone)]
pub struct CheckoutClient {
    base_url: String,
}

impl CheckoutClient {
    /// Create a client. `base_url` is the storefront's public URL, used
    /// to build the post-checkout redirect.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Create a checkout session for the given items.
    ///
    /// Returns a mock session: a `cs_test_`-prefixed identifier and a
    /// redirect straight to the order-confirmed page.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if `items` is empty.
    pub fn create_session(
        &self,
        items: &[CheckoutItem],
        email: &Email,
    ) -> Result<CheckoutSession, CheckoutError> {
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(13)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        let session_id = CheckoutSessionId::new(format!("cs_test_{token}"));

        debug!(
            session_id = %session_id,
            email = %email,
            items = items.len(),
            "created mock checkout session"
        );

        Ok(CheckoutSession {
            session_id,
            url: format!("{}/order-confirmed", self.base_url),
        })
    }

    /// Verify a payment by session ID.
    ///
    /// The mock gateway reports every session as settled.
    #[must_use]
    pub fn verify_payment(&self, session_id: &CheckoutSessionId) -> PaymentStatus {
        debug!(session_id = %session_id, "verified mock payment");
        PaymentStatus { success: true }
    }
}
