//! Unified application error type.
//!
//! Covers the failures a caller can actually see: configuration
//! problems, checkout rejections, unknown catalog IDs, and invalid
//! input. Persistence failures are deliberately absent — the store
//! recovers from bad reads with the default state and logs failed
//! writes without surfacing them.

use thiserror::Error;

use loomwear_core::{EmailError, ProductId};

use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Checkout gateway rejected the request.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// A product ID not present in the catalog.
    #[error("Unknown product: {0}")]
    ProductNotFound(ProductId),

    /// The supplied email address is invalid.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
