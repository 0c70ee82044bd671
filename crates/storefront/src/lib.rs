//! Loomwear Storefront library.
//!
//! The storefront core: a read-only product [`catalog`], the shop state
//! [`store`] (cart, wishlist, recently viewed) with file-backed
//! persistence, and a mock [`checkout`] gateway. There is no server and
//! no database; all state lives in memory and in a single JSON slot on
//! disk.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod store;
