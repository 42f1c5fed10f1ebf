//! Vitrine Core Library
//!
//! Catalog and cart functionality for the Vitrine demo storefront.

pub mod cart;
pub mod catalog;
pub mod models;

// Re-export commonly used types
pub use cart::{Cart, CartSummary, SummaryRow};
pub use models::Product;
