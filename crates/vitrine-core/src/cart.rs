//! In-memory shopping cart.
//!
//! The cart is an append-only ordered list of products. Adding the same
//! product twice yields two entries; there is no quantity tracking, removal,
//! or clearing. The rendered cart view is always derived from a freshly
//! computed [`CartSummary`].

use crate::models::Product;

/// Ordered collection of products the user has added.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product to the cart. Duplicates are kept as separate entries.
    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Cart entries in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all entry prices.
    pub fn total(&self) -> u64 {
        self.items.iter().map(|p| u64::from(p.price)).sum()
    }

    /// Snapshot of the cart for display.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            rows: self
                .items
                .iter()
                .map(|p| SummaryRow {
                    name: p.name.clone(),
                    price: p.price,
                })
                .collect(),
            total: self.total(),
        }
    }
}

/// Display snapshot of a cart: one row per entry plus the running total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    /// One row per cart entry, in insertion order
    pub rows: Vec<SummaryRow>,

    /// Sum of all row prices
    pub total: u64,
}

impl CartSummary {
    /// True when the cart has no entries and the view should show the
    /// empty-state placeholder instead of rows and a total.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total formatted for display, e.g. "Total: $1198".
    pub fn total_label(&self) -> String {
        format!("Total: ${}", self.total)
    }
}

/// A single name/price line in the cart summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub name: String,
    pub price: u32,
}

impl SummaryRow {
    /// Price formatted for display, e.g. "$299".
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}
