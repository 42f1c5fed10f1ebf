//! Product record type.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Products carry no unique id; identity is by value. The catalog may in
/// principle contain entries that compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name (e.g., "Smartphone")
    pub name: String,

    /// Whole-unit price, non-negative
    pub price: u32,

    /// Image URI, resolved by the rendering layer at display time
    pub image: String,
}

impl Product {
    /// Price formatted for display, e.g. "$899".
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_label() {
        let product = Product {
            name: "Smartphone".to_string(),
            price: 899,
            image: "https://example.com/phone.png".to_string(),
        };

        assert_eq!(product.price_label(), "$899");
    }
}
