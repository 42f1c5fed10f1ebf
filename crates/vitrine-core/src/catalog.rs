//! Compile-time embedded product catalog.
//!
//! The catalog is fixed for the lifetime of the process. It is embedded from
//! the repository's `catalog/products.yml` at compile time, so the binary
//! ships with its products and never touches the file system at runtime.

use crate::models::Product;
use once_cell::sync::Lazy;

// Embed the catalog YAML at compile time
const PRODUCTS_YAML: &str = include_str!("../../../catalog/products.yml");

/// The full product catalog, in display order.
pub static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    match load_catalog_from_str(PRODUCTS_YAML) {
        Ok(products) => products,
        Err(e) => {
            log::warn!("Failed to load embedded catalog: {}", e);
            Vec::new()
        }
    }
});

/// All catalog products, in display order.
pub fn products() -> &'static [Product] {
    &CATALOG
}

/// Parse a catalog from YAML contents.
pub fn load_catalog_from_str(contents: &str) -> Result<Vec<Product>, String> {
    serde_yaml::from_str(contents).map_err(|e| format!("Failed to parse catalog YAML: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        // Force initialization
        let count = CATALOG.len();
        assert!(count > 0, "Should have loaded at least one product");
    }

    #[test]
    fn test_catalog_contents() {
        let products = products();

        assert_eq!(products.len(), 5);
        assert_eq!(products[0].name, "Smartphone");
        assert_eq!(products[0].price, 899);
        assert_eq!(products[4].name, "Watch");
        assert_eq!(products[4].price, 199);
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let names: Vec<&str> = products().iter().map(|p| p.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["Smartphone", "Laptop", "Headphones", "Camera", "Watch"]
        );
    }

    #[test]
    fn test_catalog_images_are_uris() {
        for product in products() {
            assert!(
                product.image.starts_with("https://"),
                "Product '{}' should reference its image by URI",
                product.name
            );
        }
    }

    #[test]
    fn test_load_catalog_rejects_malformed_yaml() {
        let result = load_catalog_from_str("- name: [broken");
        assert!(result.is_err());
    }
}
