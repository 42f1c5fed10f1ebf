//! Application state management
//!
//! Central state for the GUI application: the shopping cart, the cart
//! panel's visibility flag, and the product currently shown in the detail
//! dialog. All mutation happens synchronously from UI event handlers.

use vitrine_core::{Cart, Product};

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Products the user has added, in insertion order
    pub cart: Cart,

    /// Whether the cart side panel is shown
    pub cart_visible: bool,

    /// Product shown in the detail dialog, if any
    pub viewed_product: Option<Product>,
}

impl AppState {
    /// Append a product to the cart. Always succeeds; duplicates are kept.
    pub fn add_to_cart(&mut self, product: Product) {
        log::debug!("Added '{}' to cart ({} items)", product.name, self.cart.len() + 1);
        self.cart.add(product);
    }

    /// Flip the cart panel's visibility.
    pub fn toggle_cart_panel(&mut self) {
        self.cart_visible = !self.cart_visible;
    }

    /// Open the detail dialog for a product.
    pub fn open_product(&mut self, product: Product) {
        self.viewed_product = Some(product);
    }

    /// Dismiss the detail dialog. Leaves the cart and panel visibility alone.
    pub fn close_product(&mut self) {
        self.viewed_product = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: u32) -> Product {
        Product {
            name: name.to_string(),
            price,
            image: format!("https://example.com/{}.png", name.to_lowercase()),
        }
    }

    #[test]
    fn test_fresh_state() {
        let state = AppState::default();

        assert!(state.cart.is_empty());
        assert!(!state.cart_visible);
        assert!(state.viewed_product.is_none());
    }

    #[test]
    fn test_toggle_cart_panel_is_involutive() {
        let mut state = AppState::default();

        state.toggle_cart_panel();
        assert!(state.cart_visible);

        state.toggle_cart_panel();
        assert!(!state.cart_visible);
    }

    #[test]
    fn test_add_to_cart_appends() {
        let mut state = AppState::default();

        state.add_to_cart(product("Smartphone", 899));
        state.add_to_cart(product("Headphones", 299));

        assert_eq!(state.cart.len(), 2);
        assert_eq!(state.cart.total(), 1198);
    }

    #[test]
    fn test_open_and_close_product_leave_state_unchanged() {
        let mut state = AppState::default();
        state.add_to_cart(product("Camera", 799));
        let cart_before = state.cart.items().to_vec();
        let visible_before = state.cart_visible;

        state.open_product(product("Camera", 799));
        assert!(state.viewed_product.is_some());

        state.close_product();
        assert!(state.viewed_product.is_none());
        assert_eq!(state.cart.items(), cart_before.as_slice());
        assert_eq!(state.cart_visible, visible_before);
    }
}
