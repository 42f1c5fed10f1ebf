//! Product card widget.
//!
//! Renders one catalog entry as a card: image, name, price, and the
//! "View" / "Add to cart" actions. Purely presentational; the caller
//! inspects the returned [`CardResponse`] and reacts to the clicks.

use eframe::egui;
use vitrine_core::Product;

use crate::app;

/// Horizontal extent of one card in the catalog grid.
pub const CARD_WIDTH: f32 = 280.0;

/// Display height of the product image.
const IMAGE_SIZE: f32 = 120.0;

/// Clicks reported by a product card for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardResponse {
    pub view_clicked: bool,
    pub add_clicked: bool,
}

/// Draw a product card and report which of its actions were clicked.
pub fn show(ui: &mut egui::Ui, product: &Product) -> CardResponse {
    let mut response = CardResponse::default();

    egui::Frame::group(ui.style())
        .inner_margin(12.0)
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.set_width(CARD_WIDTH);

            ui.vertical_centered(|ui| {
                // The rendering layer fetches the image by URI; while it
                // loads (or if it fails) egui shows its own placeholder.
                ui.add(
                    egui::Image::new(product.image.as_str())
                        .fit_to_exact_size(egui::vec2(IMAGE_SIZE, IMAGE_SIZE)),
                );
            });

            ui.label(egui::RichText::new(&product.name).strong().size(16.0));
            ui.label(
                egui::RichText::new(product.price_label())
                    .color(app::PRICE_COLOR)
                    .size(14.0),
            );

            ui.horizontal(|ui| {
                if ui.button("View").clicked() {
                    response.view_clicked = true;
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Add to cart").clicked() {
                        response.add_clicked = true;
                    }
                });
            });
        });

    response
}
