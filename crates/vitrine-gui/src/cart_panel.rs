//! Cart summary panel.
//!
//! Renders a [`CartSummary`] snapshot: either the empty-state placeholder,
//! or one name/price row per entry followed by a separator and the total.

use eframe::egui;
use vitrine_core::CartSummary;

use crate::app;

/// Draw the cart summary into the side panel.
pub fn show(ui: &mut egui::Ui, summary: &CartSummary) {
    if summary.is_empty() {
        ui.label(egui::RichText::new("Cart is empty").color(egui::Color32::GRAY));
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("cart_scroll")
        .show(ui, |ui| {
            for row in &summary.rows {
                ui.horizontal(|ui| {
                    ui.label(&row.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(row.price_label()).color(app::PRICE_COLOR),
                        );
                    });
                });
            }

            ui.separator();
            ui.label(egui::RichText::new(summary.total_label()).strong());
        });
}
