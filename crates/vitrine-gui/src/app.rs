//! Main application window.
//!
//! Owns the [`AppState`] and lays out the storefront: header bar, catalog
//! grid, cart side panel, and the product-detail dialog.

use eframe::egui;
use vitrine_core::catalog;

use crate::card;
use crate::cart_panel;
use crate::state::AppState;

/// Price text color, used on cards and in the cart panel.
pub const PRICE_COLOR: egui::Color32 = egui::Color32::from_rgb(56, 142, 60);

/// Cart panel background.
const CART_PANEL_BG: egui::Color32 = egui::Color32::from_rgb(227, 242, 253);

/// Fixed width of the cart side panel.
const CART_PANEL_WIDTH: f32 = 300.0;

/// Display height of the image in the detail dialog.
const DIALOG_IMAGE_SIZE: f32 = 150.0;

pub struct VitrineApp {
    state: AppState,
}

impl VitrineApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Image loaders resolve product image URIs for egui::Image widgets
        egui_extras::install_image_loaders(&cc.egui_ctx);
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        Self {
            state: AppState::default(),
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Vitrine Storefront").strong().size(24.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Cart").clicked() {
                    self.state.toggle_cart_panel();
                }
            });
        });
    }

    fn show_catalog(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);

        let products = catalog::products();
        let columns = (ui.available_width() / (card::CARD_WIDTH + 24.0))
            .floor()
            .max(1.0) as usize;

        for row in products.chunks(columns) {
            ui.horizontal_top(|ui| {
                for product in row {
                    let response = card::show(ui, product);
                    if response.view_clicked {
                        self.state.open_product(product.clone());
                    }
                    if response.add_clicked {
                        self.state.add_to_cart(product.clone());
                    }
                }
            });
        }
    }

    fn show_product_dialog(&mut self, ctx: &egui::Context) {
        let Some(product) = self.state.viewed_product.clone() else {
            return;
        };

        let mut close_clicked = false;
        egui::Window::new(product.name.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Image::new(product.image.as_str())
                            .fit_to_exact_size(egui::vec2(DIALOG_IMAGE_SIZE, DIALOG_IMAGE_SIZE)),
                    );
                });
                ui.label(format!("Price: {}", product.price_label()));
                ui.label("This is a demo product description.");
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });

        if close_clicked {
            self.state.close_product();
        }
    }
}

impl eframe::App for VitrineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.show_header(ui);
        });

        if self.state.cart_visible {
            egui::SidePanel::right("cart_panel")
                .exact_width(CART_PANEL_WIDTH)
                .resizable(false)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style())
                        .fill(CART_PANEL_BG)
                        .inner_margin(10.0),
                )
                .show(ctx, |ui| {
                    // Rebuilt from the cart each frame; the panel is always a
                    // pure function of the cart contents.
                    let summary = self.state.cart.summary();
                    cart_panel::show(ui, &summary);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("catalog_scroll")
                .show(ui, |ui| {
                    self.show_catalog(ui);
                });
        });

        self.show_product_dialog(ctx);
    }
}
