//! Vitrine GUI Application
//!
//! Desktop storefront demo: a product catalog grid, a product-detail
//! dialog, and an in-memory cart panel, built on eframe/egui.

mod app;
mod card;
mod cart_panel;
mod state;

use eframe::egui;

use app::VitrineApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_title("Vitrine - Demo Storefront"),
        ..Default::default()
    };

    eframe::run_native(
        "Vitrine",
        options,
        Box::new(|cc| Ok(Box::new(VitrineApp::new(cc)))),
    )
}
