//! Expcert - experience certificate generator
//!
//! Fill in a form, preview the certificate and save it as a Word document.

mod app;
mod core;
mod ui;

use crate::app::CertificateApp;
use crate::core::config::AppConfig;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Expcert...");

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Using default configuration: {:#}", e);
        AppConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.ui.window_size)
            .with_min_inner_size([640.0, 480.0])
            .with_title("Experience Certificate Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "Expcert",
        native_options,
        Box::new(|_cc| Ok(Box::new(CertificateApp::new(config)))),
    )
}
