//! Bika Client - Main Entry Point
//!
//! Cloud drive client for documents, photos and scans.

use bika_gui::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Bika...");

    // Run the GPUI application
    run_app();
}
