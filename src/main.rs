//! navkit gallery - Main Entry Point
//!
//! Showcase window for the header and button components.

use navkit::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting navkit gallery...");

    run_app();
}
