//! Tomate - Pomodoro timer preferences
//!
//! Entry point: sets up logging, initializes Libadwaita and runs the
//! application.

use {
    anyhow::Result,
    tomate::{error::ResultExt, ui::TomateApplication},
    tracing_subscriber::EnvFilter,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    libadwaita::init().add_context("Failed to initialize Libadwaita")?;

    let app = TomateApplication::new()?;
    app.run();

    Ok(())
}
