mod app;
mod backend;
mod config;
mod error;
mod local_state;
mod session;
mod store;
mod ui;

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()?;
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }

    tracing::info!(mock = config.mock, base_url = %config.base_url, "starting");
    let mut app = app::App::new(config)?;
    app.run().await?;
    Ok(())
}

/// The terminal belongs to the UI, so logs only ever go to a file.
fn init_logging(path: &str) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("financeflow_tui=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
