//! Binary entry point: initialize logging, open the data directory and
//! make sure every collection has its first-run defaults.

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kanisa::notify::TracingNotifier;
use kanisa::AppState;

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kanisa=debug,info")),
        )
        .with(fmt::layer())
        .init();

    let data_dir = std::env::var("KANISA_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"));

    let state = match AppState::open(data_dir, Arc::new(TracingNotifier)) {
        Ok(state) => state,
        Err(err) => {
            tracing::error!("Failed to open data directory: {}", err);
            std::process::exit(1);
        }
    };

    state.seed();
    tracing::info!("Ready");
}
