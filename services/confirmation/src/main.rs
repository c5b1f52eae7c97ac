use anyhow::Result;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod models;
mod render;
mod routes;
mod store;

use tokio::net::TcpListener;

use crate::store::{ConfirmationStore, InMemoryConfirmationStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ConfirmationStore>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting confirmation service");

    let app_state = AppState {
        store: Arc::new(InMemoryConfirmationStore::default()),
    };

    // Start the web server
    let app = routes::create_router(app_state);

    let bind_addr =
        std::env::var("CONFIRMATION_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Confirmation service listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
