use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod config;
mod error;
mod models;
mod notifier;
mod repositories;
mod routes;
mod session;
mod validation;

use common::database::{self, DatabaseConfig};
use tokio::net::TcpListener;

use crate::config::BookingConfig;
use crate::notifier::ConfirmationNotifier;
use crate::repositories::{
    booking::BookingRepository, room::RoomRepository, user::UserRepository,
};
use crate::session::{SessionConfig, SessionStore};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_repository: UserRepository,
    pub room_repository: RoomRepository,
    pub booking_repository: BookingRepository,
    pub sessions: SessionStore,
    pub notifier: ConfirmationNotifier,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting booking service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = database::init_pool(&db_config).await?;

    // Check database connectivity
    if database::health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    let config = BookingConfig::from_env();

    let sessions = SessionStore::new(SessionConfig {
        timeout_seconds: config.session_timeout_seconds,
    });
    let notifier =
        ConfirmationNotifier::new(&config.confirmation_base_url, config.notify_timeout_seconds)?;

    let app_state = AppState {
        user_repository: UserRepository::new(pool.clone()),
        room_repository: RoomRepository::new(pool.clone()),
        booking_repository: BookingRepository::new(pool),
        sessions,
        notifier,
    };

    info!("Booking service initialized successfully");

    // Start the web server
    let app = routes::create_router(app_state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    info!("Booking service listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
