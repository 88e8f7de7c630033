//! Hotel booking HTTP server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use hotel_booking::adapters::auth::JwtSessionValidator;
use hotel_booking::adapters::http::{api_router, AuthState, BookingHandlers};
use hotel_booking::adapters::postgres::{
    PostgresBookingRepository, PostgresSessionStore, PostgresTicketReader,
};
use hotel_booking::application::{
    ChangeBookingRoomHandler, CreateBookingHandler, GetBookingHandler,
};
use hotel_booking::config::{AppConfig, ServerConfig};
use hotel_booking::ports::{BookingRepository, TicketReader};

/// `RUST_LOG` wins over the configured level; production logs are JSON.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if server.is_production() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C signal"),
        () = terminate => info!("Received SIGTERM signal"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    info!(
        environment = ?config.server.environment,
        port = config.server.port,
        "Configuration loaded"
    );

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;
    info!("Database connected");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Migrations applied");
    }

    let tickets: Arc<dyn TicketReader> = Arc::new(PostgresTicketReader::new(pool.clone()));
    let bookings: Arc<dyn BookingRepository> =
        Arc::new(PostgresBookingRepository::new(pool.clone()));
    let sessions = Arc::new(PostgresSessionStore::new(pool));

    let handlers = BookingHandlers::new(
        Arc::new(CreateBookingHandler::new(tickets.clone(), bookings.clone())),
        Arc::new(GetBookingHandler::new(bookings.clone())),
        Arc::new(ChangeBookingRoomHandler::new(tickets, bookings)),
    );
    let auth: AuthState = Arc::new(JwtSessionValidator::new(
        &config.auth.jwt_secret,
        config.auth.leeway_secs,
        sessions,
    ));

    let app = api_router(handlers, auth, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
