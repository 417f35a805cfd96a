//! MentalMuse API server.
//!
//! Serves the community CRUD surface, session token issuing and journal
//! analysis under `/api`, plus a welcome message at `/`.

pub mod error;
pub mod routes;
pub mod state;
pub mod token;

use std::net::SocketAddr;

use axum::{response::Json, routing::get, Router};
use tokio::signal;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::models::wire::Welcome;

pub use error::ApiError;
pub use state::AppState;
pub use token::{Claims, TokenIssuer};

pub const WELCOME_MESSAGE: &str = "Welcome to MentalMuse API";

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome))
        .nest("/api", routes::api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: WELCOME_MESSAGE.to_string(),
    })
}

/// Start the server on a specific address in a background task.
///
/// Bind to port 0 to get a random port; the bound address is returned.
pub async fn start_server_on(
    addr: SocketAddr,
    state: AppState,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;
    let app = router(state);

    tracing::info!("API server listening on http://{}", actual_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("API server error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

/// Run the server in the foreground until Ctrl+C or SIGTERM.
pub async fn run(config: &AppConfig) -> color_eyre::Result<()> {
    let state = AppState::from_config(config);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        classifier = %config.classifier,
        "Server is running on http://localhost:{}",
        listener.local_addr()?.port()
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received terminate signal, shutting down");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
