//! HTTP API server for the Tokunori Rent-a-Car service.
//!
//! Exposes a liveness probe at `/health` and a service descriptor at `/`,
//! with request tracing via tower-http.

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use config::Config;
use error::ServerError;

/// Upper bound on request bodies; larger `Content-Length` values get 413.
pub const JSON_BODY_LIMIT: usize = 100 * 1024;

/// Creates the Axum application router with all routes.
pub fn create_app() -> Router {
    Router::new()
        .route("/", get(routes::root::info))
        .route("/health", get(routes::health::check))
        .layer(RequestBodyLimitLayer::new(JSON_BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
}

/// Binds the listen address from `config` and logs the active port.
pub async fn bind(config: &Config) -> Result<TcpListener, ServerError> {
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    // Report the port actually bound; PORT=0 asks the OS to pick one.
    let port = listener
        .local_addr()
        .map(|a| a.port())
        .unwrap_or(config.port);
    tracing::info!(%addr, port, "Server running on port {port}");

    Ok(listener)
}

/// Serves `app` on `listener` until the accept loop fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
