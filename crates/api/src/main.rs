//! API server entry point.

use tokunori_api::config::Config;
use tokunori_api::error::ServerError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Config errors are logged once the subscriber is installed.
    let config = Config::from_env();

    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config.inspect_err(|err| tracing::error!(error = %err, "invalid configuration"))?;

    let listener = tokunori_api::bind(&config)
        .await
        .inspect_err(|err| tracing::error!(error = %err, "failed to start server"))?;

    tokunori_api::serve(listener, tokunori_api::create_app())
        .await
        .inspect_err(|err| tracing::error!(error = %err, "server stopped"))
}
