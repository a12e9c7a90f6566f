//! Startup and serving errors.
//!
//! Request handling has no error type of its own: malformed requests and
//! unmatched routes get axum's default responses.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the server process.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The listen address could not be bound (in use, not permitted, bad host).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The accept loop failed after a successful bind.
    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}
