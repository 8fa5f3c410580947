use thiserror::Error;

use crate::shared::{ConfigError, SharedError};

/// Errors raised by the client library
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure talking to the HTTP API
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{message} (status {status})")]
    Api {
        status: u16,
        message: String,
    },

    #[error("socket error: {0}")]
    Socket(#[from] tokio_tungstenite::tungstenite::Error),

    /// The server closed the socket
    #[error("socket closed")]
    SocketClosed,

    #[error(transparent)]
    Shared(#[from] SharedError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
