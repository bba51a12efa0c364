//! High-level error types

use std::time::Duration;

use cmnd_types::ResponseCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Codec error: {0}")]
    Core(#[from] cmnd_core::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] cmnd_transport::Error),

    #[error("Type error: {0}")]
    Types(#[from] cmnd_types::Error),

    #[error("Module not connected")]
    NotConnected,

    #[error("Module not registered to a base")]
    NotRegistered,

    #[error("No response within {0:?}")]
    ResponseTimeout(Duration),

    #[error("Invalid response from module: {0}")]
    InvalidResponse(String),

    #[error("Request rejected by module: {0}")]
    Rejected(ResponseCode),
}

impl Error {
    /// Whether the link is gone and the module handle must be rebuilt
    pub fn is_disconnect(&self) -> bool {
        match self {
            Self::NotConnected => true,
            Self::Transport(e) => e.is_disconnect(),
            _ => false,
        }
    }
}
