//! Link errors
//!
//! Raised by the byte transports under a module: a serial device handle,
//! a TCP serial bridge or an in-memory pipe.

use std::io;
use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The link was never opened, or was closed since
    #[error("serial link is not open")]
    NotOpen,

    #[error("serial link is already open")]
    AlreadyOpen,

    /// Opening the link to the named target did not finish in time
    #[error("timed out opening link to {0}")]
    OpenTimeout(String),

    /// No byte arrived within the given wait
    #[error("no data from module within {0:?}")]
    ReadTimeout(Duration),

    /// The far end closed the byte stream
    #[error("serial link closed by peer")]
    PeerClosed,

    #[error("serial I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Bridge host that cannot be resolved
    #[error("cannot resolve bridge address {0}")]
    InvalidAddress(String),
}

impl Error {
    /// Whether the link is gone and must be reopened
    pub fn is_disconnect(&self) -> bool {
        matches!(self, Self::NotOpen | Self::PeerClosed | Self::Io(_))
    }

    /// Whether the caller may simply wait again
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::ReadTimeout(_))
    }
}
