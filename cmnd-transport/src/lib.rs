//! Byte transports for the CMND serial link
//!
//! The codec treats the link as an opaque duplex byte stream. A transport
//! writes whole frames and hands back whatever chunk of bytes arrived, with
//! no framing guarantee.

pub mod error;
pub mod stream;
pub mod tcp;

pub use error::{Error, Result};
pub use stream::StreamTransport;
pub use tcp::TcpTransport;

use std::time::Duration;

use async_trait::async_trait;
use bytes::BytesMut;

/// Duplex byte link to a radio module
#[async_trait]
pub trait Transport: Send + Sync {
    /// Open the link
    async fn connect(&mut self) -> Result<()>;

    /// Close the link
    async fn disconnect(&mut self) -> Result<()>;

    fn is_connected(&self) -> bool;

    /// Write all of `data` and flush
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive the next chunk of bytes, waiting at most `timeout`
    async fn receive(&mut self, timeout: Duration) -> Result<BytesMut>;

    /// Human-readable peer description for logs
    fn remote_addr(&self) -> String;
}
