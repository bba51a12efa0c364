//! Transport over any async byte stream
//!
//! Wraps a serial port handle, a pipe, or `tokio::io::duplex` in tests.

use std::time::Duration;

use async_trait::async_trait;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, trace};

use crate::{error::*, Transport};

/// Default size of one receive chunk
pub const DEFAULT_CHUNK_SIZE: usize = 512;

/// Transport over an already opened byte stream
///
/// The stream is live from construction. Once disconnected or closed by
/// the peer it cannot be reopened; build a new transport instead.
pub struct StreamTransport<S> {
    stream: Option<S>,
    label: String,
    chunk_size: usize,
}

impl<S> StreamTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + Sync,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream: Some(stream),
            label: "stream".to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Name reported by `remote_addr`, e.g. the serial device path
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Upper bound on bytes returned by one `receive`
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Access the underlying stream
    pub fn get_ref(&self) -> Option<&S> {
        self.stream.as_ref()
    }

    /// Give back the underlying stream, if still open
    pub fn into_inner(mut self) -> Option<S> {
        self.stream.take()
    }
}

#[async_trait]
impl<S> Transport for StreamTransport<S>
where
    S: AsyncRead + AsyncWrite + Unpin + Send + Sync,
{
    async fn connect(&mut self) -> Result<()> {
        if self.is_connected() {
            return Err(Error::AlreadyOpen);
        }
        Err(Error::PeerClosed)
    }

    async fn disconnect(&mut self) -> Result<()> {
        if let Some(mut stream) = self.stream.take() {
            debug!(link = %self.label, "Closing link");
            let _ = stream.shutdown().await;
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let stream = self.stream.as_mut().ok_or(Error::NotOpen)?;

        trace!(len = data.len(), bytes = %hex::encode(data), "Sending");

        stream.write_all(data).await?;
        stream.flush().await?;

        Ok(())
    }

    async fn receive(&mut self, wait: Duration) -> Result<BytesMut> {
        let stream = self.stream.as_mut().ok_or(Error::NotOpen)?;

        let mut buf = BytesMut::with_capacity(self.chunk_size);

        let n = timeout(wait, stream.read_buf(&mut buf))
            .await
            .map_err(|_| Error::ReadTimeout(wait))??;

        if n == 0 {
            debug!(link = %self.label, "Link closed by peer");
            self.stream = None;
            return Err(Error::PeerClosed);
        }

        trace!(len = n, bytes = %hex::encode(&buf[..n]), "Received");

        Ok(buf)
    }

    fn remote_addr(&self) -> String {
        self.label.clone()
    }
}
