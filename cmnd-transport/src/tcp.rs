//! Serial-over-TCP transport
//!
//! For modules reached through a serial bridge (ser2net or similar) that
//! exposes the raw UART byte stream on a TCP port.

use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use bytes::BytesMut;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::{error::*, stream::StreamTransport, Transport};

/// TCP transport to a serial bridge
pub struct TcpTransport {
    addr: String,
    port: u16,
    socket_addr: Option<SocketAddr>,
    link: Option<StreamTransport<TcpStream>>,
    connect_timeout: Duration,
    read_timeout: Duration,
}

impl TcpTransport {
    pub fn new(addr: impl Into<String>, port: u16) -> Self {
        Self {
            addr: addr.into(),
            port,
            socket_addr: None,
            link: None,
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(5),
        }
    }

    /// Set connection timeout
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Cap on any single receive, whatever the caller asks for
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    async fn resolve_addr(&mut self) -> Result<SocketAddr> {
        if let Some(addr) = self.socket_addr {
            return Ok(addr);
        }

        let addr_str = format!("{}:{}", self.addr, self.port);

        let addr = tokio::net::lookup_host(&addr_str)
            .await
            .map_err(|e| Error::InvalidAddress(format!("{}: {}", addr_str, e)))?
            .next()
            .ok_or_else(|| Error::InvalidAddress(format!("{}: no addresses", addr_str)))?;

        self.socket_addr = Some(addr);
        Ok(addr)
    }
}

#[async_trait]
impl Transport for TcpTransport {
    async fn connect(&mut self) -> Result<()> {
        if self.is_connected() {
            return Err(Error::AlreadyOpen);
        }

        let addr = self.resolve_addr().await?;

        debug!("Connecting to {}...", addr);

        let stream = timeout(self.connect_timeout, TcpStream::connect(addr))
            .await
            .map_err(|_| Error::OpenTimeout(addr.to_string()))??;

        // Frames are small and latency matters more than throughput
        stream.set_nodelay(true)?;

        debug!("Connected to {}", addr);

        self.link = Some(StreamTransport::new(stream).with_label(addr.to_string()));
        Ok(())
    }

    async fn disconnect(&mut self) -> Result<()> {
        if let Some(mut link) = self.link.take() {
            debug!("Disconnecting from {}...", self.remote_addr());
            link.disconnect().await?;
        }

        self.socket_addr = None;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.link.as_ref().is_some_and(|link| link.is_connected())
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let link = self.link.as_mut().ok_or(Error::NotOpen)?;
        link.send(data).await
    }

    async fn receive(&mut self, wait: Duration) -> Result<BytesMut> {
        let link = self.link.as_mut().ok_or(Error::NotOpen)?;
        let result = link.receive(wait.min(self.read_timeout)).await;

        if !link.is_connected() {
            self.link = None;
        }
        result
    }

    fn remote_addr(&self) -> String {
        self.socket_addr
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| format!("{}:{}", self.addr, self.port))
    }
}

impl Drop for TcpTransport {
    fn drop(&mut self) {
        if self.is_connected() {
            warn!("TCP transport dropped while still connected");
        }
    }
}
