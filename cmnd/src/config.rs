//! Link configuration

use std::time::Duration;

use cmnd_core::constants::{DEFAULT_COOKIE, PACKET_MAX_SIZE};

/// Settings for one module link
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use cmnd::LinkConfig;
///
/// let config = LinkConfig::default()
///     .with_response_timeout(Duration::from_secs(2))
///     .with_queue_depth(8);
///
/// assert_eq!(config.cookie(), 0x68);
/// assert_eq!(config.queue_depth(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    cookie: u8,
    response_timeout: Duration,
    registration_timeout: Duration,
    queue_depth: usize,
    max_payload: usize,
}

impl LinkConfig {
    pub fn new() -> Self {
        Self {
            cookie: DEFAULT_COOKIE,
            response_timeout: Duration::from_secs(5),
            registration_timeout: Duration::from_secs(120),
            queue_depth: 32,
            max_payload: PACKET_MAX_SIZE,
        }
    }

    /// Cookie written into every outgoing frame
    pub fn with_cookie(mut self, cookie: u8) -> Self {
        self.cookie = cookie;
        self
    }

    /// How long to wait for a confirm or response
    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    /// How long to wait for a registration to complete
    ///
    /// Registration needs the base to be put in registration mode, so this
    /// is usually much longer than the response timeout.
    pub fn with_registration_timeout(mut self, timeout: Duration) -> Self {
        self.registration_timeout = timeout;
        self
    }

    /// Capacity of the queue filled by the receive task
    pub fn with_queue_depth(mut self, depth: usize) -> Self {
        self.queue_depth = depth.max(1);
        self
    }

    /// Largest payload accepted by the framer
    pub fn with_max_payload(mut self, max_payload: usize) -> Self {
        self.max_payload = max_payload.min(PACKET_MAX_SIZE);
        self
    }

    pub fn cookie(&self) -> u8 {
        self.cookie
    }

    pub fn response_timeout(&self) -> Duration {
        self.response_timeout
    }

    pub fn registration_timeout(&self) -> Duration {
        self.registration_timeout
    }

    pub fn queue_depth(&self) -> usize {
        self.queue_depth
    }

    pub fn max_payload(&self) -> usize {
        self.max_payload
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::new()
    }
}
