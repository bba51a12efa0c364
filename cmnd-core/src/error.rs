//! Error types for cmnd-core

/// Result type alias for CMND codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Codec errors
///
/// Every variant is local to the call that produced it; none leaves the
/// framer or an envelope in a partially written state.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Buffer is shorter than the fixed header
    #[error("Packet too short: expected at least {expected} bytes, got {actual} bytes")]
    PacketTooShort {
        expected: usize,
        actual: usize,
    },

    /// Frame does not start with the sync word
    #[error("Invalid sync word: 0x{0:04X}")]
    InvalidSync(u16),

    /// Length field disagrees with the bytes actually supplied
    #[error("Length field mismatch: header declares {declared} bytes, frame carries {actual}")]
    LengthMismatch {
        declared: usize,
        actual: usize,
    },

    /// Checksum verification failed
    #[error("Checksum mismatch: expected 0x{expected:02X}, received 0x{received:02X}")]
    ChecksumMismatch {
        expected: u8,
        received: u8,
    },

    /// Payload larger than the envelope can hold
    #[error("Payload too large: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge {
        size: usize,
        max: usize,
    },

    /// An IE did not fit in the remaining list capacity
    #[error("IE list capacity exceeded: need {needed} bytes, {available} available")]
    CapacityExceeded {
        needed: usize,
        available: usize,
    },

    /// Output buffer cannot hold the serialized frame
    #[error("Output buffer too small: need {needed} bytes, got {available}")]
    BufferTooSmall {
        needed: usize,
        available: usize,
    },

    /// IE value does not match the layout its tag requires
    #[error("Malformed IE 0x{tag:02X}: {reason}")]
    MalformedIe {
        tag: u8,
        reason: &'static str,
    },

    /// Unknown service identifier
    #[error("Unknown service id: 0x{0:04X}")]
    UnknownService(u16),

    /// Domain value out of range
    #[error(transparent)]
    Types(#[from] cmnd_types::Error),
}

impl Error {
    /// Check if the error came from a damaged or truncated frame, in which
    /// case the receiver simply waits for the next one
    pub fn is_framing(&self) -> bool {
        matches!(
            self,
            Self::PacketTooShort { .. }
                | Self::InvalidSync(_)
                | Self::LengthMismatch { .. }
                | Self::ChecksumMismatch { .. }
                | Self::PayloadTooLarge { .. }
        )
    }

    /// Check if the error came from building an outgoing message
    pub fn is_build_failure(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. } | Self::BufferTooSmall { .. }
        )
    }
}
