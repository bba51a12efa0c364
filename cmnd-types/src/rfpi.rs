//! Radio Fixed Part Identity

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Address of a DECT base station (5 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rfpi([u8; Rfpi::LEN]);

impl Rfpi {
    /// RFPI width in bytes
    pub const LEN: usize = 5;

    pub const fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: [u8; Self::LEN] = bytes.try_into().map_err(|_| Error::RfpiLength {
            expected: Self::LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(raw))
    }

    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }
}

impl From<[u8; Rfpi::LEN]> for Rfpi {
    fn from(bytes: [u8; Rfpi::LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Rfpi {
    type Err = Error;

    /// Parses the hex form printed by base stations, with or without
    /// separators (`"02:7F:11:22:33"`, `"027f112233"`).
    fn from_str(s: &str) -> Result<Self> {
        let compact: String = s.chars().filter(|c| !matches!(c, ':' | '-' | ' ')).collect();
        let bytes = hex::decode(&compact).map_err(|e| Error::RfpiParse(format!("{s}: {e}")))?;
        Self::from_slice(&bytes)
    }
}

impl fmt::Display for Rfpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}")
    }
}
