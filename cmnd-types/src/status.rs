//! Alert, tamper and response state values

use std::fmt;

use crate::error::{Error, Result};

/// State reported by an Alert notification
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum AlertState {
    NotAlerting = 0,
    Alerting = 1,
}

impl From<AlertState> for u32 {
    fn from(state: AlertState) -> u32 {
        state as u32
    }
}

impl TryFrom<u32> for AlertState {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::NotAlerting),
            1 => Ok(Self::Alerting),
            _ => Err(Error::UnknownValue {
                kind: "alert state",
                value,
            }),
        }
    }
}

/// Tamper switch status
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TamperStatus {
    Off = 0,
    On = 1,
}

impl From<TamperStatus> for u8 {
    fn from(status: TamperStatus) -> u8 {
        status as u8
    }
}

impl TryFrom<u8> for TamperStatus {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::On),
            _ => Err(Error::UnknownValue {
                kind: "tamper status",
                value: value.into(),
            }),
        }
    }
}

/// Result code carried by Response IEs.
///
/// Any value is legal on the wire, so this is a transparent wrapper rather
/// than a closed enum.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ResponseCode(pub u8);

impl ResponseCode {
    pub const OK: Self = Self(0x00);
    pub const FAIL: Self = Self(0x01);
    pub const NOT_SUPPORTED: Self = Self(0x02);
    pub const BUSY: Self = Self(0x03);
    pub const NOT_REGISTERED: Self = Self(0x04);

    pub fn is_ok(self) -> bool {
        self == Self::OK
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::OK => "OK",
            Self::FAIL => "FAIL",
            Self::NOT_SUPPORTED => "NOT_SUPPORTED",
            Self::BUSY => "BUSY",
            Self::NOT_REGISTERED => "NOT_REGISTERED",
            _ => "UNKNOWN",
        }
    }
}

impl From<u8> for ResponseCode {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<ResponseCode> for u8 {
    fn from(code: ResponseCode) -> u8 {
        code.0
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:02X})", self.name(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_state_conversion() {
        assert_eq!(u32::from(AlertState::Alerting), 1);
        assert_eq!(AlertState::try_from(0).unwrap(), AlertState::NotAlerting);
        assert!(AlertState::try_from(7).is_err());
    }

    #[test]
    fn test_tamper_status_conversion() {
        assert_eq!(TamperStatus::try_from(1).unwrap(), TamperStatus::On);
        assert!(TamperStatus::try_from(2).is_err());
    }

    #[test]
    fn test_response_code() {
        assert!(ResponseCode::from(0).is_ok());
        assert!(!ResponseCode::FAIL.is_ok());
        assert_eq!(ResponseCode(0x42).to_string(), "UNKNOWN(0x42)");
    }
}
