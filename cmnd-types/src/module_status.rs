//! Radio module status structures

use std::fmt;

use crate::error::{Error, Result};

/// Mode the module booted into
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PowerupMode {
    Normal = 0,
    Safe = 1,
    Production = 2,
}

impl TryFrom<u8> for PowerupMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Safe),
            2 => Ok(Self::Production),
            _ => Err(Error::UnknownValue {
                kind: "powerup mode",
                value: value.into(),
            }),
        }
    }
}

/// Whether the module is registered to a base
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RegistrationStatus {
    NotRegistered = 0,
    Registered = 1,
}

impl TryFrom<u8> for RegistrationStatus {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::NotRegistered),
            1 => Ok(Self::Registered),
            _ => Err(Error::UnknownValue {
                kind: "registration status",
                value: value.into(),
            }),
        }
    }
}

/// Status reported by the module in its Hello indication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleStatus {
    pub powerup_mode: PowerupMode,

    pub registration_status: RegistrationStatus,

    /// Raw EEPROM health byte
    pub eeprom_status: u8,

    /// Device id assigned by the base (meaningful only when registered)
    pub device_id: u16,
}

impl ModuleStatus {
    pub fn is_registered(&self) -> bool {
        self.registration_status == RegistrationStatus::Registered
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_registered() {
            write!(
                f,
                "Module[{:?}, registered as device {}]",
                self.powerup_mode, self.device_id
            )
        } else {
            write!(f, "Module[{:?}, not registered]", self.powerup_mode)
        }
    }
}
