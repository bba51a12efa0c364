//! HAN-FUN unit types carried in Alert IEs

use std::fmt;

use crate::error::{Error, Result};

/// Profile of a functional unit inside a device
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum UnitType {
    // Home control
    SimpleOnOffSwitchable = 0x0100,
    SimpleOnOffSwitch = 0x0101,
    SimpleLevelControllable = 0x0102,
    SimpleLevelControl = 0x0103,

    // Energy
    AcOutlet = 0x0200,

    // Security
    SimpleDetector = 0x0300,
    DoorOpenCloseDetector = 0x0301,
    WindowOpenCloseDetector = 0x0302,
    MotionDetector = 0x0303,
    SmokeDetector = 0x0304,
    GasDetector = 0x0305,
    FloodDetector = 0x0306,
    GlassBreakDetector = 0x0307,
    VibrationDetector = 0x0308,
    Siren = 0x0400,
    Alertable = 0x0410,
}

impl UnitType {
    pub fn name(self) -> &'static str {
        match self {
            Self::SimpleOnOffSwitchable => "SIMPLE_ONOFF_SWITCHABLE",
            Self::SimpleOnOffSwitch => "SIMPLE_ONOFF_SWITCH",
            Self::SimpleLevelControllable => "SIMPLE_LEVEL_CONTROLLABLE",
            Self::SimpleLevelControl => "SIMPLE_LEVEL_CONTROL",
            Self::AcOutlet => "AC_OUTLET",
            Self::SimpleDetector => "SIMPLE_DETECTOR",
            Self::DoorOpenCloseDetector => "DOOR_OPEN_CLOSE_DETECTOR",
            Self::WindowOpenCloseDetector => "WINDOW_OPEN_CLOSE_DETECTOR",
            Self::MotionDetector => "MOTION_DETECTOR",
            Self::SmokeDetector => "SMOKE_DETECTOR",
            Self::GasDetector => "GAS_DETECTOR",
            Self::FloodDetector => "FLOOD_DETECTOR",
            Self::GlassBreakDetector => "GLASS_BREAK_DETECTOR",
            Self::VibrationDetector => "VIBRATION_DETECTOR",
            Self::Siren => "SIREN",
            Self::Alertable => "ALERTABLE",
        }
    }
}

impl From<UnitType> for u16 {
    fn from(unit: UnitType) -> u16 {
        unit as u16
    }
}

impl TryFrom<u16> for UnitType {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            0x0100 => Ok(Self::SimpleOnOffSwitchable),
            0x0101 => Ok(Self::SimpleOnOffSwitch),
            0x0102 => Ok(Self::SimpleLevelControllable),
            0x0103 => Ok(Self::SimpleLevelControl),
            0x0200 => Ok(Self::AcOutlet),
            0x0300 => Ok(Self::SimpleDetector),
            0x0301 => Ok(Self::DoorOpenCloseDetector),
            0x0302 => Ok(Self::WindowOpenCloseDetector),
            0x0303 => Ok(Self::MotionDetector),
            0x0304 => Ok(Self::SmokeDetector),
            0x0305 => Ok(Self::GasDetector),
            0x0306 => Ok(Self::FloodDetector),
            0x0307 => Ok(Self::GlassBreakDetector),
            0x0308 => Ok(Self::VibrationDetector),
            0x0400 => Ok(Self::Siren),
            0x0410 => Ok(Self::Alertable),
            _ => Err(Error::UnknownValue {
                kind: "unit type",
                value: value.into(),
            }),
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:04X})", self.name(), *self as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_type_conversion() {
        assert_eq!(u16::from(UnitType::SmokeDetector), 0x0304);
        assert_eq!(UnitType::try_from(0x0304).unwrap(), UnitType::SmokeDetector);
    }

    #[test]
    fn test_unknown_unit_type() {
        assert!(UnitType::try_from(0x7777).is_err());
    }

    #[test]
    fn test_unit_type_display() {
        assert_eq!(UnitType::Siren.to_string(), "SIREN(0x0400)");
    }
}
