//! CMND API service and message identifiers

use std::fmt;

use crate::error::{Error, Result};

/// Protocol services multiplexed over one link
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Service {
    // Device services
    General = 0x0000,
    DeviceManagement = 0x0001,
    Identify = 0x0004,
    AttributeReporting = 0x0006,

    // General application services
    Alert = 0x0100,
    TamperAlert = 0x0101,
    DetectorProblemAlert = 0x0102,
    Battery = 0x0103,
    KeepAlive = 0x0104,
    ArmDisarm = 0x0105,
    OnOff = 0x0106,
    Fun = 0x0108,
    Debug = 0x0109,
    KeyPress = 0x010A,

    // System services
    System = 0x0201,
    Technician = 0x0202,
    Parameters = 0x0203,
    Sleep = 0x0204,
    ManufactureConfiguration = 0x0206,
    UleVoiceCall = 0x020A,
    Production = 0x020B,
    Suota = 0x020C,
    Certification = 0x020D,
    RemoteControl = 0x020E,
    SuotaProprietary = 0x020F,
    Broadcasting = 0x0210,

    Unknown = 0xFFFF,
}

impl Service {
    /// Get service name
    pub fn name(self) -> &'static str {
        match self {
            Self::General => "GENERAL",
            Self::DeviceManagement => "DEVICE_MANAGEMENT",
            Self::Identify => "IDENTIFY",
            Self::AttributeReporting => "ATTRIBUTE_REPORTING",
            Self::Alert => "ALERT",
            Self::TamperAlert => "TAMPER_ALERT",
            Self::DetectorProblemAlert => "DETECTOR_PROBLEM_ALERT",
            Self::Battery => "BATTERY",
            Self::KeepAlive => "KEEP_ALIVE",
            Self::ArmDisarm => "ARM_DISARM",
            Self::OnOff => "ON_OFF",
            Self::Fun => "FUN",
            Self::Debug => "DEBUG",
            Self::KeyPress => "KEY_PRESS",
            Self::System => "SYSTEM",
            Self::Technician => "TECHNICIAN",
            Self::Parameters => "PARAMETERS",
            Self::Sleep => "SLEEP",
            Self::ManufactureConfiguration => "MANUFACTURE_CONFIGURATION",
            Self::UleVoiceCall => "ULE_VOICE_CALL",
            Self::Production => "PRODUCTION",
            Self::Suota => "SUOTA",
            Self::Certification => "CERTIFICATION",
            Self::RemoteControl => "REMOTE_CONTROL",
            Self::SuotaProprietary => "SUOTA_PROPRIETARY",
            Self::Broadcasting => "BROADCASTING",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Get the name of a message within this service
    ///
    /// Returns `"UNKNOWN"` for ids this crate has no name for.
    pub fn message_name(self, message_id: u8) -> &'static str {
        let table: &[(u8, &'static str)] = match self {
            Self::General => general::NAMES,
            Self::DeviceManagement => device_management::NAMES,
            Self::Alert => alert::NAMES,
            Self::TamperAlert => tamper::NAMES,
            Self::Fun => fun::NAMES,
            Self::System => system::NAMES,
            Self::Parameters => parameters::NAMES,
            Self::UleVoiceCall => voice_call::NAMES,
            _ => &[],
        };

        table
            .iter()
            .find(|(id, _)| *id == message_id)
            .map(|(_, name)| *name)
            .unwrap_or("UNKNOWN")
    }
}

impl From<Service> for u16 {
    fn from(service: Service) -> u16 {
        service as u16
    }
}

impl TryFrom<u16> for Service {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            0x0000 => Ok(Self::General),
            0x0001 => Ok(Self::DeviceManagement),
            0x0004 => Ok(Self::Identify),
            0x0006 => Ok(Self::AttributeReporting),
            0x0100 => Ok(Self::Alert),
            0x0101 => Ok(Self::TamperAlert),
            0x0102 => Ok(Self::DetectorProblemAlert),
            0x0103 => Ok(Self::Battery),
            0x0104 => Ok(Self::KeepAlive),
            0x0105 => Ok(Self::ArmDisarm),
            0x0106 => Ok(Self::OnOff),
            0x0108 => Ok(Self::Fun),
            0x0109 => Ok(Self::Debug),
            0x010A => Ok(Self::KeyPress),
            0x0201 => Ok(Self::System),
            0x0202 => Ok(Self::Technician),
            0x0203 => Ok(Self::Parameters),
            0x0204 => Ok(Self::Sleep),
            0x0206 => Ok(Self::ManufactureConfiguration),
            0x020A => Ok(Self::UleVoiceCall),
            0x020B => Ok(Self::Production),
            0x020C => Ok(Self::Suota),
            0x020D => Ok(Self::Certification),
            0x020E => Ok(Self::RemoteControl),
            0x020F => Ok(Self::SuotaProprietary),
            0x0210 => Ok(Self::Broadcasting),
            0xFFFF => Ok(Self::Unknown),
            _ => Err(Error::UnknownService(value)),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:04X})", self.name(), *self as u16)
    }
}

/// Reverse lookup of a raw `(service_id, message_id)` pair, e.g. for logs
pub fn describe(service_id: u16, message_id: u8) -> (&'static str, &'static str) {
    match Service::try_from(service_id) {
        Ok(service) => (service.name(), service.message_name(message_id)),
        Err(_) => ("UNKNOWN", "UNKNOWN"),
    }
}

pub mod general {
    pub const HELLO_IND: u8 = 0x05;
    pub const ERROR_IND: u8 = 0x06;
    pub const LINK_CFM: u8 = 0x07;
    pub const GET_STATUS_REQ: u8 = 0x08;
    pub const GET_STATUS_RES: u8 = 0x09;
    pub const HELLO_REQ: u8 = 0x0A;
    pub const GET_VERSION_REQ: u8 = 0x0B;
    pub const GET_VERSION_RES: u8 = 0x0C;
    pub const TRANSACTION_START_REQ: u8 = 0x0D;
    pub const TRANSACTION_START_CFM: u8 = 0x0E;
    pub const TRANSACTION_END_REQ: u8 = 0x0F;
    pub const TRANSACTION_END_CFM: u8 = 0x10;
    pub const LINK_MAINTAIN_START_REQ: u8 = 0x11;
    pub const LINK_MAINTAIN_START_CFM: u8 = 0x12;
    pub const LINK_MAINTAIN_STOP_REQ: u8 = 0x13;
    pub const LINK_MAINTAIN_STOP_CFM: u8 = 0x14;
    pub const LINK_MAINTAIN_STOPPED_IND: u8 = 0x15;

    pub(crate) const NAMES: &[(u8, &str)] = &[
        (HELLO_IND, "HELLO_IND"),
        (ERROR_IND, "ERROR_IND"),
        (LINK_CFM, "LINK_CFM"),
        (GET_STATUS_REQ, "GET_STATUS_REQ"),
        (GET_STATUS_RES, "GET_STATUS_RES"),
        (HELLO_REQ, "HELLO_REQ"),
        (GET_VERSION_REQ, "GET_VERSION_REQ"),
        (GET_VERSION_RES, "GET_VERSION_RES"),
        (TRANSACTION_START_REQ, "TRANSACTION_START_REQ"),
        (TRANSACTION_START_CFM, "TRANSACTION_START_CFM"),
        (TRANSACTION_END_REQ, "TRANSACTION_END_REQ"),
        (TRANSACTION_END_CFM, "TRANSACTION_END_CFM"),
        (LINK_MAINTAIN_START_REQ, "LINK_MAINTAIN_START_REQ"),
        (LINK_MAINTAIN_START_CFM, "LINK_MAINTAIN_START_CFM"),
        (LINK_MAINTAIN_STOP_REQ, "LINK_MAINTAIN_STOP_REQ"),
        (LINK_MAINTAIN_STOP_CFM, "LINK_MAINTAIN_STOP_CFM"),
        (LINK_MAINTAIN_STOPPED_IND, "LINK_MAINTAIN_STOPPED_IND"),
    ];
}

pub mod device_management {
    pub const REGISTER_DEVICE_REQ: u8 = 0x01;
    pub const REGISTER_DEVICE_CFM: u8 = 0x02;
    pub const REGISTER_DEVICE_IND: u8 = 0x03;
    pub const DEREGISTER_DEVICE_REQ: u8 = 0x04;
    pub const DEREGISTER_DEVICE_CFM: u8 = 0x05;
    pub const DEREGISTER_DEVICE_IND: u8 = 0x06;

    pub(crate) const NAMES: &[(u8, &str)] = &[
        (REGISTER_DEVICE_REQ, "REGISTER_DEVICE_REQ"),
        (REGISTER_DEVICE_CFM, "REGISTER_DEVICE_CFM"),
        (REGISTER_DEVICE_IND, "REGISTER_DEVICE_IND"),
        (DEREGISTER_DEVICE_REQ, "DEREGISTER_DEVICE_REQ"),
        (DEREGISTER_DEVICE_CFM, "DEREGISTER_DEVICE_CFM"),
        (DEREGISTER_DEVICE_IND, "DEREGISTER_DEVICE_IND"),
    ];
}

pub mod alert {
    pub const NOTIFY_STATUS_REQ: u8 = 0x01;
    pub const NOTIFY_STATUS_RES: u8 = 0x02;

    pub(crate) const NAMES: &[(u8, &str)] = &[
        (NOTIFY_STATUS_REQ, "NOTIFY_STATUS_REQ"),
        (NOTIFY_STATUS_RES, "NOTIFY_STATUS_RES"),
    ];
}

pub mod tamper {
    pub const NOTIFY_STATUS_REQ: u8 = 0x01;
    pub const NOTIFY_STATUS_RES: u8 = 0x02;

    pub(crate) const NAMES: &[(u8, &str)] = &[
        (NOTIFY_STATUS_REQ, "NOTIFY_STATUS_REQ"),
        (NOTIFY_STATUS_RES, "NOTIFY_STATUS_RES"),
    ];
}

pub mod fun {
    pub const SEND_REQ: u8 = 0x01;
    pub const RECV_IND: u8 = 0x02;

    pub(crate) const NAMES: &[(u8, &str)] = &[(SEND_REQ, "SEND_REQ"), (RECV_IND, "RECV_IND")];
}

pub mod system {
    pub const BATTERY_MEASURE_GET_REQ: u8 = 0x01;
    pub const BATTERY_MEASURE_GET_RES: u8 = 0x02;
    pub const RSSI_GET_REQ: u8 = 0x03;
    pub const RSSI_GET_RES: u8 = 0x04;
    pub const BATTERY_IND_ENABLE_REQ: u8 = 0x05;
    pub const BATTERY_IND_DISABLE_REQ: u8 = 0x06;
    pub const BATTERY_IND_LOW_IND: u8 = 0x07;
    pub const RESET_REQ: u8 = 0x08;
    pub const BATTERY_END_LIFE_IND: u8 = 0x09;

    pub(crate) const NAMES: &[(u8, &str)] = &[
        (BATTERY_MEASURE_GET_REQ, "BATTERY_MEASURE_GET_REQ"),
        (BATTERY_MEASURE_GET_RES, "BATTERY_MEASURE_GET_RES"),
        (RSSI_GET_REQ, "RSSI_GET_REQ"),
        (RSSI_GET_RES, "RSSI_GET_RES"),
        (BATTERY_IND_ENABLE_REQ, "BATTERY_IND_ENABLE_REQ"),
        (BATTERY_IND_DISABLE_REQ, "BATTERY_IND_DISABLE_REQ"),
        (BATTERY_IND_LOW_IND, "BATTERY_IND_LOW_IND"),
        (RESET_REQ, "RESET_REQ"),
        (BATTERY_END_LIFE_IND, "BATTERY_END_LIFE_IND"),
    ];
}

pub mod parameters {
    pub const GET_REQ: u8 = 0x01;
    pub const GET_RES: u8 = 0x02;
    pub const SET_REQ: u8 = 0x03;
    pub const SET_RES: u8 = 0x04;
    pub const GET_DIRECT_REQ: u8 = 0x05;
    pub const GET_DIRECT_RES: u8 = 0x06;
    pub const SET_DIRECT_REQ: u8 = 0x07;
    pub const SET_DIRECT_RES: u8 = 0x08;

    pub(crate) const NAMES: &[(u8, &str)] = &[
        (GET_REQ, "GET_REQ"),
        (GET_RES, "GET_RES"),
        (SET_REQ, "SET_REQ"),
        (SET_RES, "SET_RES"),
        (GET_DIRECT_REQ, "GET_DIRECT_REQ"),
        (GET_DIRECT_RES, "GET_DIRECT_RES"),
        (SET_DIRECT_REQ, "SET_DIRECT_REQ"),
        (SET_DIRECT_RES, "SET_DIRECT_RES"),
    ];
}

pub mod voice_call {
    pub const START_REQ: u8 = 0x01;
    pub const START_CFM: u8 = 0x02;
    pub const START_IND: u8 = 0x03;
    pub const START_RES: u8 = 0x04;
    pub const END_REQ: u8 = 0x05;
    pub const END_CFM: u8 = 0x06;
    pub const END_IND: u8 = 0x07;
    pub const END_RES: u8 = 0x08;
    pub const CONNECTED_IND: u8 = 0x09;
    pub const RELEASE_IND: u8 = 0x0A;

    pub(crate) const NAMES: &[(u8, &str)] = &[
        (START_REQ, "START_REQ"),
        (START_CFM, "START_CFM"),
        (START_IND, "START_IND"),
        (START_RES, "START_RES"),
        (END_REQ, "END_REQ"),
        (END_CFM, "END_CFM"),
        (END_IND, "END_IND"),
        (END_RES, "END_RES"),
        (CONNECTED_IND, "CONNECTED_IND"),
        (RELEASE_IND, "RELEASE_IND"),
    ];
}
