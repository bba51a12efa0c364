//! Protocol constants

/// Sync word opening every serial frame
pub const SYNC: u16 = 0xDADA;

/// Sync word + length field
pub const PREAMBLE_SIZE: usize = 4;

/// Fixed CMND API header: cookie, unit id, service id, message id, checksum
pub const HEADER_SIZE: usize = 6;

/// Payload capacity of one envelope
pub const PACKET_MAX_SIZE: usize = 256;

/// Largest serial frame the codec produces or accepts
pub const FRAME_MAX_SIZE: usize = PREAMBLE_SIZE + HEADER_SIZE + PACKET_MAX_SIZE;

/// Cookie written by the reference host tool
pub const DEFAULT_COOKIE: u8 = 0x68;

/// Field offsets inside the CMND API header (after the preamble)
pub mod pos {
    pub const COOKIE: usize = 0;
    pub const UNIT_ID: usize = 1;
    pub const SERVICE_ID: usize = 2;
    pub const MESSAGE_ID: usize = 4;
    pub const CHECKSUM: usize = 5;
    pub const DATA_START: usize = 6;
}

/// Tag (u8) + length (u16 BE)
pub const IE_HEADER_SIZE: usize = 3;

/// Largest raw payload a FUN IE may carry
pub const FUN_MAX_DATA_SIZE: usize = 128;

/// Largest string field inside call settings / version IEs
pub const IE_STRING_MAX_SIZE: usize = 32;

/// Largest value carried by a Parameter IE
pub const PARAMETER_MAX_SIZE: usize = 64;

/// Information Element tags
pub mod ie_tags {
    pub const RESPONSE: u8 = 0x00;
    pub const BASE_WANTED: u8 = 0x04;
    pub const ALERT: u8 = 0x05;
    pub const RESPONSE_REQUIRED: u8 = 0x06;
    pub const BATTERY_LEVEL: u8 = 0x07;
    pub const TAMPER_ALERT: u8 = 0x08;
    pub const VERSION: u8 = 0x09;
    pub const FUN: u8 = 0x0A;
    pub const PARAMETER: u8 = 0x0B;
    pub const PARAMETER_DIRECT: u8 = 0x0C;
    pub const GENERAL_STATUS: u8 = 0x0D;
    pub const REGISTRATION_RESPONSE: u8 = 0x0E;
    pub const BATTERY_MEASURE_INFO: u8 = 0x15;
    pub const U8: u8 = 0x1E;
    pub const CALL_SETTING: u8 = 0x22;
}

/// Field mask bits of the call setting IE
pub mod call_setting {
    pub const PREFERRED_CODEC: u32 = 1;
    pub const DIGITS: u32 = 1 << 1;
    pub const OTHER_PARTY_TYPE: u32 = 1 << 2;
    pub const OTHER_PARTY_NAME: u32 = 1 << 3;
    pub const OTHER_PARTY_ID: u32 = 1 << 4;

    pub const ALL: u32 =
        PREFERRED_CODEC | DIGITS | OTHER_PARTY_TYPE | OTHER_PARTY_NAME | OTHER_PARTY_ID;
}

/// FUN message types
pub mod fun_msg_type {
    pub const COMMAND: u8 = 0x01;
    pub const COMMAND_RES: u8 = 0x02;
    pub const GET_ATTRIBUTES: u8 = 0x04;
    pub const SET_ATTRIBUTES: u8 = 0x07;
}

/// Parameter address spaces
pub mod parameter_type {
    pub const HAN_EEPROM: u8 = 0x00;
    pub const RAM: u8 = 0x01;
    pub const DECT_EEPROM: u8 = 0x02;
    pub const DAIF: u8 = 0x03;
}

/// Unit and interface numbers used by the starter-kit firmware
pub mod units {
    /// Unit carrying voice call signaling
    pub const VOICE_CALL: u8 = 1;

    /// Unit the base addresses raw data to
    pub const RAW_DATA_DESTINATION: u8 = 2;

    /// Unit sending raw data
    pub const RAW_DATA: u8 = 3;

    /// Proprietary FUN interface carrying raw data
    pub const RAW_DATA_INTERFACE_ID: u16 = 0x7F16;
}
