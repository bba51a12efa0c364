//! Typed Information Elements
//!
//! Each IE is a plain value type that copies its fields out of a validated
//! byte range. Multi-byte fields are big-endian. Values are read with
//! [`bytes::Buf`] and written with [`bytes::BufMut`] over plain slices, so
//! neither direction allocates.

use std::fmt;

use bytes::{Buf, BufMut};
use cmnd_types::{
    AlertState, ModuleStatus, PowerupMode, RegistrationStatus, ResponseCode, Rfpi, TamperStatus,
    UnitType,
};

use crate::{
    constants::{call_setting, ie_tags, FUN_MAX_DATA_SIZE, IE_STRING_MAX_SIZE, PARAMETER_MAX_SIZE},
    error::{Error, Result},
    ie_list::{IeList, RawIe},
};

/// A value that travels as one TLV entry
pub trait InformationElement: Sized {
    /// Tag identifying this IE on the wire
    const TAG: u8;

    /// Length of the encoded value (without the TLV header)
    fn encoded_len(&self) -> usize;

    /// Write the value into exactly `encoded_len()` bytes
    fn write_value(&self, out: &mut [u8]);

    /// Decode from the value bytes of a matching entry
    fn read_value(value: &[u8]) -> Result<Self>;

    /// Append this IE to a list
    fn add_to(&self, list: &mut IeList<'_>) -> Result<()> {
        list.add_with(Self::TAG, self.encoded_len(), |out| self.write_value(out))
    }
}

fn malformed(tag: u8, reason: &'static str) -> Error {
    Error::MalformedIe { tag, reason }
}

/// Bounds-checked reader over one IE value
struct Reader<'a> {
    tag: u8,
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    fn new(tag: u8, buf: &'a [u8]) -> Self {
        Self { tag, buf }
    }

    fn need(&self, n: usize) -> Result<()> {
        if self.buf.remaining() < n {
            return Err(malformed(self.tag, "truncated value"));
        }
        Ok(())
    }

    fn u8(&mut self) -> Result<u8> {
        self.need(1)?;
        Ok(self.buf.get_u8())
    }

    fn u16(&mut self) -> Result<u16> {
        self.need(2)?;
        Ok(self.buf.get_u16())
    }

    fn u32(&mut self) -> Result<u32> {
        self.need(4)?;
        Ok(self.buf.get_u32())
    }

    fn bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.need(n)?;
        let (head, rest) = self.buf.split_at(n);
        self.buf = rest;
        Ok(head)
    }

    /// Length-prefixed (u8) byte string
    fn short_string<const N: usize>(&mut self) -> Result<FixedBytes<N>> {
        let len = self.u8()? as usize;
        let bytes = self.bytes(len)?;
        FixedBytes::from_slice(bytes).ok_or_else(|| malformed(self.tag, "string too long"))
    }

    fn rest(&mut self) -> &'a [u8] {
        std::mem::take(&mut self.buf)
    }

    fn finish(self) -> Result<()> {
        if !self.buf.is_empty() {
            return Err(malformed(self.tag, "trailing bytes"));
        }
        Ok(())
    }
}

/// Inline byte buffer with a fixed upper bound
#[derive(Clone, Copy)]
pub struct FixedBytes<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> FixedBytes<N> {
    pub const CAPACITY: usize = N;

    pub const fn new() -> Self {
        Self { buf: [0; N], len: 0 }
    }

    /// Copy `bytes`, or `None` if longer than `N`
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > N {
            return None;
        }
        let mut out = Self::new();
        out.buf[..bytes.len()].copy_from_slice(bytes);
        out.len = bytes.len();
        Some(out)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<const N: usize> Default for FixedBytes<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PartialEq for FixedBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const N: usize> Eq for FixedBytes<N> {}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl<const N: usize> fmt::Debug for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", hex::encode(self.as_slice()))
    }
}

/// Result of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseIe {
    pub result: ResponseCode,
}

impl ResponseIe {
    pub fn new(result: ResponseCode) -> Self {
        Self { result }
    }
}

impl InformationElement for ResponseIe {
    const TAG: u8 = ie_tags::RESPONSE;

    fn encoded_len(&self) -> usize {
        1
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u8(self.result.into());
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let result = ResponseCode::from(r.u8()?);
        r.finish()?;
        Ok(Self { result })
    }
}

/// Base station a registration should target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BaseWantedIe {
    pub rfpi: Rfpi,
}

impl InformationElement for BaseWantedIe {
    const TAG: u8 = ie_tags::BASE_WANTED;

    fn encoded_len(&self) -> usize {
        Rfpi::LEN
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_slice(self.rfpi.as_bytes());
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let rfpi = Rfpi::from_slice(r.bytes(Rfpi::LEN)?)?;
        r.finish()?;
        Ok(Self { rfpi })
    }
}

/// Alert raised by a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertIe {
    pub unit_type: UnitType,
    pub alert_state: AlertState,
}

impl InformationElement for AlertIe {
    const TAG: u8 = ie_tags::ALERT;

    fn encoded_len(&self) -> usize {
        6
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u16(self.unit_type.into());
        out.put_u32(self.alert_state.into());
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let unit_type = UnitType::try_from(r.u16()?)?;
        let alert_state = AlertState::try_from(r.u32()?)?;
        r.finish()?;
        Ok(Self {
            unit_type,
            alert_state,
        })
    }
}

/// Asks the peer to answer with a response message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResponseRequiredIe;

impl InformationElement for ResponseRequiredIe {
    const TAG: u8 = ie_tags::RESPONSE_REQUIRED;

    fn encoded_len(&self) -> usize {
        0
    }

    fn write_value(&self, _out: &mut [u8]) {}

    fn read_value(value: &[u8]) -> Result<Self> {
        Reader::new(Self::TAG, value).finish()?;
        Ok(Self)
    }
}

/// Battery charge in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatteryLevelIe {
    pub level: u8,
}

impl InformationElement for BatteryLevelIe {
    const TAG: u8 = ie_tags::BATTERY_LEVEL;

    fn encoded_len(&self) -> usize {
        1
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u8(self.level);
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let level = r.u8()?;
        r.finish()?;
        Ok(Self { level })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TamperAlertIe {
    pub status: TamperStatus,
}

impl InformationElement for TamperAlertIe {
    const TAG: u8 = ie_tags::TAMPER_ALERT;

    fn encoded_len(&self) -> usize {
        1
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u8(self.status.into());
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let status = TamperStatus::try_from(r.u8()?)?;
        r.finish()?;
        Ok(Self { status })
    }
}

/// Firmware version string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VersionIe {
    pub version: FixedBytes<IE_STRING_MAX_SIZE>,
}

impl VersionIe {
    /// Version as text, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.version.as_slice()).ok()
    }
}

impl InformationElement for VersionIe {
    const TAG: u8 = ie_tags::VERSION;

    fn encoded_len(&self) -> usize {
        1 + self.version.len()
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u8(self.version.len() as u8);
        out.put_slice(self.version.as_slice());
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let version = r.short_string()?;
        r.finish()?;
        Ok(Self { version })
    }
}

/// Generic FUN message carrying application data between units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FunIe {
    pub src_device_id: u16,
    pub src_unit_id: u8,
    pub dst_device_id: u16,
    pub dst_unit_id: u8,
    pub message_type: u8,
    pub address_type: u8,
    pub interface_type: u8,
    pub interface_id: u16,
    pub interface_member: u8,
    pub data: FixedBytes<FUN_MAX_DATA_SIZE>,
}

impl FunIe {
    const FIXED_LEN: usize = 14;
}

impl InformationElement for FunIe {
    const TAG: u8 = ie_tags::FUN;

    fn encoded_len(&self) -> usize {
        Self::FIXED_LEN + self.data.len()
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u16(self.src_device_id);
        out.put_u8(self.src_unit_id);
        out.put_u16(self.dst_device_id);
        out.put_u8(self.dst_unit_id);
        out.put_u8(self.message_type);
        out.put_u8(self.address_type);
        out.put_u8(self.interface_type);
        out.put_u16(self.interface_id);
        out.put_u8(self.interface_member);
        out.put_u16(self.data.len() as u16);
        out.put_slice(self.data.as_slice());
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let mut ie = Self {
            src_device_id: r.u16()?,
            src_unit_id: r.u8()?,
            dst_device_id: r.u16()?,
            dst_unit_id: r.u8()?,
            message_type: r.u8()?,
            address_type: r.u8()?,
            interface_type: r.u8()?,
            interface_id: r.u16()?,
            interface_member: r.u8()?,
            data: FixedBytes::new(),
        };

        let len = r.u16()? as usize;
        ie.data = FixedBytes::from_slice(r.bytes(len)?)
            .ok_or_else(|| malformed(Self::TAG, "FUN data too long"))?;
        r.finish()?;
        Ok(ie)
    }
}

/// Parameter addressed by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParameterIe {
    pub param_type: u8,
    pub id: u8,
    pub data: FixedBytes<PARAMETER_MAX_SIZE>,
}

impl InformationElement for ParameterIe {
    const TAG: u8 = ie_tags::PARAMETER;

    fn encoded_len(&self) -> usize {
        4 + self.data.len()
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u8(self.param_type);
        out.put_u8(self.id);
        out.put_u16(self.data.len() as u16);
        out.put_slice(self.data.as_slice());
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let param_type = r.u8()?;
        let id = r.u8()?;
        let len = r.u16()? as usize;
        let data = FixedBytes::from_slice(r.bytes(len)?)
            .ok_or_else(|| malformed(Self::TAG, "parameter too long"))?;
        r.finish()?;
        Ok(Self {
            param_type,
            id,
            data,
        })
    }
}

/// Parameter addressed by raw offset
///
/// Read requests carry a length and no data; writes and read responses
/// carry `length` bytes of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParameterDirectIe {
    pub param_type: u8,
    pub offset: u32,
    pub length: u16,
    pub data: FixedBytes<PARAMETER_MAX_SIZE>,
}

impl ParameterDirectIe {
    /// Length field as sent: the data length whenever data is present
    pub fn wire_length(&self) -> u16 {
        if self.data.is_empty() {
            self.length
        } else {
            self.data.len() as u16
        }
    }
}

impl InformationElement for ParameterDirectIe {
    const TAG: u8 = ie_tags::PARAMETER_DIRECT;

    fn encoded_len(&self) -> usize {
        7 + self.data.len()
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u8(self.param_type);
        out.put_u32(self.offset);
        out.put_u16(self.wire_length());
        out.put_slice(self.data.as_slice());
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let param_type = r.u8()?;
        let offset = r.u32()?;
        let length = r.u16()?;
        let rest = r.rest();

        if !rest.is_empty() && rest.len() != length as usize {
            return Err(malformed(Self::TAG, "data does not match length"));
        }
        let data = FixedBytes::from_slice(rest)
            .ok_or_else(|| malformed(Self::TAG, "parameter too long"))?;

        Ok(Self {
            param_type,
            offset,
            length,
            data,
        })
    }
}

/// Module status sent with the Hello indication and status responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralStatusIe {
    pub status: ModuleStatus,
}

impl From<GeneralStatusIe> for ModuleStatus {
    fn from(ie: GeneralStatusIe) -> Self {
        ie.status
    }
}

impl InformationElement for GeneralStatusIe {
    const TAG: u8 = ie_tags::GENERAL_STATUS;

    fn encoded_len(&self) -> usize {
        5
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u8(self.status.powerup_mode as u8);
        out.put_u8(self.status.registration_status as u8);
        out.put_u8(self.status.eeprom_status);
        out.put_u16(self.status.device_id);
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let status = ModuleStatus {
            powerup_mode: PowerupMode::try_from(r.u8()?)?,
            registration_status: RegistrationStatus::try_from(r.u8()?)?,
            eeprom_status: r.u8()?,
            device_id: r.u16()?,
        };
        r.finish()?;
        Ok(Self { status })
    }
}

/// Outcome of a registration, with the address the base assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistrationResponseIe {
    pub response: ResponseCode,
    pub device_address: u16,
}

impl InformationElement for RegistrationResponseIe {
    const TAG: u8 = ie_tags::REGISTRATION_RESPONSE;

    fn encoded_len(&self) -> usize {
        3
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u8(self.response.into());
        out.put_u16(self.device_address);
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let response = ResponseCode::from(r.u8()?);
        let device_address = r.u16()?;
        r.finish()?;
        Ok(Self {
            response,
            device_address,
        })
    }
}

/// Battery voltage window in millivolts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatteryMeasureInfoIe {
    pub max_mv: u16,
    pub min_mv: u16,
}

impl InformationElement for BatteryMeasureInfoIe {
    const TAG: u8 = ie_tags::BATTERY_MEASURE_INFO;

    fn encoded_len(&self) -> usize {
        4
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u16(self.max_mv);
        out.put_u16(self.min_mv);
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let max_mv = r.u16()?;
        let min_mv = r.u16()?;
        r.finish()?;
        Ok(Self { max_mv, min_mv })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U8Ie {
    pub value: u8,
}

impl InformationElement for U8Ie {
    const TAG: u8 = ie_tags::U8;

    fn encoded_len(&self) -> usize {
        1
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u8(self.value);
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let value = r.u8()?;
        r.finish()?;
        Ok(Self { value })
    }
}

/// ULE voice call settings
///
/// Only the fields that are `Some` travel on the wire. The field mask is
/// derived from them, and the fields follow it in mask-bit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallSettingIe {
    pub preferred_codec: Option<u8>,
    pub digits: Option<FixedBytes<IE_STRING_MAX_SIZE>>,
    pub other_party_type: Option<FixedBytes<IE_STRING_MAX_SIZE>>,
    pub other_party_name: Option<FixedBytes<IE_STRING_MAX_SIZE>>,
    pub other_party_id: Option<FixedBytes<IE_STRING_MAX_SIZE>>,
}

impl CallSettingIe {
    pub fn field_mask(&self) -> u32 {
        let mut mask = 0;
        if self.preferred_codec.is_some() {
            mask |= call_setting::PREFERRED_CODEC;
        }
        if self.digits.is_some() {
            mask |= call_setting::DIGITS;
        }
        if self.other_party_type.is_some() {
            mask |= call_setting::OTHER_PARTY_TYPE;
        }
        if self.other_party_name.is_some() {
            mask |= call_setting::OTHER_PARTY_NAME;
        }
        if self.other_party_id.is_some() {
            mask |= call_setting::OTHER_PARTY_ID;
        }
        mask
    }

    fn strings(&self) -> [Option<&FixedBytes<IE_STRING_MAX_SIZE>>; 4] {
        [
            self.digits.as_ref(),
            self.other_party_type.as_ref(),
            self.other_party_name.as_ref(),
            self.other_party_id.as_ref(),
        ]
    }
}

impl InformationElement for CallSettingIe {
    const TAG: u8 = ie_tags::CALL_SETTING;

    fn encoded_len(&self) -> usize {
        let codec = usize::from(self.preferred_codec.is_some());
        let strings: usize = self.strings().iter().flatten().map(|s| 1 + s.len()).sum();
        4 + codec + strings
    }

    fn write_value(&self, mut out: &mut [u8]) {
        out.put_u32(self.field_mask());
        if let Some(codec) = self.preferred_codec {
            out.put_u8(codec);
        }
        for s in self.strings().into_iter().flatten() {
            out.put_u8(s.len() as u8);
            out.put_slice(s.as_slice());
        }
    }

    fn read_value(value: &[u8]) -> Result<Self> {
        let mut r = Reader::new(Self::TAG, value);
        let mask = r.u32()?;
        if mask & !call_setting::ALL != 0 {
            return Err(malformed(Self::TAG, "unknown field mask bits"));
        }

        let mut ie = Self::default();
        if mask & call_setting::PREFERRED_CODEC != 0 {
            ie.preferred_codec = Some(r.u8()?);
        }
        if mask & call_setting::DIGITS != 0 {
            ie.digits = Some(r.short_string()?);
        }
        if mask & call_setting::OTHER_PARTY_TYPE != 0 {
            ie.other_party_type = Some(r.short_string()?);
        }
        if mask & call_setting::OTHER_PARTY_NAME != 0 {
            ie.other_party_name = Some(r.short_string()?);
        }
        if mask & call_setting::OTHER_PARTY_ID != 0 {
            ie.other_party_id = Some(r.short_string()?);
        }
        r.finish()?;
        Ok(ie)
    }
}

/// Any IE, decoded by tag
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::large_enum_variant)]
pub enum Ie<'a> {
    Response(ResponseIe),
    BaseWanted(BaseWantedIe),
    Alert(AlertIe),
    ResponseRequired,
    BatteryLevel(BatteryLevelIe),
    TamperAlert(TamperAlertIe),
    Version(VersionIe),
    Fun(FunIe),
    Parameter(ParameterIe),
    ParameterDirect(ParameterDirectIe),
    GeneralStatus(GeneralStatusIe),
    RegistrationResponse(RegistrationResponseIe),
    BatteryMeasureInfo(BatteryMeasureInfoIe),
    U8(U8Ie),
    CallSetting(CallSettingIe),

    /// Tag this crate has no layout for; kept as raw bytes
    Unknown(RawIe<'a>),
}

impl<'a> Ie<'a> {
    /// Decode one entry by its tag
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedIe` (or a domain value error) when a known
    /// tag carries a value that does not match its layout.
    pub fn decode(raw: RawIe<'a>) -> Result<Self> {
        let value = raw.value;
        let ie = match raw.tag {
            ie_tags::RESPONSE => Self::Response(ResponseIe::read_value(value)?),
            ie_tags::BASE_WANTED => Self::BaseWanted(BaseWantedIe::read_value(value)?),
            ie_tags::ALERT => Self::Alert(AlertIe::read_value(value)?),
            ie_tags::RESPONSE_REQUIRED => {
                ResponseRequiredIe::read_value(value)?;
                Self::ResponseRequired
            }
            ie_tags::BATTERY_LEVEL => Self::BatteryLevel(BatteryLevelIe::read_value(value)?),
            ie_tags::TAMPER_ALERT => Self::TamperAlert(TamperAlertIe::read_value(value)?),
            ie_tags::VERSION => Self::Version(VersionIe::read_value(value)?),
            ie_tags::FUN => Self::Fun(FunIe::read_value(value)?),
            ie_tags::PARAMETER => Self::Parameter(ParameterIe::read_value(value)?),
            ie_tags::PARAMETER_DIRECT => {
                Self::ParameterDirect(ParameterDirectIe::read_value(value)?)
            }
            ie_tags::GENERAL_STATUS => Self::GeneralStatus(GeneralStatusIe::read_value(value)?),
            ie_tags::REGISTRATION_RESPONSE => {
                Self::RegistrationResponse(RegistrationResponseIe::read_value(value)?)
            }
            ie_tags::BATTERY_MEASURE_INFO => {
                Self::BatteryMeasureInfo(BatteryMeasureInfoIe::read_value(value)?)
            }
            ie_tags::U8 => Self::U8(U8Ie::read_value(value)?),
            ie_tags::CALL_SETTING => Self::CallSetting(CallSettingIe::read_value(value)?),
            _ => Self::Unknown(raw),
        };
        Ok(ie)
    }

    pub fn tag(&self) -> u8 {
        match self {
            Self::Response(_) => ResponseIe::TAG,
            Self::BaseWanted(_) => BaseWantedIe::TAG,
            Self::Alert(_) => AlertIe::TAG,
            Self::ResponseRequired => ResponseRequiredIe::TAG,
            Self::BatteryLevel(_) => BatteryLevelIe::TAG,
            Self::TamperAlert(_) => TamperAlertIe::TAG,
            Self::Version(_) => VersionIe::TAG,
            Self::Fun(_) => FunIe::TAG,
            Self::Parameter(_) => ParameterIe::TAG,
            Self::ParameterDirect(_) => ParameterDirectIe::TAG,
            Self::GeneralStatus(_) => GeneralStatusIe::TAG,
            Self::RegistrationResponse(_) => RegistrationResponseIe::TAG,
            Self::BatteryMeasureInfo(_) => BatteryMeasureInfoIe::TAG,
            Self::U8(_) => U8Ie::TAG,
            Self::CallSetting(_) => CallSettingIe::TAG,
            Self::Unknown(raw) => raw.tag,
        }
    }

    /// Append this IE to a list
    pub fn add_to(&self, list: &mut IeList<'_>) -> Result<()> {
        match self {
            Self::Response(ie) => ie.add_to(list),
            Self::BaseWanted(ie) => ie.add_to(list),
            Self::Alert(ie) => ie.add_to(list),
            Self::ResponseRequired => ResponseRequiredIe.add_to(list),
            Self::BatteryLevel(ie) => ie.add_to(list),
            Self::TamperAlert(ie) => ie.add_to(list),
            Self::Version(ie) => ie.add_to(list),
            Self::Fun(ie) => ie.add_to(list),
            Self::Parameter(ie) => ie.add_to(list),
            Self::ParameterDirect(ie) => ie.add_to(list),
            Self::GeneralStatus(ie) => ie.add_to(list),
            Self::RegistrationResponse(ie) => ie.add_to(list),
            Self::BatteryMeasureInfo(ie) => ie.add_to(list),
            Self::U8(ie) => ie.add_to(list),
            Self::CallSetting(ie) => ie.add_to(list),
            Self::Unknown(raw) => list.add_simple(raw.tag, raw.value),
        }
    }
}
