//! In-memory CMND API message

use std::fmt;

use byteorder::{BigEndian, ByteOrder};
use bytes::BytesMut;
use tracing::trace;

use crate::{
    checksum,
    constants::{pos, FRAME_MAX_SIZE, HEADER_SIZE, PACKET_MAX_SIZE, PREAMBLE_SIZE, SYNC},
    error::{Error, Result},
    ie::InformationElement,
    ie_list::{self, IeIter, IeList},
    service::{self, Service},
};

/// One CMND API message: header fields plus an IE payload
///
/// # Frame Layout
///
/// ```text
/// ┌────────┬────────┬────────┬────────┬─────────┬─────────┬──────────┬─────────┐
/// │  Sync  │ Length │ Cookie │  Unit  │ Service │ Message │ Checksum │ Payload │
/// │ DA DA  │ u16 BE │   u8   │   u8   │ u16 BE  │   u8    │    u8    │ N bytes │
/// └────────┴────────┴────────┴────────┴─────────┴─────────┴──────────┴─────────┘
/// ```
///
/// `Length` counts everything after itself (`6 + N`). The payload lives in a
/// fixed buffer of [`PACKET_MAX_SIZE`] bytes and its length can never
/// exceed that capacity.
///
/// # Examples
///
/// ```
/// use cmnd_core::{builders, Envelope};
/// use cmnd_core::service::{system, Service};
///
/// let mut env = Envelope::new();
/// builders::system::reset_req(&mut env);
///
/// assert_eq!(env.service_id, u16::from(Service::System));
/// assert_eq!(env.message_id, system::RESET_REQ);
/// assert_eq!(env.encode().len(), 10);
/// ```
#[derive(Clone)]
pub struct Envelope {
    /// Opaque header byte, echoed as received
    pub cookie: u8,

    /// Functional unit within the device
    pub unit_id: u8,

    /// Service identifier in host order
    pub service_id: u16,

    pub message_id: u8,

    /// Checksum as received, or as stored by [`Envelope::seal`]
    pub checksum: u8,

    pub(crate) data_length: usize,
    pub(crate) data: [u8; PACKET_MAX_SIZE],
}

impl Envelope {
    /// Create a zeroed envelope
    pub const fn new() -> Self {
        Self {
            cookie: 0,
            unit_id: 0,
            service_id: 0,
            message_id: 0,
            checksum: 0,
            data_length: 0,
            data: [0; PACKET_MAX_SIZE],
        }
    }

    /// Payload bytes
    pub fn data(&self) -> &[u8] {
        &self.data[..self.data_length]
    }

    pub fn data_length(&self) -> usize {
        self.data_length
    }

    /// Replace the payload
    ///
    /// # Errors
    ///
    /// Returns `Error::PayloadTooLarge` and leaves the envelope unchanged if
    /// `payload` does not fit.
    pub fn set_payload(&mut self, payload: &[u8]) -> Result<()> {
        if payload.len() > PACKET_MAX_SIZE {
            return Err(Error::PayloadTooLarge {
                size: payload.len(),
                max: PACKET_MAX_SIZE,
            });
        }
        self.data[..payload.len()].copy_from_slice(payload);
        self.data_length = payload.len();
        Ok(())
    }

    /// Zero every field
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Set the header of a new outgoing message and fill its IE list
    ///
    /// The cookie is left as is. On error the payload length is reset to
    /// zero so the half-built message is never mistaken for a valid one.
    pub fn compose<F>(&mut self, service: Service, message_id: u8, unit_id: u8, fill: F) -> Result<()>
    where
        F: FnOnce(&mut IeList<'_>) -> Result<()>,
    {
        self.service_id = service.into();
        self.message_id = message_id;
        self.unit_id = unit_id;
        self.checksum = 0;

        let mut list = IeList::create_empty(&mut self.data);
        let result = fill(&mut list);
        let size = list.size();

        self.data_length = if result.is_ok() { size } else { 0 };
        result
    }

    /// Append one IE after the existing payload
    pub fn append_ie<T: InformationElement>(&mut self, ie: &T) -> Result<()> {
        let mut list = IeList::create_empty(&mut self.data[self.data_length..]);
        ie.add_to(&mut list)?;
        self.data_length += list.size();
        Ok(())
    }

    /// Checksum of the current header fields and payload
    pub fn compute_checksum(&self) -> u8 {
        checksum::calculate(
            self.cookie,
            self.unit_id,
            self.service_id,
            self.message_id,
            self.data(),
        )
    }

    /// Store the computed checksum in the header
    pub fn seal(&mut self) {
        self.checksum = self.compute_checksum();
    }

    /// Check the stored checksum against the header and payload
    pub fn verify_checksum(&self) -> bool {
        self.checksum == self.compute_checksum()
    }

    /// Copy the value of the first IE with `tag` into `out`
    ///
    /// Returns `false` when the tag is absent or its value is not exactly
    /// `out.len()` bytes. Neither case is an error.
    pub fn ie_get(&self, tag: u8, out: &mut [u8]) -> bool {
        match ie_list::find(self.data(), tag) {
            Some(value) if value.len() == out.len() => {
                out.copy_from_slice(value);
                true
            }
            _ => false,
        }
    }

    /// Value bytes of the first IE with `tag`
    pub fn find_ie(&self, tag: u8) -> Option<&[u8]> {
        ie_list::find(self.data(), tag)
    }

    /// Decode the first IE of type `T`
    ///
    /// An absent or malformed IE yields `None`.
    pub fn ie<T: InformationElement>(&self) -> Option<T> {
        self.find_ie(T::TAG)
            .and_then(|value| T::read_value(value).ok())
    }

    pub fn has_ie(&self, tag: u8) -> bool {
        self.find_ie(tag).is_some()
    }

    /// Iterate over every IE in the payload
    pub fn ies(&self) -> IeIter<'_> {
        IeIter::new(self.data())
    }

    /// Size of the serialized frame
    pub fn frame_len(&self) -> usize {
        PREAMBLE_SIZE + HEADER_SIZE + self.data_length
    }

    /// Serialize the full serial frame into `out`
    ///
    /// The checksum is computed from the current fields; the stored
    /// `checksum` is ignored. Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `out` cannot hold the frame.
    pub fn encode_into(&self, out: &mut [u8]) -> Result<usize> {
        let len = self.frame_len();
        if out.len() < len {
            return Err(Error::BufferTooSmall {
                needed: len,
                available: out.len(),
            });
        }
        Ok(self.write_frame(out))
    }

    /// Serialize the full serial frame into a new buffer
    pub fn encode(&self) -> BytesMut {
        let mut buf = [0u8; FRAME_MAX_SIZE];
        let len = self.write_frame(&mut buf);
        BytesMut::from(&buf[..len])
    }

    /// Write the frame into a buffer known to hold it
    pub(crate) fn write_frame(&self, out: &mut [u8]) -> usize {
        let len = self.frame_len();
        debug_assert!(out.len() >= len);

        BigEndian::write_u16(&mut out[0..2], SYNC);
        BigEndian::write_u16(&mut out[2..4], (HEADER_SIZE + self.data_length) as u16);

        let header = &mut out[PREAMBLE_SIZE..PREAMBLE_SIZE + HEADER_SIZE];
        header[pos::COOKIE] = self.cookie;
        header[pos::UNIT_ID] = self.unit_id;
        BigEndian::write_u16(&mut header[pos::SERVICE_ID..pos::MESSAGE_ID], self.service_id);
        header[pos::MESSAGE_ID] = self.message_id;
        header[pos::CHECKSUM] = self.compute_checksum();

        out[PREAMBLE_SIZE + HEADER_SIZE..len].copy_from_slice(self.data());

        trace!(frame = %hex::encode(&out[..len]), "Encoded frame");
        len
    }

    /// Service of this message, if known
    pub fn service(&self) -> Result<Service> {
        Service::try_from(self.service_id)
    }

    /// Check whether this message is `message_id` of `service`
    pub fn is(&self, service: Service, message_id: u8) -> bool {
        self.service_id == u16::from(service) && self.message_id == message_id
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Envelope {
    fn eq(&self, other: &Self) -> bool {
        self.cookie == other.cookie
            && self.unit_id == other.unit_id
            && self.service_id == other.service_id
            && self.message_id == other.message_id
            && self.checksum == other.checksum
            && self.data() == other.data()
    }
}

impl Eq for Envelope {}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("cookie", &format!("0x{:02X}", self.cookie))
            .field("unit_id", &self.unit_id)
            .field("service_id", &format!("0x{:04X}", self.service_id))
            .field("message_id", &format!("0x{:02X}", self.message_id))
            .field("checksum", &format!("0x{:02X}", self.checksum))
            .field("data", &hex::encode(self.data()))
            .finish()
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (service, message) = service::describe(self.service_id, self.message_id);
        write!(
            f,
            "{}<0x{:04X}> {}<0x{:02X}> unit={} len={}",
            service, self.service_id, message, self.message_id, self.unit_id, self.data_length
        )
    }
}
