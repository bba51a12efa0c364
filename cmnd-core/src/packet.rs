//! Serialized frames and the one-shot parser

use std::fmt;

use byteorder::{BigEndian, ByteOrder};
use tracing::debug;

use crate::{
    checksum,
    constants::{pos, DEFAULT_COOKIE, FRAME_MAX_SIZE, HEADER_SIZE, PACKET_MAX_SIZE, PREAMBLE_SIZE, SYNC},
    envelope::Envelope,
    error::{Error, Result},
};

/// A complete serial frame in a fixed buffer
///
/// This is the form handed to a transport for writing. It never allocates.
///
/// # Examples
///
/// ```
/// use cmnd_core::{builders, Packet};
///
/// let packet = Packet::build(|env| {
///     builders::system::rssi_get_req(env);
///     Ok(())
/// })
/// .unwrap();
/// assert_eq!(&packet.as_bytes()[..2], &[0xDA, 0xDA]);
///
/// let env = packet.parse().unwrap();
/// assert_eq!(env.cookie, 0x68);
/// ```
#[derive(Clone)]
pub struct Packet {
    buffer: [u8; FRAME_MAX_SIZE],
    length: usize,
}

impl Packet {
    /// Serialize an envelope
    pub fn from_envelope(envelope: &Envelope) -> Self {
        let mut buffer = [0u8; FRAME_MAX_SIZE];
        let length = envelope.write_frame(&mut buffer);
        Self { buffer, length }
    }

    /// Run a builder on a fresh envelope carrying the default cookie and
    /// serialize the result
    pub fn build<F>(build: F) -> Result<Self>
    where
        F: FnOnce(&mut Envelope) -> Result<()>,
    {
        let mut envelope = Envelope::new();
        envelope.cookie = DEFAULT_COOKIE;
        build(&mut envelope)?;
        Ok(Self::from_envelope(&envelope))
    }

    /// Copy raw frame bytes
    ///
    /// # Errors
    ///
    /// Returns `Error::PayloadTooLarge` if `bytes` exceeds the largest frame.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > FRAME_MAX_SIZE {
            return Err(Error::PayloadTooLarge {
                size: bytes.len(),
                max: FRAME_MAX_SIZE,
            });
        }
        let mut buffer = [0u8; FRAME_MAX_SIZE];
        buffer[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            buffer,
            length: bytes.len(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.length]
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Parse this frame back into an envelope
    pub fn parse(&self) -> Result<Envelope> {
        parse_frame(self.as_bytes())
    }
}

impl AsRef<[u8]> for Packet {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packet")
            .field("length", &self.length)
            .field("bytes", &hex::encode(self.as_bytes()))
            .finish()
    }
}

/// Parse a packet body (CMND API header + payload, no sync/length preamble)
///
/// # Errors
///
/// - `PacketTooShort` if `body` is shorter than the 6-byte header
/// - `PayloadTooLarge` if the payload exceeds the envelope capacity
/// - `ChecksumMismatch` if the checksum byte does not match
pub fn parse_packet(body: &[u8]) -> Result<Envelope> {
    let mut envelope = Envelope::new();
    parse_packet_into(body, &mut envelope)?;
    Ok(envelope)
}

/// Parse a packet body into an existing envelope
///
/// Every check runs before `out` is touched, so on error `out` keeps its
/// previous contents.
pub fn parse_packet_into(body: &[u8], out: &mut Envelope) -> Result<()> {
    if body.len() < HEADER_SIZE {
        return Err(Error::PacketTooShort {
            expected: HEADER_SIZE,
            actual: body.len(),
        });
    }

    let data_length = body.len() - HEADER_SIZE;
    if data_length > PACKET_MAX_SIZE {
        return Err(Error::PayloadTooLarge {
            size: data_length,
            max: PACKET_MAX_SIZE,
        });
    }

    let cookie = body[pos::COOKIE];
    let unit_id = body[pos::UNIT_ID];
    let service_id = BigEndian::read_u16(&body[pos::SERVICE_ID..pos::MESSAGE_ID]);
    let message_id = body[pos::MESSAGE_ID];
    let received = body[pos::CHECKSUM];
    let payload = &body[pos::DATA_START..];

    let expected = checksum::calculate(cookie, unit_id, service_id, message_id, payload);
    if expected != received {
        debug!(expected, received, "Rejected packet with bad checksum");
        return Err(Error::ChecksumMismatch { expected, received });
    }

    out.cookie = cookie;
    out.unit_id = unit_id;
    out.service_id = service_id;
    out.message_id = message_id;
    out.checksum = received;
    out.data[..data_length].copy_from_slice(payload);
    out.data_length = data_length;

    Ok(())
}

/// Parse a full serial frame including the sync word and length field
///
/// # Errors
///
/// In addition to the [`parse_packet`] errors: `InvalidSync` if the frame
/// does not start with `DA DA`, `LengthMismatch` if the length field does
/// not match the bytes supplied.
pub fn parse_frame(frame: &[u8]) -> Result<Envelope> {
    if frame.len() < PREAMBLE_SIZE + HEADER_SIZE {
        return Err(Error::PacketTooShort {
            expected: PREAMBLE_SIZE + HEADER_SIZE,
            actual: frame.len(),
        });
    }

    let sync = BigEndian::read_u16(&frame[0..2]);
    if sync != SYNC {
        return Err(Error::InvalidSync(sync));
    }

    let declared = BigEndian::read_u16(&frame[2..PREAMBLE_SIZE]) as usize;
    let actual = frame.len() - PREAMBLE_SIZE;
    if declared != actual {
        return Err(Error::LengthMismatch { declared, actual });
    }

    parse_packet(&frame[PREAMBLE_SIZE..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ie::{AlertIe, InformationElement};
    use crate::service::{alert, Service};
    use cmnd_types::{AlertState, UnitType};
    use pretty_assertions::assert_eq;

    fn alert_envelope() -> Envelope {
        let mut env = Envelope::new();
        env.cookie = DEFAULT_COOKIE;
        env.compose(Service::Alert, alert::NOTIFY_STATUS_REQ, 2, |list| {
            AlertIe {
                unit_type: UnitType::SmokeDetector,
                alert_state: AlertState::Alerting,
            }
            .add_to(list)
        })
        .unwrap();
        env.seal();
        env
    }

    #[test]
    fn test_frame_roundtrip() {
        let env = alert_envelope();
        let packet = Packet::from_envelope(&env);

        assert_eq!(packet.len(), 10 + 9);
        assert_eq!(packet.parse().unwrap(), env);
    }

    #[test]
    fn test_full_payload_fills_frame() {
        let mut env = Envelope::new();
        env.set_payload(&[0x3C; PACKET_MAX_SIZE]).unwrap();
        env.seal();

        let packet = Packet::from_envelope(&env);
        assert_eq!(packet.len(), FRAME_MAX_SIZE);
        assert_eq!(packet.parse().unwrap(), env);
    }

    #[test]
    fn test_parse_packet_body() {
        let env = alert_envelope();
        let packet = Packet::from_envelope(&env);

        let parsed = parse_packet(&packet.as_bytes()[PREAMBLE_SIZE..]).unwrap();
        assert_eq!(parsed, env);
    }

    #[test]
    fn test_parse_packet_too_short() {
        assert!(matches!(
            parse_packet(&[0x68, 0, 0, 0, 5]),
            Err(Error::PacketTooShort { expected: 6, actual: 5 })
        ));
    }

    #[test]
    fn test_parse_packet_oversize_leaves_output_untouched() {
        let body = [0u8; HEADER_SIZE + PACKET_MAX_SIZE + 1];
        let mut out = Envelope::new();

        let result = parse_packet_into(&body, &mut out);
        assert!(matches!(result, Err(Error::PayloadTooLarge { size: 257, max: 256 })));
        assert_eq!(out, Envelope::new());
    }

    #[test]
    fn test_parse_packet_full_capacity() {
        let mut env = Envelope::new();
        env.set_payload(&[0x5A; PACKET_MAX_SIZE]).unwrap();
        env.seal();

        let packet = Packet::from_envelope(&env);
        assert_eq!(packet.len(), FRAME_MAX_SIZE);
        assert_eq!(packet.parse().unwrap(), env);
    }

    #[test]
    fn test_parse_bad_checksum() {
        let env = alert_envelope();
        let mut bytes = Packet::from_envelope(&env).as_bytes().to_vec();
        bytes[PREAMBLE_SIZE + pos::CHECKSUM] ^= 0x01;

        let mut out = Envelope::new();
        let result = parse_packet_into(&bytes[PREAMBLE_SIZE..], &mut out);
        assert!(matches!(result, Err(Error::ChecksumMismatch { .. })));
        assert_eq!(out, Envelope::new());
    }

    #[test]
    fn test_parse_frame_invalid_sync() {
        let mut bytes = Packet::from_envelope(&alert_envelope()).as_bytes().to_vec();
        bytes[1] = 0xDB;
        assert!(matches!(parse_frame(&bytes), Err(Error::InvalidSync(0xDADB))));
    }

    #[test]
    fn test_parse_frame_length_mismatch() {
        let mut bytes = Packet::from_envelope(&alert_envelope()).as_bytes().to_vec();
        bytes.push(0);
        assert!(matches!(
            parse_frame(&bytes),
            Err(Error::LengthMismatch { declared: 15, actual: 16 })
        ));
    }

    #[test]
    fn test_packet_from_bytes() {
        let original = Packet::from_envelope(&alert_envelope());
        let copy = Packet::from_bytes(original.as_bytes()).unwrap();
        assert_eq!(copy.as_bytes(), original.as_bytes());

        assert!(Packet::from_bytes(&[0u8; FRAME_MAX_SIZE + 1]).is_err());
    }
}
