//! CMND checksum and byte-order helpers
//!
//! The checksum is an 8-bit additive sum over:
//! 1. Both bytes of the length field (big-endian)
//! 2. Cookie, unit id, both service id bytes (big-endian), message id
//! 3. Every payload byte
//!
//! The checksum byte's own position is excluded. Overflow wraps.

use tracing::trace;

use crate::constants::HEADER_SIZE;

/// Convert a 16-bit value from host to network (big-endian) order
#[inline]
pub fn host_to_net16(value: u16) -> u16 {
    value.to_be()
}

/// Convert a 16-bit value from network (big-endian) to host order
#[inline]
pub fn net_to_host16(value: u16) -> u16 {
    u16::from_be(value)
}

/// Wrapping byte sum
#[inline]
pub fn sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

/// Calculate the CMND frame checksum
///
/// The length field is derived from the payload, so callers only supply
/// the header fields that travel on the wire.
///
/// # Examples
///
/// ```
/// use cmnd_core::checksum;
///
/// let checksum = checksum::calculate(0x68, 0, 0x0201, 0x08, &[]);
/// assert_eq!(checksum, 0x79);
/// ```
pub fn calculate(cookie: u8, unit_id: u8, service_id: u16, message_id: u8, payload: &[u8]) -> u8 {
    let length = (HEADER_SIZE + payload.len()) as u16;
    let [len_hi, len_lo] = length.to_be_bytes();
    let [svc_hi, svc_lo] = service_id.to_be_bytes();

    let header = sum(&[len_hi, len_lo, cookie, unit_id, svc_hi, svc_lo, message_id]);
    let checksum = header.wrapping_add(sum(payload));

    trace!(
        cookie,
        unit_id,
        service_id,
        message_id,
        payload_len = payload.len(),
        checksum,
        "Calculated checksum"
    );

    checksum
}

/// Verify checksum
pub fn verify(
    cookie: u8,
    unit_id: u8,
    service_id: u16,
    message_id: u8,
    payload: &[u8],
    expected: u8,
) -> bool {
    calculate(cookie, unit_id, service_id, message_id, payload) == expected
}
