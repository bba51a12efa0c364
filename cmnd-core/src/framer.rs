//! Incremental byte-stream framer
//!
//! Rebuilds envelopes from a serial stream one byte at a time. Each call
//! does a constant amount of work and never allocates, so the framer can
//! be driven from a receive interrupt, a polling loop or a test feeding a
//! byte array.
//!
//! # State Machine
//!
//! ```text
//!            sync, length, header          payload bytes
//!   ┌─────────────────────────────┐   ┌──────────────────┐
//!   │       AwaitingHeader        │──▶│  AwaitingPayload │
//!   └─────────────────────────────┘   └──────────────────┘
//!         ▲      │ rejected                  │ complete / bad checksum
//!         └──────┴───────────────────────────┘
//! ```
//!
//! A frame whose length field is below the header size or above the
//! payload capacity is dropped as soon as the length is known, before any
//! payload byte is stored. Hunting then resumes from the byte after the
//! rejected sync, so a frame hidden behind stray sync bytes is still found.

use byteorder::{BigEndian, ByteOrder};
use tracing::{debug, trace};

use crate::{
    constants::{pos, HEADER_SIZE, PACKET_MAX_SIZE, PREAMBLE_SIZE},
    envelope::Envelope,
};

const SYNC_BYTE: u8 = 0xDA;
const PREFIX_SIZE: usize = PREAMBLE_SIZE + HEADER_SIZE;

/// Offset of the checksum byte within the preamble + header prefix
const CHECKSUM_OFFSET: usize = PREAMBLE_SIZE + pos::CHECKSUM;

/// Framer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Hunting sync or collecting length and header bytes
    AwaitingHeader,

    /// Collecting payload bytes
    AwaitingPayload,
}

/// Counters kept by a [`Framer`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FramerStats {
    /// Frames delivered
    pub frames: u64,

    /// Bytes discarded while hunting for sync
    pub dropped_bytes: u64,

    /// Frames whose length field was below the header size
    pub undersized: u64,

    /// Frames whose payload would not fit the envelope
    pub oversized: u64,

    /// Frames discarded because the checksum did not match
    pub checksum_errors: u64,
}

/// Byte-at-a-time frame decoder for one serial link
///
/// # Examples
///
/// ```
/// use cmnd_core::{Envelope, Framer};
///
/// let mut env = Envelope::new();
/// env.cookie = 0x68;
/// env.message_id = 0x05;
/// let frame = env.encode();
///
/// let mut framer = Framer::new();
/// let (last, head) = frame.split_last().unwrap();
/// for byte in head {
///     assert!(!framer.push_byte(*byte));
/// }
/// assert!(framer.push_byte(*last));
/// assert_eq!(framer.envelope().message_id, 0x05);
/// ```
#[derive(Debug, Clone)]
pub struct Framer {
    phase: Phase,

    /// Bytes of the preamble and header collected so far
    count: usize,
    prefix: [u8; PREFIX_SIZE],

    /// Declared payload length of the frame in progress
    payload_len: usize,

    /// Running checksum over the bytes seen so far
    sum: u8,

    scratch: Envelope,
    output: Envelope,

    max_payload: usize,
    stats: FramerStats,
}

impl Framer {
    /// Create a framer accepting payloads up to the envelope capacity
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingHeader,
            count: 0,
            prefix: [0; PREFIX_SIZE],
            payload_len: 0,
            sum: 0,
            scratch: Envelope::new(),
            output: Envelope::new(),
            max_payload: PACKET_MAX_SIZE,
            stats: FramerStats::default(),
        }
    }

    /// Lower the largest accepted payload (clamped to the envelope capacity)
    pub fn with_max_payload(mut self, max_payload: usize) -> Self {
        self.max_payload = max_payload.min(PACKET_MAX_SIZE);
        self
    }

    pub fn max_payload(&self) -> usize {
        self.max_payload
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> FramerStats {
        self.stats
    }

    /// Last complete envelope
    ///
    /// Valid after [`push_byte`](Self::push_byte) returned `true` and until
    /// the next frame completes.
    pub fn envelope(&self) -> &Envelope {
        &self.output
    }

    /// Drop any partial frame and wait for the next sync word
    pub fn reset(&mut self) {
        self.phase = Phase::AwaitingHeader;
        self.count = 0;
        self.payload_len = 0;
        self.sum = 0;
        self.scratch.data_length = 0;
    }

    /// Feed one received byte
    ///
    /// Returns `true` when this byte completed a valid frame, which is then
    /// available through [`envelope`](Self::envelope).
    pub fn push_byte(&mut self, byte: u8) -> bool {
        match self.phase {
            Phase::AwaitingHeader => self.push_header_byte(byte),
            Phase::AwaitingPayload => self.push_payload_byte(byte),
        }
    }

    /// Feed a chunk of bytes, calling `on_frame` for every complete frame
    ///
    /// Returns the number of frames delivered.
    pub fn push_slice<F>(&mut self, bytes: &[u8], mut on_frame: F) -> usize
    where
        F: FnMut(&Envelope),
    {
        let mut frames = 0;
        for byte in bytes {
            if self.push_byte(*byte) {
                on_frame(&self.output);
                frames += 1;
            }
        }
        frames
    }

    fn push_header_byte(&mut self, byte: u8) -> bool {
        if self.count < 2 && byte != SYNC_BYTE {
            self.stats.dropped_bytes += self.count as u64 + 1;
            self.count = 0;
            return false;
        }

        // A third sync byte: keep the last two as the preamble
        if self.count == 2 && byte == SYNC_BYTE {
            self.stats.dropped_bytes += 1;
            return false;
        }

        self.prefix[self.count] = byte;
        self.count += 1;

        if self.count > 2 && self.count != CHECKSUM_OFFSET + 1 {
            self.sum = self.sum.wrapping_add(byte);
        }

        if self.count == PREAMBLE_SIZE && !self.accept_length() {
            self.rescan_preamble();
            return false;
        }

        if self.count == PREFIX_SIZE {
            if self.payload_len == 0 {
                return self.complete();
            }
            self.phase = Phase::AwaitingPayload;
        }

        false
    }

    fn accept_length(&mut self) -> bool {
        let length = BigEndian::read_u16(&self.prefix[2..PREAMBLE_SIZE]) as usize;

        if length < HEADER_SIZE {
            self.stats.undersized += 1;
            debug!(length, "Dropped undersized frame");
            return false;
        }

        let payload_len = length - HEADER_SIZE;
        if payload_len > self.max_payload {
            self.stats.oversized += 1;
            debug!(payload_len, max = self.max_payload, "Dropped oversized frame");
            return false;
        }

        self.payload_len = payload_len;
        true
    }

    /// Drop the first byte of a rejected preamble and search the rest
    /// for a new sync
    fn rescan_preamble(&mut self) {
        let tail = [self.prefix[1], self.prefix[2], self.prefix[3]];
        self.reset();
        self.stats.dropped_bytes += 1;
        for byte in tail {
            // Three bytes never complete a preamble
            self.push_header_byte(byte);
        }
    }

    fn push_payload_byte(&mut self, byte: u8) -> bool {
        let idx = self.scratch.data_length;
        self.scratch.data[idx] = byte;
        self.scratch.data_length = idx + 1;
        self.sum = self.sum.wrapping_add(byte);

        if self.scratch.data_length == self.payload_len {
            return self.complete();
        }
        false
    }

    fn complete(&mut self) -> bool {
        let header = &self.prefix[PREAMBLE_SIZE..];
        let received = header[pos::CHECKSUM];

        if self.sum != received {
            self.stats.checksum_errors += 1;
            debug!(
                expected = self.sum,
                received, "Dropped frame with bad checksum"
            );
            self.reset();
            return false;
        }

        self.scratch.cookie = header[pos::COOKIE];
        self.scratch.unit_id = header[pos::UNIT_ID];
        self.scratch.service_id = BigEndian::read_u16(&header[pos::SERVICE_ID..pos::MESSAGE_ID]);
        self.scratch.message_id = header[pos::MESSAGE_ID];
        self.scratch.checksum = received;
        self.scratch.data_length = self.payload_len;

        std::mem::swap(&mut self.scratch, &mut self.output);
        self.stats.frames += 1;
        trace!(envelope = %self.output, "Frame complete");

        self.reset();
        true
    }
}

impl Default for Framer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_COOKIE;
    use crate::packet::parse_frame;
    use crate::service::{general, Service};
    use pretty_assertions::assert_eq;

    fn frame(service: Service, message_id: u8, payload: &[u8]) -> Vec<u8> {
        let mut env = Envelope::new();
        env.cookie = DEFAULT_COOKIE;
        env.service_id = service.into();
        env.message_id = message_id;
        env.set_payload(payload).unwrap();
        env.encode().to_vec()
    }

    fn feed(framer: &mut Framer, bytes: &[u8]) -> Vec<Envelope> {
        let mut out = Vec::new();
        framer.push_slice(bytes, |env| out.push(env.clone()));
        out
    }

    #[test]
    fn test_hello_byte_by_byte() {
        let bytes = frame(Service::General, general::HELLO_IND, &[0x1E, 0x00, 0x01, 0x07]);
        let mut framer = Framer::new();

        for (i, byte) in bytes.iter().enumerate() {
            let done = framer.push_byte(*byte);
            assert_eq!(done, i == bytes.len() - 1, "byte {i}");
        }

        let env = framer.envelope();
        assert!(env.is(Service::General, general::HELLO_IND));
        assert_eq!(env.data(), &[0x1E, 0x00, 0x01, 0x07]);
        assert_eq!(framer.phase(), Phase::AwaitingHeader);
    }

    #[test]
    fn test_matches_one_shot_parser() {
        let bytes = frame(Service::Fun, 0x02, &[0x0A, 0x00, 0x02, 0xBE, 0xEF]);
        let mut framer = Framer::new();
        let frames = feed(&mut framer, &bytes);

        assert_eq!(frames, vec![parse_frame(&bytes).unwrap()]);
    }

    #[test]
    fn test_skips_garbage_before_sync() {
        let mut bytes = vec![0x00, 0xDA, 0x11, 0xFF];
        bytes.extend(frame(Service::System, 0x04, &[]));

        let mut framer = Framer::new();
        assert_eq!(feed(&mut framer, &bytes).len(), 1);
        assert_eq!(framer.stats().dropped_bytes, 4);
    }

    #[test]
    fn test_stray_sync_before_frame() {
        let mut bytes = vec![0xDA];
        bytes.extend(frame(Service::General, general::HELLO_IND, &[]));

        let mut framer = Framer::new();
        let frames = feed(&mut framer, &bytes);

        assert_eq!(frames.len(), 1);
        assert!(frames[0].is(Service::General, general::HELLO_IND));
        assert_eq!(framer.stats().dropped_bytes, 1);
        assert_eq!(framer.stats().oversized, 0);
    }

    #[test]
    fn test_rejected_length_rescans_for_sync() {
        // DA DA 01 DA declares 474 bytes; the frame starts at the second DA pair
        let mut bytes = vec![0xDA, 0xDA, 0x01];
        bytes.extend(frame(Service::General, general::HELLO_IND, &[]));

        let mut framer = Framer::new();
        let frames = feed(&mut framer, &bytes);

        assert_eq!(frames.len(), 1);
        assert_eq!(framer.stats().oversized, 1);
        assert_eq!(framer.stats().dropped_bytes, 3);
    }

    #[test]
    fn test_rejects_oversized_length_before_payload() {
        // Declares 6 + 300 bytes
        let mut bytes = vec![0xDA, 0xDA, 0x01, 0x32];
        bytes.extend(frame(Service::General, general::HELLO_IND, &[]));

        let mut framer = Framer::new();
        let frames = feed(&mut framer, &bytes);

        assert_eq!(frames.len(), 1);
        assert_eq!(framer.stats().oversized, 1);
    }

    #[test]
    fn test_rejects_undersized_length() {
        let mut bytes = vec![0xDA, 0xDA, 0x00, 0x05];
        bytes.extend(frame(Service::General, general::HELLO_IND, &[]));

        let mut framer = Framer::new();
        assert_eq!(feed(&mut framer, &bytes).len(), 1);
        assert_eq!(framer.stats().undersized, 1);
    }

    #[test]
    fn test_bad_checksum_then_recovers() {
        let mut corrupted = frame(Service::System, 0x02, &[0x15, 0x00, 0x01, 0x33]);
        let last = corrupted.len() - 1;
        corrupted[last] ^= 0x40;

        let good = frame(Service::System, 0x04, &[]);
        let mut framer = Framer::new();

        assert!(feed(&mut framer, &corrupted).is_empty());
        let frames = feed(&mut framer, &good);

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].message_id, 0x04);
        assert_eq!(framer.stats().checksum_errors, 1);
        assert_eq!(framer.stats().frames, 1);
    }

    #[test]
    fn test_back_to_back_frames() {
        let mut bytes = frame(Service::General, general::HELLO_IND, &[]);
        bytes.extend(frame(Service::General, general::GET_STATUS_RES, &[0x00, 0x00, 0x01, 0x00]));

        let mut framer = Framer::new();
        let frames = feed(&mut framer, &bytes);

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].message_id, general::GET_STATUS_RES);
        assert_eq!(frames[1].data_length(), 4);
    }

    #[test]
    fn test_output_survives_partial_next_frame() {
        let first = frame(Service::General, general::HELLO_IND, &[0x07, 0x00, 0x01, 0x63]);
        let second = frame(Service::General, general::GET_STATUS_RES, &[0x00, 0x00, 0x01, 0x00]);

        let mut framer = Framer::new();
        feed(&mut framer, &first);
        feed(&mut framer, &second[..second.len() - 1]);

        assert_eq!(framer.envelope().message_id, general::HELLO_IND);
        assert_eq!(framer.envelope().data(), &[0x07, 0x00, 0x01, 0x63]);
    }

    #[test]
    fn test_max_payload_limit() {
        let bytes = frame(Service::Fun, 0x02, &[0u8; 20]);
        let mut framer = Framer::new().with_max_payload(16);

        assert!(feed(&mut framer, &bytes).is_empty());
        assert_eq!(framer.stats().oversized, 1);
        assert_eq!(Framer::new().with_max_payload(1000).max_payload(), PACKET_MAX_SIZE);
    }

    #[test]
    fn test_reset_drops_partial_frame() {
        let bytes = frame(Service::General, general::HELLO_IND, &[]);
        let mut framer = Framer::new();

        feed(&mut framer, &bytes[..7]);
        framer.reset();

        assert_eq!(feed(&mut framer, &bytes).len(), 1);
    }
}
