//! Tag-Length-Value list over a caller-owned buffer
//!
//! # Entry Layout
//!
//! ```text
//! ┌──────────┬──────────────┬──────────────┐
//! │   Tag    │    Length    │    Value     │
//! │  1 byte  │ 2 bytes (BE) │ Length bytes │
//! └──────────┴──────────────┴──────────────┘
//! ```
//!
//! Entries are packed back to back in insertion order. Lookup is by tag.

use byteorder::{BigEndian, ByteOrder};

use crate::{
    constants::IE_HEADER_SIZE,
    error::{Error, Result},
};

/// Append-only IE list view
///
/// Borrows the destination buffer (usually an envelope's payload) and never
/// writes past its end. A failed append leaves the buffer untouched.
#[derive(Debug)]
pub struct IeList<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> IeList<'a> {
    /// Create an empty list whose capacity is the length of `buf`
    pub fn create_empty(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Bytes consumed so far
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Encoded entries
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Append one entry with the given value bytes
    ///
    /// # Errors
    ///
    /// Returns `Error::CapacityExceeded` if the entry does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmnd_core::IeList;
    ///
    /// let mut buf = [0u8; 8];
    /// let mut list = IeList::create_empty(&mut buf);
    ///
    /// list.add_simple(0x1E, &[0x2A]).unwrap();
    /// assert_eq!(list.as_bytes(), &[0x1E, 0x00, 0x01, 0x2A]);
    /// assert!(list.add_simple(0x1E, &[1, 2]).is_err());
    /// ```
    pub fn add_simple(&mut self, tag: u8, value: &[u8]) -> Result<()> {
        self.add_with(tag, value.len(), |out| out.copy_from_slice(value))
    }

    /// Append one entry, letting `write` fill its value in place
    ///
    /// `write` receives exactly `len` bytes. It is only called once the
    /// capacity check has passed.
    pub fn add_with<F>(&mut self, tag: u8, len: usize, write: F) -> Result<()>
    where
        F: FnOnce(&mut [u8]),
    {
        let needed = IE_HEADER_SIZE + len;
        if len > u16::MAX as usize || needed > self.remaining() {
            return Err(Error::CapacityExceeded {
                needed,
                available: self.remaining(),
            });
        }

        let entry = &mut self.buf[self.len..self.len + needed];
        entry[0] = tag;
        BigEndian::write_u16(&mut entry[1..IE_HEADER_SIZE], len as u16);
        write(&mut entry[IE_HEADER_SIZE..]);

        self.len += needed;
        Ok(())
    }
}

/// One undecoded entry borrowed from a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawIe<'a> {
    pub tag: u8,
    pub value: &'a [u8],
}

/// Iterator over the entries of an encoded IE list
///
/// Stops at the first entry whose header or declared value runs past the
/// end of the input.
#[derive(Debug, Clone)]
pub struct IeIter<'a> {
    rest: &'a [u8],
}

impl<'a> IeIter<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { rest: payload }
    }
}

impl<'a> Iterator for IeIter<'a> {
    type Item = RawIe<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.len() < IE_HEADER_SIZE {
            self.rest = &[];
            return None;
        }

        let tag = self.rest[0];
        let len = BigEndian::read_u16(&self.rest[1..IE_HEADER_SIZE]) as usize;
        let end = IE_HEADER_SIZE + len;

        if end > self.rest.len() {
            self.rest = &[];
            return None;
        }

        let value = &self.rest[IE_HEADER_SIZE..end];
        self.rest = &self.rest[end..];
        Some(RawIe { tag, value })
    }
}

/// First entry with a matching tag
pub fn find(payload: &[u8], tag: u8) -> Option<&[u8]> {
    IeIter::new(payload)
        .find(|ie| ie.tag == tag)
        .map(|ie| ie.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_list() {
        let mut buf = [0u8; 16];
        let list = IeList::create_empty(&mut buf);
        assert_eq!(list.size(), 0);
        assert_eq!(list.capacity(), 16);
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_in_order() {
        let mut buf = [0u8; 16];
        let mut list = IeList::create_empty(&mut buf);

        list.add_simple(0x07, &[80]).unwrap();
        list.add_simple(0x06, &[]).unwrap();

        assert_eq!(list.size(), 7);
        assert_eq!(list.as_bytes(), &[0x07, 0x00, 0x01, 80, 0x06, 0x00, 0x00]);
    }

    #[test]
    fn test_exact_fill_succeeds() {
        let mut buf = [0u8; 10];
        let mut list = IeList::create_empty(&mut buf);

        list.add_simple(0x0B, &[0xAA; 7]).unwrap();
        assert_eq!(list.remaining(), 0);
    }

    #[test]
    fn test_one_byte_over_fails_without_mutation() {
        let mut buf = [0u8; 10];
        {
            let mut list = IeList::create_empty(&mut buf);
            list.add_simple(0x1E, &[1]).unwrap();

            let err = list.add_simple(0x0B, &[0xAA; 4]).unwrap_err();
            assert!(matches!(err, Error::CapacityExceeded { needed: 7, available: 6 }));
            assert_eq!(list.size(), 4);
        }
        assert_eq!(&buf[4..], &[0u8; 6]);
    }

    #[test]
    fn test_add_with_writes_value() {
        let mut buf = [0u8; 8];
        let mut list = IeList::create_empty(&mut buf);

        list.add_with(0x15, 4, |out| {
            BigEndian::write_u16(&mut out[0..2], 3300);
            BigEndian::write_u16(&mut out[2..4], 2100);
        })
        .unwrap();

        assert_eq!(list.as_bytes(), &[0x15, 0x00, 0x04, 0x0C, 0xE4, 0x08, 0x34]);
    }

    #[test]
    fn test_iter_entries() {
        let payload = [0x07, 0x00, 0x01, 55, 0x00, 0x00, 0x01, 0x00];
        let ies: Vec<_> = IeIter::new(&payload).collect();

        assert_eq!(ies.len(), 2);
        assert_eq!(ies[0], RawIe { tag: 0x07, value: &[55] });
        assert_eq!(ies[1], RawIe { tag: 0x00, value: &[0] });
    }

    #[test]
    fn test_iter_stops_on_truncated_entry() {
        // Second entry declares 9 bytes but only 2 follow
        let payload = [0x07, 0x00, 0x01, 55, 0x0B, 0x00, 0x09, 1, 2];
        let tags: Vec<_> = IeIter::new(&payload).map(|ie| ie.tag).collect();
        assert_eq!(tags, vec![0x07]);
    }

    #[test]
    fn test_iter_stops_on_partial_header() {
        let payload = [0x07, 0x00];
        assert_eq!(IeIter::new(&payload).count(), 0);
    }

    #[test]
    fn test_find_first_match() {
        let payload = [0x1E, 0x00, 0x01, 1, 0x1E, 0x00, 0x01, 2];
        assert_eq!(find(&payload, 0x1E), Some(&[1u8][..]));
        assert_eq!(find(&payload, 0x00), None);
    }
}
