//! # cmnd-core
//!
//! Codec for the CMND API spoken between a host controller and a DECT-ULE
//! radio module over a serial link.
//!
//! This crate provides the protocol primitives:
//! - Checksum and byte-order helpers
//! - The Tag-Length-Value IE list and typed Information Elements
//! - The envelope model and frame serialization
//! - The one-shot parser and the incremental byte-at-a-time framer
//! - Builders for outgoing messages
//! - Dispatch of received messages and shared link state
//!
//! Nothing in the encode/decode path allocates.

pub mod builders;
pub mod checksum;
pub mod constants;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod framer;
pub mod ie;
pub mod ie_list;
pub mod packet;
pub mod service;
pub mod session;

pub use dispatch::Dispatcher;
pub use envelope::Envelope;
pub use error::{Error, Result};
pub use framer::{Framer, FramerStats, Phase};
pub use ie::{Ie, InformationElement};
pub use ie_list::{IeIter, IeList, RawIe};
pub use packet::{parse_frame, parse_packet, parse_packet_into, Packet};
pub use service::Service;
pub use session::{LinkState, Session};
