//! Outgoing message builders
//!
//! One function per (service, message) pair. Each sets the service,
//! message and unit ids, encodes its IEs into the envelope payload and
//! sets the payload length. A builder that returns an error leaves the
//! envelope with an empty payload; it must not be transmitted.
//!
//! Builders never touch the cookie. Messages without a payload cannot
//! fail and return nothing.

pub mod alert;
pub mod device_management;
pub mod fun;
pub mod general;
pub mod parameters;
pub mod system;
pub mod tamper;
pub mod voice_call;

use crate::{
    envelope::Envelope,
    error::Result,
    ie::ResponseRequiredIe,
    service::Service,
};

/// Ask the peer to answer an already built message
pub fn add_response_required(envelope: &mut Envelope) -> Result<()> {
    envelope.append_ie(&ResponseRequiredIe)
}

/// Set the header of a message that carries no IEs
pub(crate) fn header_only(envelope: &mut Envelope, service: Service, message_id: u8, unit_id: u8) {
    envelope.service_id = service.into();
    envelope.message_id = message_id;
    envelope.unit_id = unit_id;
    envelope.checksum = 0;
    envelope.data_length = 0;
}
