//! Device management service

use cmnd_types::Rfpi;

use crate::{
    builders::header_only,
    envelope::Envelope,
    error::Result,
    ie::{BaseWantedIe, InformationElement},
    service::{device_management as msg, Service},
};

/// Start registration
///
/// With `base` set, only that base is accepted; with `None` the module
/// registers to any base in registration mode and the payload is empty.
pub fn register_device_req(envelope: &mut Envelope, base: Option<&Rfpi>) -> Result<()> {
    match base {
        Some(rfpi) => envelope.compose(
            Service::DeviceManagement,
            msg::REGISTER_DEVICE_REQ,
            0,
            |list| BaseWantedIe { rfpi: *rfpi }.add_to(list),
        ),
        None => {
            header_only(envelope, Service::DeviceManagement, msg::REGISTER_DEVICE_REQ, 0);
            Ok(())
        }
    }
}

/// Leave the current base
pub fn deregister_device_req(envelope: &mut Envelope) {
    header_only(envelope, Service::DeviceManagement, msg::DEREGISTER_DEVICE_REQ, 0);
}
