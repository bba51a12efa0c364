//! FUN service: generic data transport between units

use crate::{
    constants::{fun_msg_type, units, FUN_MAX_DATA_SIZE},
    envelope::Envelope,
    error::{Error, Result},
    ie::{FixedBytes, FunIe, InformationElement},
    service::{fun as msg, Service},
};

/// Send a FUN message
pub fn send_req(envelope: &mut Envelope, fun: &FunIe) -> Result<()> {
    envelope.compose(Service::Fun, msg::SEND_REQ, 0, |list| fun.add_to(list))
}

/// Send raw data from the raw-data unit of `src_device_id` to the base
///
/// # Errors
///
/// Returns `Error::PayloadTooLarge` if `data` exceeds the FUN data limit.
/// The envelope is not touched in that case.
pub fn send_raw(envelope: &mut Envelope, src_device_id: u16, data: &[u8]) -> Result<()> {
    let data = FixedBytes::from_slice(data).ok_or(Error::PayloadTooLarge {
        size: data.len(),
        max: FUN_MAX_DATA_SIZE,
    })?;

    let fun = FunIe {
        src_device_id,
        src_unit_id: units::RAW_DATA,
        dst_device_id: 0,
        dst_unit_id: units::RAW_DATA_DESTINATION,
        message_type: fun_msg_type::COMMAND,
        address_type: 0,
        interface_type: 1,
        interface_id: units::RAW_DATA_INTERFACE_ID,
        interface_member: 1,
        data,
    };
    send_req(envelope, &fun)
}
