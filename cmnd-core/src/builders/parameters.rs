//! Parameter service: module configuration storage

use crate::{
    constants::PARAMETER_MAX_SIZE,
    envelope::Envelope,
    error::{Error, Result},
    ie::{FixedBytes, InformationElement, ParameterDirectIe, ParameterIe},
    service::{parameters as msg, Service},
};

fn value(data: &[u8]) -> Result<FixedBytes<PARAMETER_MAX_SIZE>> {
    FixedBytes::from_slice(data).ok_or(Error::PayloadTooLarge {
        size: data.len(),
        max: PARAMETER_MAX_SIZE,
    })
}

/// Read a parameter by id
pub fn get_req(envelope: &mut Envelope, param_type: u8, id: u8) -> Result<()> {
    let ie = ParameterIe {
        param_type,
        id,
        data: FixedBytes::new(),
    };
    envelope.compose(Service::Parameters, msg::GET_REQ, 0, |list| ie.add_to(list))
}

/// Write a parameter by id
pub fn set_req(envelope: &mut Envelope, param_type: u8, id: u8, data: &[u8]) -> Result<()> {
    let ie = ParameterIe {
        param_type,
        id,
        data: value(data)?,
    };
    envelope.compose(Service::Parameters, msg::SET_REQ, 0, |list| ie.add_to(list))
}

/// Read `length` bytes at `offset`
pub fn get_direct_req(envelope: &mut Envelope, param_type: u8, offset: u32, length: u16) -> Result<()> {
    let ie = ParameterDirectIe {
        param_type,
        offset,
        length,
        data: FixedBytes::new(),
    };
    envelope.compose(Service::Parameters, msg::GET_DIRECT_REQ, 0, |list| {
        ie.add_to(list)
    })
}

/// Write `data` at `offset`
pub fn set_direct_req(envelope: &mut Envelope, param_type: u8, offset: u32, data: &[u8]) -> Result<()> {
    let data = value(data)?;
    let ie = ParameterDirectIe {
        param_type,
        offset,
        length: data.len() as u16,
        data,
    };
    envelope.compose(Service::Parameters, msg::SET_DIRECT_REQ, 0, |list| {
        ie.add_to(list)
    })
}
