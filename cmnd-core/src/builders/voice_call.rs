//! ULE voice call signaling

use cmnd_types::ResponseCode;

use crate::{
    builders::header_only,
    envelope::Envelope,
    error::Result,
    ie::{CallSettingIe, InformationElement, ResponseIe},
    service::{voice_call as msg, Service},
};

/// Place a call
pub fn start_call_req(envelope: &mut Envelope, unit_id: u8, settings: &CallSettingIe) -> Result<()> {
    envelope.compose(Service::UleVoiceCall, msg::START_REQ, unit_id, |list| {
        settings.add_to(list)
    })
}

/// Answer an incoming call
pub fn start_call_res(
    envelope: &mut Envelope,
    unit_id: u8,
    response: ResponseCode,
    settings: &CallSettingIe,
) -> Result<()> {
    envelope.compose(Service::UleVoiceCall, msg::START_RES, unit_id, |list| {
        ResponseIe::new(response).add_to(list)?;
        settings.add_to(list)
    })
}

/// Hang up
pub fn end_call_req(envelope: &mut Envelope, unit_id: u8) {
    header_only(envelope, Service::UleVoiceCall, msg::END_REQ, unit_id);
}

/// Acknowledge a hang-up from the peer
pub fn end_call_res(envelope: &mut Envelope, unit_id: u8, response: ResponseCode) -> Result<()> {
    envelope.compose(Service::UleVoiceCall, msg::END_RES, unit_id, |list| {
        ResponseIe::new(response).add_to(list)
    })
}
