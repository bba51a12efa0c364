//! Tamper alert service

use cmnd_types::{ResponseCode, TamperStatus};

use crate::{
    envelope::Envelope,
    error::Result,
    ie::{InformationElement, ResponseIe, TamperAlertIe},
    service::{tamper as msg, Service},
};

/// Report the tamper switch state of a unit
pub fn notify_status_req(envelope: &mut Envelope, unit_id: u8, status: TamperStatus) -> Result<()> {
    envelope.compose(Service::TamperAlert, msg::NOTIFY_STATUS_REQ, unit_id, |list| {
        TamperAlertIe { status }.add_to(list)
    })
}

pub fn notify_status_res(envelope: &mut Envelope, unit_id: u8, response: ResponseCode) -> Result<()> {
    envelope.compose(Service::TamperAlert, msg::NOTIFY_STATUS_RES, unit_id, |list| {
        ResponseIe::new(response).add_to(list)
    })
}
