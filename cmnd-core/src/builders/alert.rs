//! Alert service

use cmnd_types::ResponseCode;

use crate::{
    envelope::Envelope,
    error::Result,
    ie::{AlertIe, InformationElement, ResponseIe},
    service::{alert as msg, Service},
};

/// Report the alert state of a unit
pub fn notify_status_req(envelope: &mut Envelope, unit_id: u8, alert: &AlertIe) -> Result<()> {
    envelope.compose(Service::Alert, msg::NOTIFY_STATUS_REQ, unit_id, |list| {
        alert.add_to(list)
    })
}

/// Answer an alert notification
pub fn notify_status_res(envelope: &mut Envelope, unit_id: u8, response: ResponseCode) -> Result<()> {
    envelope.compose(Service::Alert, msg::NOTIFY_STATUS_RES, unit_id, |list| {
        ResponseIe::new(response).add_to(list)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::Packet;
    use cmnd_types::{AlertState, UnitType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_smoke_alert_roundtrip() {
        let alert = AlertIe {
            unit_type: UnitType::SmokeDetector,
            alert_state: AlertState::Alerting,
        };

        let mut env = Envelope::new();
        notify_status_req(&mut env, 2, &alert).unwrap();

        assert_eq!(env.service_id, 0x0100);
        assert_eq!(env.message_id, msg::NOTIFY_STATUS_REQ);
        assert!(env.data_length() > 0);

        let parsed = Packet::from_envelope(&env).parse().unwrap();
        assert_eq!(parsed.unit_id, 2);
        assert_eq!(parsed.ie::<AlertIe>(), Some(alert));
    }

    #[test]
    fn test_notify_status_res() {
        let mut env = Envelope::new();
        notify_status_res(&mut env, 4, ResponseCode::FAIL).unwrap();

        assert_eq!(env.unit_id, 4);
        assert_eq!(env.ie::<ResponseIe>().map(|ie| ie.result), Some(ResponseCode::FAIL));
    }
}
