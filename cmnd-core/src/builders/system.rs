//! System service

use crate::{
    builders::header_only,
    envelope::Envelope,
    error::Result,
    ie::{BatteryMeasureInfoIe, InformationElement},
    service::{system as msg, Service},
};

/// Measure the battery against the given voltage window
pub fn battery_measure_get_req(envelope: &mut Envelope, info: &BatteryMeasureInfoIe) -> Result<()> {
    envelope.compose(Service::System, msg::BATTERY_MEASURE_GET_REQ, 0, |list| {
        info.add_to(list)
    })
}

pub fn rssi_get_req(envelope: &mut Envelope) {
    header_only(envelope, Service::System, msg::RSSI_GET_REQ, 0);
}

pub fn battery_ind_enable_req(envelope: &mut Envelope) {
    header_only(envelope, Service::System, msg::BATTERY_IND_ENABLE_REQ, 0);
}

pub fn battery_ind_disable_req(envelope: &mut Envelope) {
    header_only(envelope, Service::System, msg::BATTERY_IND_DISABLE_REQ, 0);
}

pub fn reset_req(envelope: &mut Envelope) {
    header_only(envelope, Service::System, msg::RESET_REQ, 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packet::Packet;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_battery_measure_roundtrip() {
        let info = BatteryMeasureInfoIe {
            max_mv: 3300,
            min_mv: 2100,
        };

        let mut env = Envelope::new();
        battery_measure_get_req(&mut env, &info).unwrap();

        let parsed = Packet::from_envelope(&env).parse().unwrap();
        assert_eq!(parsed.message_id, msg::BATTERY_MEASURE_GET_REQ);
        assert_eq!(parsed.ie::<BatteryMeasureInfoIe>(), Some(info));
    }

    #[test]
    fn test_payloadless_requests() {
        let mut env = Envelope::new();

        for (build, message_id) in [
            (rssi_get_req as fn(&mut Envelope), msg::RSSI_GET_REQ),
            (battery_ind_enable_req, msg::BATTERY_IND_ENABLE_REQ),
            (battery_ind_disable_req, msg::BATTERY_IND_DISABLE_REQ),
            (reset_req, msg::RESET_REQ),
        ] {
            build(&mut env);
            assert!(env.is(Service::System, message_id));
            assert_eq!(env.data_length(), 0);
        }
    }
}
