//! Codec properties checked over generated inputs

use cmnd_core::{
    builders,
    constants::{FRAME_MAX_SIZE, HEADER_SIZE, PACKET_MAX_SIZE, PREAMBLE_SIZE},
    ie::{
        AlertIe, BaseWantedIe, BatteryMeasureInfoIe, CallSettingIe, FixedBytes, FunIe,
        TamperAlertIe,
    },
    parse_frame, parse_packet, parse_packet_into, Envelope, Error, Framer, IeList, Packet,
};
use cmnd_types::{AlertState, ResponseCode, Rfpi, TamperStatus, UnitType};
use proptest::prelude::*;

fn arb_unit_type() -> impl Strategy<Value = UnitType> {
    prop::sample::select(vec![
        UnitType::SimpleOnOffSwitchable,
        UnitType::SimpleOnOffSwitch,
        UnitType::AcOutlet,
        UnitType::DoorOpenCloseDetector,
        UnitType::MotionDetector,
        UnitType::SmokeDetector,
        UnitType::FloodDetector,
        UnitType::Siren,
    ])
}

fn arb_alert_state() -> impl Strategy<Value = AlertState> {
    prop::sample::select(vec![AlertState::NotAlerting, AlertState::Alerting])
}

fn arb_string() -> impl Strategy<Value = Option<FixedBytes<32>>> {
    prop::option::of(prop::collection::vec(any::<u8>(), 0..=32))
        .prop_map(|bytes| bytes.and_then(|b| FixedBytes::from_slice(&b)))
}

fn arb_call_setting() -> impl Strategy<Value = CallSettingIe> {
    (
        prop::option::of(any::<u8>()),
        arb_string(),
        arb_string(),
        arb_string(),
        arb_string(),
    )
        .prop_map(|(codec, digits, kind, name, id)| CallSettingIe {
            preferred_codec: codec,
            digits,
            other_party_type: kind,
            other_party_name: name,
            other_party_id: id,
        })
}

fn arb_envelope() -> impl Strategy<Value = Envelope> {
    (
        any::<u8>(),
        any::<u8>(),
        any::<u16>(),
        any::<u8>(),
        prop::collection::vec(any::<u8>(), 0..=PACKET_MAX_SIZE),
    )
        .prop_map(|(cookie, unit_id, service_id, message_id, payload)| {
            let mut env = Envelope::new();
            env.cookie = cookie;
            env.unit_id = unit_id;
            env.service_id = service_id;
            env.message_id = message_id;
            env.set_payload(&payload).unwrap();
            env.seal();
            env
        })
}

fn roundtrip(env: &Envelope) -> Envelope {
    parse_frame(Packet::from_envelope(env).as_bytes()).unwrap()
}

fn frame_through_framer(bytes: &[u8]) -> Vec<Envelope> {
    let mut framer = Framer::new();
    let mut out = Vec::new();
    framer.push_slice(bytes, |env| out.push(env.clone()));
    out
}

proptest! {
    #[test]
    fn prop_alert_roundtrip(unit_id in any::<u8>(), unit_type in arb_unit_type(), state in arb_alert_state()) {
        let alert = AlertIe { unit_type, alert_state: state };
        let mut env = Envelope::new();
        builders::alert::notify_status_req(&mut env, unit_id, &alert).unwrap();

        let parsed = roundtrip(&env);
        prop_assert_eq!(parsed.unit_id, unit_id);
        prop_assert_eq!(parsed.ie::<AlertIe>(), Some(alert));
    }

    #[test]
    fn prop_tamper_roundtrip(unit_id in any::<u8>(), on in any::<bool>()) {
        let status = if on { TamperStatus::On } else { TamperStatus::Off };
        let mut env = Envelope::new();
        builders::tamper::notify_status_req(&mut env, unit_id, status).unwrap();

        let parsed = roundtrip(&env);
        prop_assert_eq!(parsed.unit_id, unit_id);
        prop_assert_eq!(parsed.ie::<TamperAlertIe>(), Some(TamperAlertIe { status }));
    }

    #[test]
    fn prop_register_roundtrip(rfpi in prop::option::of(any::<[u8; 5]>())) {
        let rfpi = rfpi.map(Rfpi::from);
        let mut env = Envelope::new();
        builders::device_management::register_device_req(&mut env, rfpi.as_ref()).unwrap();

        let parsed = roundtrip(&env);
        prop_assert_eq!(parsed.ie::<BaseWantedIe>().map(|ie| ie.rfpi), rfpi);
    }

    #[test]
    fn prop_raw_data_roundtrip(device in any::<u16>(), data in prop::collection::vec(any::<u8>(), 0..=128)) {
        let mut env = Envelope::new();
        builders::fun::send_raw(&mut env, device, &data).unwrap();

        let fun = roundtrip(&env).ie::<FunIe>().unwrap();
        prop_assert_eq!(fun.src_device_id, device);
        prop_assert_eq!(fun.data.as_slice(), data.as_slice());
    }

    #[test]
    fn prop_raw_data_over_limit_rejected(data in prop::collection::vec(any::<u8>(), 129..400)) {
        let mut env = Envelope::new();
        let before = env.clone();

        prop_assert!(builders::fun::send_raw(&mut env, 1, &data).is_err());
        prop_assert_eq!(env, before);
    }

    #[test]
    fn prop_battery_measure_roundtrip(max_mv in any::<u16>(), min_mv in any::<u16>()) {
        let info = BatteryMeasureInfoIe { max_mv, min_mv };
        let mut env = Envelope::new();
        builders::system::battery_measure_get_req(&mut env, &info).unwrap();

        prop_assert_eq!(roundtrip(&env).ie::<BatteryMeasureInfoIe>(), Some(info));
    }

    #[test]
    fn prop_call_setting_roundtrip(unit_id in any::<u8>(), settings in arb_call_setting()) {
        let mut env = Envelope::new();
        builders::voice_call::start_call_req(&mut env, unit_id, &settings).unwrap();

        prop_assert_eq!(roundtrip(&env).ie::<CallSettingIe>(), Some(settings));
    }

    #[test]
    fn prop_build_is_deterministic(unit_id in any::<u8>(), settings in arb_call_setting()) {
        let mut a = Envelope::new();
        let mut b = Envelope::new();
        builders::voice_call::start_call_res(&mut a, unit_id, ResponseCode::OK, &settings).unwrap();
        builders::voice_call::start_call_res(&mut b, unit_id, ResponseCode::OK, &settings).unwrap();

        prop_assert_eq!(a.encode(), b.encode());
    }

    #[test]
    fn prop_framer_matches_parser(env in arb_envelope()) {
        let bytes = env.encode();

        let framed = frame_through_framer(&bytes);
        let parsed = parse_frame(&bytes).unwrap();

        prop_assert_eq!(framed.len(), 1);
        prop_assert_eq!(&framed[0], &parsed);
        prop_assert_eq!(&parsed, &env);
    }

    #[test]
    fn prop_framer_rejects_oversized_length(declared in (HEADER_SIZE + PACKET_MAX_SIZE + 1) as u16..=u16::MAX) {
        // A 0xDA high byte reads as a repeated sync byte
        prop_assume!(declared >> 8 != 0xDA);
        let mut bytes = vec![0xDA, 0xDA];
        bytes.extend_from_slice(&declared.to_be_bytes());

        let mut framer = Framer::new();
        framer.push_slice(&bytes, |_| {});
        prop_assert_eq!(framer.stats().oversized, 1);
        prop_assert_eq!(framer.phase(), cmnd_core::Phase::AwaitingHeader);
    }

    #[test]
    fn prop_framer_skips_repeated_sync(env in arb_envelope(), extra in 1..8usize) {
        let mut bytes = vec![0xDA; extra];
        bytes.extend_from_slice(&env.encode());

        let mut framer = Framer::new();
        let mut framed = Vec::new();
        framer.push_slice(&bytes, |e| framed.push(e.clone()));

        prop_assert_eq!(framed.len(), 1);
        prop_assert_eq!(&framed[0], &env);
        prop_assert_eq!(framer.stats().dropped_bytes, extra as u64);
    }

    #[test]
    fn prop_parser_rejects_oversized_body(len in (HEADER_SIZE + PACKET_MAX_SIZE + 1)..1024usize) {
        let body = vec![0u8; len];
        let mut out = Envelope::new();

        let is_too_large = matches!(
            parse_packet_into(&body, &mut out),
            Err(Error::PayloadTooLarge { .. })
        );
        prop_assert!(is_too_large);
        prop_assert_eq!(out, Envelope::new());
    }

    #[test]
    fn prop_random_stream_is_consistent(bytes in prop::collection::vec(any::<u8>(), 0..2048)) {
        for env in frame_through_framer(&bytes) {
            prop_assert!(env.data_length() <= PACKET_MAX_SIZE);
            prop_assert_eq!(parse_frame(&env.encode()).unwrap(), env);
        }
    }

    #[test]
    fn prop_checksum_bit_flip_rejected(env in arb_envelope(), bit in 0u8..8) {
        let mut bytes = env.encode().to_vec();
        bytes[PREAMBLE_SIZE + 5] ^= 1 << bit;

        prop_assert!(frame_through_framer(&bytes).is_empty());
        prop_assert!(parse_packet(&bytes[PREAMBLE_SIZE..]).is_err());
    }

    #[test]
    fn prop_payload_bit_flip_rejected(
        env in arb_envelope().prop_filter("needs payload", |e| e.data_length() > 0),
        idx in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut bytes = env.encode().to_vec();
        let at = PREAMBLE_SIZE + HEADER_SIZE + idx.index(env.data_length());
        bytes[at] ^= 1 << bit;

        prop_assert!(frame_through_framer(&bytes).is_empty());
        prop_assert!(parse_frame(&bytes).is_err());
    }

    #[test]
    fn prop_ie_list_capacity_boundary(capacity in 3usize..64, prefill in 0usize..32, extra in 0usize..8) {
        let mut buf = vec![0u8; capacity];
        let mut list = IeList::create_empty(&mut buf);

        let first = prefill.min(capacity - 3);
        list.add_simple(0x01, &vec![0xEE; first]).unwrap();

        let remaining = list.remaining();
        let snapshot = list.as_bytes().to_vec();

        // Exactly filling the rest succeeds, one more byte fails
        let fits = remaining >= 3;
        let value_len = remaining.saturating_sub(3) + extra;
        let result = list.add_simple(0x02, &vec![0x77; value_len]);

        if fits && extra == 0 {
            prop_assert!(result.is_ok());
            prop_assert_eq!(list.remaining(), 0);
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(list.as_bytes(), snapshot.as_slice());
            drop(list);
            prop_assert!(buf[snapshot.len()..].iter().all(|b| *b == 0));
        }
    }
}

#[test]
fn largest_frame_fits_frame_buffer() {
    let mut env = Envelope::new();
    env.set_payload(&[0xFF; PACKET_MAX_SIZE]).unwrap();
    assert_eq!(env.frame_len(), FRAME_MAX_SIZE);
}
