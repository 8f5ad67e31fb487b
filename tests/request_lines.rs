use blehostd_proto::infrastructure::blehostd::protocol::NMP_PLAIN_SVC_UUID;
use blehostd_proto::infrastructure::blehostd::wire::{check_response, encode_request, WireError};
use blehostd_proto::{BleUuid, MsgType, RequestFactory, SequenceGenerator};
use serde_json::Value;
use std::collections::HashSet;

#[test]
fn concurrent_factories_share_one_sequence_space() {
    let seqs = SequenceGenerator::new();
    let factory = RequestFactory::new(&seqs);

    let all: Vec<u32> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || {
                    (0..250)
                        .map(|_| factory.conn_cancel().seq.get())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    let unique: HashSet<u32> = all.iter().copied().collect();
    assert_eq!(unique.len(), 1000);
    assert_eq!(unique.iter().min(), Some(&1));
    assert_eq!(unique.iter().max(), Some(&1000));
}

#[test]
fn disc_svc_uuid_line_carries_canonical_uuid() {
    let seqs = SequenceGenerator::new();
    let uuid = BleUuid::parse("8d53dc1d-1db7-4cd3-868b-8a527460aa84").unwrap();
    assert_eq!(uuid, NMP_PLAIN_SVC_UUID);

    let line = encode_request(&RequestFactory::new(&seqs).disc_svc_uuid(4, uuid)).unwrap();
    let v: Value = serde_json::from_str(&line).unwrap();
    assert_eq!(v["type"], "disc_svc_uuid");
    assert_eq!(v["conn_handle"], 4);
    assert_eq!(v["svc_uuid"], "8D53DC1D-1DB7-4CD3-868B-8A527460AA84");
}

#[test]
fn write_cmd_line_formats_payload() {
    let seqs = SequenceGenerator::new();
    let req = RequestFactory::new(&seqs).write_cmd(1, 0x0012, vec![0x01, 0xab]);
    let v: Value = serde_json::from_str(&encode_request(&req).unwrap()).unwrap();
    assert_eq!(v["data"], "0x01:0xab");
    assert_eq!(v["attr_handle"], 18);
}

#[test]
fn failed_response_names_the_request() {
    let line = r#"{"op":"response","type":"exchange_mtu","seq":3,"status":261}"#;
    match check_response(line, MsgType::ExchangeMtu) {
        Err(WireError::Host(err)) => {
            assert_eq!(err.status(), Some(261));
            assert_eq!(err.msg_type(), MsgType::ExchangeMtu);
        }
        other => panic!("expected host error, got {other:?}"),
    }
}
