//! JSON line framing for blehostd
//!
//! Requests go out as one JSON object per line. Responses and events come
//! back the same way; only the common header is decoded here, the body is
//! left to whoever owns the matching request.

use crate::domain::error::{status_error, HostError};
use crate::domain::messages::{BleRequest, MsgOp, MsgType};
use crate::domain::sequence::BleSeq;
use crate::domain::status::STATUS_SUCCESS;
use serde::Deserialize;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed blehostd message: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected {got} message, expected {expected}")]
    UnexpectedType { expected: MsgType, got: MsgType },
    #[error(transparent)]
    Host(#[from] HostError),
}

/// Fields shared by every message the daemon sends back
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseHeader {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    /// Absent on unsolicited events
    #[serde(default)]
    pub seq: Option<BleSeq>,
    #[serde(default)]
    pub status: Option<i32>,
}

/// Encode a request as a single newline-terminated JSON line
pub fn encode_request<R: BleRequest>(req: &R) -> Result<String, WireError> {
    let mut line = serde_json::to_string(req)?;
    line.push('\n');
    trace!("Encoded {} seq={}: {}", req.msg_type(), req.seq(), line.trim_end());
    Ok(line)
}

/// Pretty-printed encoding, for humans
pub fn encode_request_pretty<R: BleRequest>(req: &R) -> Result<String, WireError> {
    let mut text = serde_json::to_string_pretty(req)?;
    text.push('\n');
    Ok(text)
}

pub fn decode_header(line: &str) -> Result<ResponseHeader, WireError> {
    Ok(serde_json::from_str(line.trim())?)
}

/// Decode a response line and classify its status.
///
/// A missing status or a status of 0 is success. Any other status becomes
/// a [`HostError::Status`] carrying the decoded description.
pub fn check_response(line: &str, expected: MsgType) -> Result<ResponseHeader, WireError> {
    let header = decode_header(line)?;
    if header.msg_type != expected {
        return Err(WireError::UnexpectedType {
            expected,
            got: header.msg_type,
        });
    }

    match header.status {
        None | Some(STATUS_SUCCESS) => Ok(header),
        Some(status) => Err(status_error(header.op, header.msg_type, status).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::address::BleAddr;
    use crate::domain::sequence::SequenceGenerator;
    use crate::infrastructure::blehostd::requests::RequestFactory;
    use serde_json::{json, Value};

    #[test]
    fn test_encode_connect_line() {
        let seqs = SequenceGenerator::new();
        let req = RequestFactory::new(&seqs).connect(BleAddr::new([1, 2, 3, 4, 5, 6]));
        let line = encode_request(&req).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.matches('\n').count(), 1);

        let v: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(
            v,
            json!({
                "op": "request",
                "type": "connect",
                "seq": 1,
                "own_addr_type": "public",
                "peer_addr_type": "public",
                "peer_addr": "01:02:03:04:05:06",
                "duration_ms": 30000,
                "scan_itvl": 16,
                "scan_window": 16,
                "itvl_min": 24,
                "itvl_max": 40,
                "latency": 0,
                "supervision_timeout": 512,
                "min_ce_len": 16,
                "max_ce_len": 768,
            })
        );
    }

    #[test]
    fn test_pretty_encoding_is_same_document() {
        let seqs = SequenceGenerator::new();
        let req = RequestFactory::new(&seqs).exchange_mtu(3);
        let compact: Value = serde_json::from_str(&encode_request(&req).unwrap()).unwrap();
        let pretty: Value = serde_json::from_str(&encode_request_pretty(&req).unwrap()).unwrap();
        assert_eq!(compact, pretty);
    }

    #[test]
    fn test_check_response_success() {
        let header = check_response(
            r#"{"op":"response","type":"connect","seq":7,"status":0}"#,
            MsgType::Connect,
        )
        .unwrap();
        assert_eq!(header.op, MsgOp::Response);
        assert_eq!(header.seq, Some(BleSeq(7)));
    }

    #[test]
    fn test_check_response_without_status() {
        let header = check_response(r#"{"op":"event","type":"sync_evt"}"#, MsgType::SyncEvt)
            .unwrap();
        assert_eq!(header.seq, None);
        assert_eq!(header.status, None);
    }

    #[test]
    fn test_check_response_failure_status() {
        let err = check_response(
            r#"{"op":"response","type":"terminate","seq":9,"status":7,"extra":1}"#,
            MsgType::Terminate,
        )
        .unwrap_err();
        match err {
            WireError::Host(host) => {
                assert_eq!(host.status(), Some(7));
                assert_eq!(
                    host.to_string(),
                    "response terminate indicates error: enotconn (7)"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_check_response_wrong_type() {
        let err = check_response(
            r#"{"op":"response","type":"scan","seq":1,"status":0}"#,
            MsgType::Connect,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            WireError::UnexpectedType {
                expected: MsgType::Connect,
                got: MsgType::Scan
            }
        ));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode_header("not json"), Err(WireError::Json(_))));
        assert!(matches!(
            decode_header(r#"{"op":"response","type":"bogus"}"#),
            Err(WireError::Json(_))
        ));
    }
}
