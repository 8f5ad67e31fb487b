//! Error Types
//!
//! Two failure families leave this crate: bad input text (a UUID or
//! address that does not parse) and daemon failures (a timeout or a
//! non-zero status). Callers branch on them separately.

use crate::domain::messages::{MsgOp, MsgType};
use crate::domain::status::status_description;
use thiserror::Error;
use tracing::debug;

/// Malformed caller input. Never worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid UUID: {0}")]
    InvalidUuidFormat(String),
    #[error("Invalid BLE address: {0}")]
    InvalidAddress(String),
    #[error("Unknown message name: {0}")]
    UnknownMessageName(String),
}

/// Failure reported by, or on behalf of, blehostd
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// No response of the expected type arrived before the caller's deadline
    #[error("Timeout waiting for blehostd to send {rsp_type} response")]
    Timeout { rsp_type: MsgType },

    /// The daemon answered with a non-zero status
    #[error("{op} {msg_type} indicates error: {description} ({status})")]
    Status {
        op: MsgOp,
        msg_type: MsgType,
        status: i32,
        description: &'static str,
    },
}

impl HostError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Raw daemon status code, if this is a status failure
    pub fn status(&self) -> Option<i32> {
        match self {
            Self::Timeout { .. } => None,
            Self::Status { status, .. } => Some(*status),
        }
    }

    /// Message type the failure relates to
    pub fn msg_type(&self) -> MsgType {
        match self {
            Self::Timeout { rsp_type } => *rsp_type,
            Self::Status { msg_type, .. } => *msg_type,
        }
    }
}

/// Build the error for a response that never arrived.
///
/// The deadline itself is enforced by whoever waits on the transport.
pub fn timeout_error(rsp_type: MsgType) -> HostError {
    let err = HostError::Timeout { rsp_type };
    debug!("{}", err);
    err
}

/// Build the error for a response carrying a non-zero status
pub fn status_error(op: MsgOp, msg_type: MsgType, status: i32) -> HostError {
    let err = HostError::Status {
        op,
        msg_type,
        status,
        description: status_description(status),
    };
    debug!("{}", err);
    err
}
