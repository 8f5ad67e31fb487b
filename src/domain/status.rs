//! blehostd status codes
//!
//! The daemon reports NimBLE host status codes. Codes below 0x100 are host
//! errors; higher ranges wrap an error from a lower layer, offset by a
//! per-layer base.

pub const STATUS_SUCCESS: i32 = 0;

pub const ERR_CODE_ATT_BASE: i32 = 0x100;
pub const ERR_CODE_HCI_BASE: i32 = 0x200;
pub const ERR_CODE_L2C_BASE: i32 = 0x300;
pub const ERR_CODE_SM_US_BASE: i32 = 0x400;
pub const ERR_CODE_SM_PEER_BASE: i32 = 0x500;

const UNKNOWN: &str = "unknown";

/// Host status codes 1..=30, indexed by `code - 1`
static HOST_ERRORS: [&str; 30] = [
    "eagain",
    "ealready",
    "einval",
    "emsgsize",
    "enoent",
    "enomem",
    "enotconn",
    "enotsup",
    "eapp",
    "ebaddata",
    "eos",
    "econtroller",
    "etimeout",
    "edone",
    "ebusy",
    "ereject",
    "eunknown",
    "erole",
    "etimeout_hci",
    "enomem_evt",
    "enoaddr",
    "enotsynced",
    "eauthen",
    "eauthor",
    "eencrypt",
    "eencrypt_key_sz",
    "estore_cap",
    "estore_fail",
    "epreempted",
    "edisabled",
];

/// ATT error codes 0x01..=0x11, indexed by `code - 1`
static ATT_ERRORS: [&str; 17] = [
    "invalid handle",
    "read not permitted",
    "write not permitted",
    "invalid pdu",
    "insufficient authentication",
    "request not supported",
    "invalid offset",
    "insufficient authorization",
    "prepare queue full",
    "attribute not found",
    "attribute not long",
    "insufficient encryption key size",
    "invalid attribute value length",
    "unlikely error",
    "insufficient encryption",
    "unsupported group type",
    "insufficient resources",
];

/// L2CAP signalling reject reasons 0x00..=0x02
static L2C_ERRORS: [&str; 3] = [
    "command not understood",
    "signaling mtu exceeded",
    "invalid cid in request",
];

/// SM pairing failure reasons 0x01..=0x0e, indexed by `code - 1`
static SM_ERRORS: [&str; 14] = [
    "passkey entry failed",
    "oob not available",
    "authentication requirements",
    "confirm value failed",
    "pairing not supported",
    "encryption key size",
    "command not supported",
    "unspecified reason",
    "repeated attempts",
    "invalid parameters",
    "dhkey check failed",
    "numeric comparison failed",
    "br/edr pairing in progress",
    "cross-transport key derivation not allowed",
];

fn hci_error(code: i32) -> Option<&'static str> {
    let s = match code {
        0x01 => "unknown hci command",
        0x02 => "unknown connection identifier",
        0x03 => "hardware failure",
        0x04 => "page timeout",
        0x05 => "authentication failure",
        0x06 => "pin or key missing",
        0x07 => "memory capacity exceeded",
        0x08 => "connection timeout",
        0x09 => "connection limit exceeded",
        0x0a => "synchronous connection limit exceeded",
        0x0b => "connection already exists",
        0x0c => "command disallowed",
        0x0d => "rejected: limited resources",
        0x0e => "rejected: security reasons",
        0x0f => "rejected: unacceptable bd_addr",
        0x10 => "connection accept timeout exceeded",
        0x11 => "unsupported feature or parameter value",
        0x12 => "invalid hci command parameters",
        0x13 => "remote user terminated connection",
        0x14 => "remote device terminated: low resources",
        0x15 => "remote device terminated: power off",
        0x16 => "connection terminated by local host",
        0x17 => "repeated attempts",
        0x18 => "pairing not allowed",
        0x19 => "unknown lmp pdu",
        0x1a => "unsupported remote feature",
        0x1e => "invalid ll parameters",
        0x1f => "unspecified error",
        0x20 => "unsupported ll parameter value",
        0x21 => "role change not allowed",
        0x22 => "ll response timeout",
        0x23 => "ll procedure collision",
        0x24 => "lmp pdu not allowed",
        0x25 => "encryption mode not acceptable",
        0x26 => "link key cannot be changed",
        0x28 => "instant passed",
        0x29 => "pairing with unit key not supported",
        0x2a => "different transaction collision",
        0x2f => "insufficient security",
        0x30 => "parameter out of mandatory range",
        0x3a => "controller busy",
        0x3b => "unacceptable connection parameters",
        0x3c => "advertising timeout",
        0x3d => "connection terminated due to mic failure",
        0x3e => "connection failed to be established",
        0x42 => "unknown advertising identifier",
        0x43 => "limit reached",
        _ => return None,
    };
    Some(s)
}

fn indexed(table: &'static [&'static str], code: i32) -> Option<&'static str> {
    usize::try_from(code)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| table.get(i))
        .copied()
}

/// Human-readable description for a daemon status code.
///
/// Codes outside every known range map to `"unknown"`.
pub fn status_description(status: i32) -> &'static str {
    let found = match status {
        STATUS_SUCCESS => Some("success"),
        s if s < 0 => None,
        s if s < ERR_CODE_ATT_BASE => indexed(&HOST_ERRORS, s),
        s if s < ERR_CODE_HCI_BASE => indexed(&ATT_ERRORS, s - ERR_CODE_ATT_BASE),
        s if s < ERR_CODE_L2C_BASE => hci_error(s - ERR_CODE_HCI_BASE),
        s if s < ERR_CODE_SM_US_BASE => {
            usize::try_from(s - ERR_CODE_L2C_BASE)
                .ok()
                .and_then(|i| L2C_ERRORS.get(i))
                .copied()
        }
        s if s < ERR_CODE_SM_PEER_BASE => indexed(&SM_ERRORS, s - ERR_CODE_SM_US_BASE),
        s if s < ERR_CODE_SM_PEER_BASE + 0x100 => {
            indexed(&SM_ERRORS, s - ERR_CODE_SM_PEER_BASE)
        }
        _ => None,
    };
    found.unwrap_or(UNKNOWN)
}
