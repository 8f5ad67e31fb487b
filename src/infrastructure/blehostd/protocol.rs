//! blehostd Protocol Constants
//!
//! Well-known newtmgr (NMP) GATT UUIDs and the fixed default values the
//! daemon expects in request fields. These values are part of the wire
//! contract and must not drift.

use crate::domain::address::BleAddrType;
use crate::domain::messages::ScanFilterPolicy;
use crate::domain::uuid::BleUuid;
use uuid::Uuid;

/// NMP service, plain transport
pub const NMP_PLAIN_SVC_UUID_STR: &str = "8D53DC1D-1DB7-4CD3-868B-8A527460AA84";
/// NMP characteristic, plain transport
pub const NMP_PLAIN_CHR_UUID_STR: &str = "DA2E7828-FBCE-4E01-AE9E-261174997C48";
/// NMP service, OIC transport
pub const NMP_OIC_SVC_UUID_STR: &str = "ADE3D529-C784-4F63-A987-EB69F70EE816";
/// OIC request characteristic
pub const NMP_OIC_REQ_CHR_UUID_STR: &str = "AD7B334F-4637-4B86-90B6-9D787F03D218";
/// OIC response characteristic
pub const NMP_OIC_RSP_CHR_UUID_STR: &str = "E9241982-4580-42C4-8831-95048216B256";

pub const NMP_PLAIN_SVC_UUID: BleUuid =
    BleUuid::from_uuid(Uuid::from_u128(0x8D53DC1D_1DB7_4CD3_868B_8A527460AA84));

pub const NMP_PLAIN_CHR_UUID: BleUuid =
    BleUuid::from_uuid(Uuid::from_u128(0xDA2E7828_FBCE_4E01_AE9E_261174997C48));

pub const NMP_OIC_SVC_UUID: BleUuid =
    BleUuid::from_uuid(Uuid::from_u128(0xADE3D529_C784_4F63_A987_EB69F70EE816));

pub const NMP_OIC_REQ_CHR_UUID: BleUuid =
    BleUuid::from_uuid(Uuid::from_u128(0xAD7B334F_4637_4B86_90B6_9D787F03D218));

pub const NMP_OIC_RSP_CHR_UUID: BleUuid =
    BleUuid::from_uuid(Uuid::from_u128(0xE9241982_4580_42C4_8831_95048216B256));

/// ATT overhead of a write command (opcode + attribute handle)
pub const WRITE_CMD_BASE_SZ: u16 = 3;
/// ATT overhead of a notification (opcode + attribute handle)
pub const NOTIFY_CMD_BASE_SZ: u16 = 3;

/// Connect request defaults
pub mod connect {
    use super::BleAddrType;

    pub const OWN_ADDR_TYPE: BleAddrType = BleAddrType::Public;
    pub const PEER_ADDR_TYPE: BleAddrType = BleAddrType::Public;

    /// How long the controller keeps trying to connect, in ms
    pub const DURATION_MS: i32 = 30000;
    /// Scan interval in 0.625 ms units
    pub const SCAN_ITVL: u16 = 0x0010;
    /// Scan window in 0.625 ms units
    pub const SCAN_WINDOW: u16 = 0x0010;
    /// Connection interval bounds in 1.25 ms units
    pub const ITVL_MIN: u16 = 24;
    pub const ITVL_MAX: u16 = 40;
    pub const LATENCY: u16 = 0;
    /// Supervision timeout in 10 ms units
    pub const SUPERVISION_TIMEOUT: u16 = 0x0200;
    /// Connection event length bounds in 0.625 ms units
    pub const MIN_CE_LEN: u16 = 0x0010;
    pub const MAX_CE_LEN: u16 = 0x0300;
}

/// Terminate request defaults
pub mod terminate {
    pub const HCI_REASON: u8 = 0;
}

/// Scan request defaults
pub mod scan {
    use super::{BleAddrType, ScanFilterPolicy};

    pub const OWN_ADDR_TYPE: BleAddrType = BleAddrType::Public;
    pub const DURATION_MS: i32 = 10000;
    pub const ITVL: u16 = 0x0010;
    pub const WINDOW: u16 = 0x0010;
    pub const FILTER_POLICY: ScanFilterPolicy = ScanFilterPolicy::NoWhitelist;
    pub const LIMITED: bool = false;
    pub const PASSIVE: bool = false;
    pub const FILTER_DUPLICATES: bool = false;
}

/// Random address generation defaults
pub mod gen_rand_addr {
    pub const NRPA: bool = false;
    pub const LOCAL: bool = true;
}

/// Largest payload a single write command can carry at the given ATT MTU
pub fn max_write_cmd_payload(mtu: u16) -> u16 {
    mtu.saturating_sub(WRITE_CMD_BASE_SZ)
}

/// Largest payload a single notification can carry at the given ATT MTU
pub fn max_notify_payload(mtu: u16) -> u16 {
    mtu.saturating_sub(NOTIFY_CMD_BASE_SZ)
}
