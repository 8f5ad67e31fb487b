//! blehostd Message Records
//!
//! In-memory shape of every request this crate builds. Field names follow
//! the blehostd JSON vocabulary so a record serializes directly into the
//! line the daemon expects.

use crate::domain::address::{BleAddr, BleAddrType};
use crate::domain::error::ParseError;
use crate::domain::sequence::BleSeq;
use crate::domain::uuid::BleUuid;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Direction of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MsgOp {
    #[serde(rename = "request")]
    Request,
    #[serde(rename = "response")]
    Response,
    #[serde(rename = "event")]
    Event,
}

impl MsgOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Response => "response",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for MsgOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MsgOp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "request" => Ok(Self::Request),
            "response" => Ok(Self::Response),
            "event" => Ok(Self::Event),
            _ => Err(ParseError::UnknownMessageName(s.to_string())),
        }
    }
}

macro_rules! msg_types {
    ($($variant:ident => $name:literal,)*) => {
        /// blehostd message type tag
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum MsgType {
            $(
                #[serde(rename = $name)]
                $variant,
            )*
        }

        impl MsgType {
            pub const ALL: &'static [MsgType] = &[$(MsgType::$variant,)*];

            /// Wire name of this message type
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }
    };
}

msg_types! {
    Error => "error",
    Sync => "sync",
    Connect => "connect",
    Terminate => "terminate",
    DiscAllSvcs => "disc_all_svcs",
    DiscSvcUuid => "disc_svc_uuid",
    DiscAllChrs => "disc_all_chrs",
    DiscChrUuid => "disc_chr_uuid",
    Write => "write",
    WriteCmd => "write_cmd",
    ExchangeMtu => "exchange_mtu",
    GenRandAddr => "gen_rand_addr",
    SetRandAddr => "set_rand_addr",
    ConnCancel => "conn_cancel",
    Scan => "scan",
    ScanCancel => "scan_cancel",
    SetPreferredMtu => "set_preferred_mtu",
    SecurityInitiate => "security_initiate",
    ConnFind => "conn_find",
    Reset => "reset",

    SyncEvt => "sync_evt",
    ConnectEvt => "conn_evt",
    DisconnectEvt => "disconnect_evt",
    DiscSvcEvt => "disc_svc_evt",
    DiscChrEvt => "disc_chr_evt",
    WriteAck => "write_ack",
    NotifyRxEvt => "notify_rx_evt",
    MtuChangeEvt => "mtu_change_evt",
    ScanEvt => "scan_evt",
    ScanTmoEvt => "scan_tmo_evt",
    EncChangeEvt => "enc_change_evt",
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MsgType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| ParseError::UnknownMessageName(s.to_string()))
    }
}

/// Opaque byte payload, written on the wire as `0x01:0x02:...`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BleBytes {
    pub bytes: Vec<u8>,
}

impl BleBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for BleBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for BleBytes {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl fmt::Display for BleBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "0x{:02x}", b)?;
        }
        Ok(())
    }
}

impl Serialize for BleBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Which advertisers a scan reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScanFilterPolicy {
    /// Every advertiser
    #[default]
    #[serde(rename = "no_wl")]
    NoWhitelist,
    /// Whitelisted advertisers only
    #[serde(rename = "use_wl")]
    UseWhitelist,
    #[serde(rename = "no_wl_inita")]
    NoWhitelistInitA,
    #[serde(rename = "use_wl_inita")]
    UseWhitelistInitA,
}

/// Common view over every request record, used to correlate responses
pub trait BleRequest: Serialize {
    fn seq(&self) -> BleSeq;
    fn msg_type(&self) -> MsgType;
}

macro_rules! impl_ble_request {
    ($($req:ty),* $(,)?) => {
        $(
            impl BleRequest for $req {
                fn seq(&self) -> BleSeq {
                    self.seq
                }

                fn msg_type(&self) -> MsgType {
                    self.msg_type
                }
            }
        )*
    };
}

impl_ble_request!(
    BleSyncReq,
    BleConnectReq,
    BleTerminateReq,
    BleConnCancelReq,
    BleDiscAllSvcsReq,
    BleDiscSvcUuidReq,
    BleDiscAllChrsReq,
    BleDiscChrUuidReq,
    BleWriteReq,
    BleWriteCmdReq,
    BleExchangeMtuReq,
    BleGenRandAddrReq,
    BleSetRandAddrReq,
    BleScanReq,
    BleScanCancelReq,
    BleSetPreferredMtuReq,
    BleSecurityInitiateReq,
    BleConnFindReq,
    BleResetReq,
);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleSyncReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleConnectReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub own_addr_type: BleAddrType,
    pub peer_addr_type: BleAddrType,
    pub peer_addr: BleAddr,

    pub duration_ms: i32,
    pub scan_itvl: u16,
    pub scan_window: u16,
    pub itvl_min: u16,
    pub itvl_max: u16,
    pub latency: u16,
    pub supervision_timeout: u16,
    pub min_ce_len: u16,
    pub max_ce_len: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleTerminateReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub conn_handle: u16,
    pub hci_reason: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleConnCancelReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleDiscAllSvcsReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub conn_handle: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleDiscSvcUuidReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub conn_handle: u16,
    #[serde(rename = "svc_uuid")]
    pub uuid: BleUuid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleDiscAllChrsReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub conn_handle: u16,
    pub start_attr_handle: u16,
    pub end_attr_handle: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleDiscChrUuidReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub conn_handle: u16,
    pub start_attr_handle: u16,
    pub end_attr_handle: u16,
    #[serde(rename = "chr_uuid")]
    pub uuid: BleUuid,
}

/// Write with response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleWriteReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub conn_handle: u16,
    pub attr_handle: u16,
    pub data: BleBytes,
}

/// Write without response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleWriteCmdReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub conn_handle: u16,
    pub attr_handle: u16,
    pub data: BleBytes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleExchangeMtuReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub conn_handle: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleGenRandAddrReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    /// Non-resolvable private address instead of a static random one
    pub nrpa: bool,
    /// Generate locally rather than asking the controller
    pub local: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleSetRandAddrReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub addr: BleAddr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleScanReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub own_addr_type: BleAddrType,
    pub duration_ms: i32,
    pub itvl: u16,
    pub window: u16,
    pub filter_policy: ScanFilterPolicy,
    pub limited: bool,
    pub passive: bool,
    pub filter_duplicates: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleScanCancelReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleSetPreferredMtuReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub mtu: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleSecurityInitiateReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub conn_handle: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleConnFindReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,

    pub conn_handle: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BleResetReq {
    pub op: MsgOp,
    #[serde(rename = "type")]
    pub msg_type: MsgType,
    pub seq: BleSeq,
}
