//! Request Construction
//!
//! Every constructor reserves a fresh sequence number, tags the record as a
//! request of the matching type, copies in the caller's arguments and fills
//! everything else with the protocol defaults from [`protocol`]. Nothing
//! here blocks, performs I/O or fails.
//!
//! [`protocol`]: crate::infrastructure::blehostd::protocol

use crate::domain::address::{BleAddr, BleAddrType};
use crate::domain::messages::*;
use crate::domain::sequence::{BleSeq, SequenceGenerator};
use crate::domain::uuid::BleUuid;
use crate::infrastructure::blehostd::protocol::{connect, gen_rand_addr, scan, terminate};
use tracing::trace;

/// Builds request records against a sequence space
#[derive(Debug, Clone, Copy)]
pub struct RequestFactory<'a> {
    seqs: &'a SequenceGenerator,
}

impl Default for RequestFactory<'static> {
    /// Factory drawing from the process-wide sequence space
    fn default() -> Self {
        Self::new(SequenceGenerator::global())
    }
}

impl<'a> RequestFactory<'a> {
    /// Factory drawing from a caller-owned sequence space, for sessions that
    /// must not share numbering with the rest of the process
    pub fn new(seqs: &'a SequenceGenerator) -> Self {
        Self { seqs }
    }

    fn header(&self, msg_type: MsgType) -> (MsgOp, MsgType, BleSeq) {
        let seq = self.seqs.next_seq();
        trace!("Building {} request, seq={}", msg_type, seq);
        (MsgOp::Request, msg_type, seq)
    }

    pub fn sync(&self) -> BleSyncReq {
        let (op, msg_type, seq) = self.header(MsgType::Sync);
        BleSyncReq { op, msg_type, seq }
    }

    /// Connect to `peer_addr` (public address type) with the default timing
    pub fn connect(&self, peer_addr: BleAddr) -> BleConnectReq {
        self.connect_with(peer_addr, connect::PEER_ADDR_TYPE, connect::OWN_ADDR_TYPE)
    }

    /// Connect with explicit peer and own address types; timing stays default
    pub fn connect_with(
        &self,
        peer_addr: BleAddr,
        peer_addr_type: BleAddrType,
        own_addr_type: BleAddrType,
    ) -> BleConnectReq {
        let (op, msg_type, seq) = self.header(MsgType::Connect);
        BleConnectReq {
            op,
            msg_type,
            seq,

            own_addr_type,
            peer_addr_type,
            peer_addr,

            duration_ms: connect::DURATION_MS,
            scan_itvl: connect::SCAN_ITVL,
            scan_window: connect::SCAN_WINDOW,
            itvl_min: connect::ITVL_MIN,
            itvl_max: connect::ITVL_MAX,
            latency: connect::LATENCY,
            supervision_timeout: connect::SUPERVISION_TIMEOUT,
            min_ce_len: connect::MIN_CE_LEN,
            max_ce_len: connect::MAX_CE_LEN,
        }
    }

    pub fn terminate(&self, conn_handle: u16) -> BleTerminateReq {
        let (op, msg_type, seq) = self.header(MsgType::Terminate);
        BleTerminateReq {
            op,
            msg_type,
            seq,

            conn_handle,
            hci_reason: terminate::HCI_REASON,
        }
    }

    pub fn conn_cancel(&self) -> BleConnCancelReq {
        let (op, msg_type, seq) = self.header(MsgType::ConnCancel);
        BleConnCancelReq { op, msg_type, seq }
    }

    pub fn disc_all_svcs(&self, conn_handle: u16) -> BleDiscAllSvcsReq {
        let (op, msg_type, seq) = self.header(MsgType::DiscAllSvcs);
        BleDiscAllSvcsReq {
            op,
            msg_type,
            seq,

            conn_handle,
        }
    }

    /// Discover the service identified by an already-parsed UUID
    pub fn disc_svc_uuid(&self, conn_handle: u16, uuid: BleUuid) -> BleDiscSvcUuidReq {
        let (op, msg_type, seq) = self.header(MsgType::DiscSvcUuid);
        BleDiscSvcUuidReq {
            op,
            msg_type,
            seq,

            conn_handle,
            uuid,
        }
    }

    /// Discover every characteristic in the service spanning the given
    /// attribute handle range
    pub fn disc_all_chrs(
        &self,
        conn_handle: u16,
        start_attr_handle: u16,
        end_attr_handle: u16,
    ) -> BleDiscAllChrsReq {
        let (op, msg_type, seq) = self.header(MsgType::DiscAllChrs);
        BleDiscAllChrsReq {
            op,
            msg_type,
            seq,

            conn_handle,
            start_attr_handle,
            end_attr_handle,
        }
    }

    pub fn disc_chr_uuid(
        &self,
        conn_handle: u16,
        start_attr_handle: u16,
        end_attr_handle: u16,
        uuid: BleUuid,
    ) -> BleDiscChrUuidReq {
        let (op, msg_type, seq) = self.header(MsgType::DiscChrUuid);
        BleDiscChrUuidReq {
            op,
            msg_type,
            seq,

            conn_handle,
            start_attr_handle,
            end_attr_handle,
            uuid,
        }
    }

    pub fn write(
        &self,
        conn_handle: u16,
        attr_handle: u16,
        data: impl Into<BleBytes>,
    ) -> BleWriteReq {
        let (op, msg_type, seq) = self.header(MsgType::Write);
        BleWriteReq {
            op,
            msg_type,
            seq,

            conn_handle,
            attr_handle,
            data: data.into(),
        }
    }

    /// Write without response
    pub fn write_cmd(
        &self,
        conn_handle: u16,
        attr_handle: u16,
        data: impl Into<BleBytes>,
    ) -> BleWriteCmdReq {
        let (op, msg_type, seq) = self.header(MsgType::WriteCmd);
        BleWriteCmdReq {
            op,
            msg_type,
            seq,

            conn_handle,
            attr_handle,
            data: data.into(),
        }
    }

    pub fn exchange_mtu(&self, conn_handle: u16) -> BleExchangeMtuReq {
        let (op, msg_type, seq) = self.header(MsgType::ExchangeMtu);
        BleExchangeMtuReq {
            op,
            msg_type,
            seq,

            conn_handle,
        }
    }

    pub fn gen_rand_addr(&self) -> BleGenRandAddrReq {
        let (op, msg_type, seq) = self.header(MsgType::GenRandAddr);
        BleGenRandAddrReq {
            op,
            msg_type,
            seq,

            nrpa: gen_rand_addr::NRPA,
            local: gen_rand_addr::LOCAL,
        }
    }

    pub fn set_rand_addr(&self, addr: BleAddr) -> BleSetRandAddrReq {
        let (op, msg_type, seq) = self.header(MsgType::SetRandAddr);
        BleSetRandAddrReq {
            op,
            msg_type,
            seq,

            addr,
        }
    }

    pub fn scan(&self) -> BleScanReq {
        let (op, msg_type, seq) = self.header(MsgType::Scan);
        BleScanReq {
            op,
            msg_type,
            seq,

            own_addr_type: scan::OWN_ADDR_TYPE,
            duration_ms: scan::DURATION_MS,
            itvl: scan::ITVL,
            window: scan::WINDOW,
            filter_policy: scan::FILTER_POLICY,
            limited: scan::LIMITED,
            passive: scan::PASSIVE,
            filter_duplicates: scan::FILTER_DUPLICATES,
        }
    }

    pub fn scan_cancel(&self) -> BleScanCancelReq {
        let (op, msg_type, seq) = self.header(MsgType::ScanCancel);
        BleScanCancelReq { op, msg_type, seq }
    }

    pub fn set_preferred_mtu(&self, mtu: u16) -> BleSetPreferredMtuReq {
        let (op, msg_type, seq) = self.header(MsgType::SetPreferredMtu);
        BleSetPreferredMtuReq {
            op,
            msg_type,
            seq,

            mtu,
        }
    }

    pub fn security_initiate(&self, conn_handle: u16) -> BleSecurityInitiateReq {
        let (op, msg_type, seq) = self.header(MsgType::SecurityInitiate);
        BleSecurityInitiateReq {
            op,
            msg_type,
            seq,

            conn_handle,
        }
    }

    pub fn conn_find(&self, conn_handle: u16) -> BleConnFindReq {
        let (op, msg_type, seq) = self.header(MsgType::ConnFind);
        BleConnFindReq {
            op,
            msg_type,
            seq,

            conn_handle,
        }
    }

    pub fn reset(&self) -> BleResetReq {
        let (op, msg_type, seq) = self.header(MsgType::Reset);
        BleResetReq { op, msg_type, seq }
    }
}
