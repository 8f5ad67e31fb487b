//! Request construction and wire identity for the blehostd BLE host daemon.
//!
//! ```
//! use blehostd_proto::{BleAddr, MsgType, RequestFactory};
//! use blehostd_proto::infrastructure::blehostd::wire::encode_request;
//!
//! let peer: BleAddr = "01:02:03:04:05:06".parse().unwrap();
//! let req = RequestFactory::default().connect(peer);
//! assert_eq!(req.msg_type, MsgType::Connect);
//! assert!(encode_request(&req).unwrap().ends_with('\n'));
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::address::{BleAddr, BleAddrType};
pub use domain::error::{status_error, timeout_error, HostError, ParseError};
pub use domain::messages::{BleBytes, BleRequest, MsgOp, MsgType};
pub use domain::sequence::{BleSeq, SequenceGenerator};
pub use domain::status::status_description;
pub use domain::uuid::BleUuid;
pub use infrastructure::blehostd::RequestFactory;
