//! blehostd Module
//!
//! Builds requests for the blehostd BLE host daemon and interprets the
//! status it sends back.
//!
//! ## Architecture
//!
//! ```text
//! caller ──► RequestFactory ──► request record ──► wire::encode_request ──► transport
//!                 │                                                            │
//!         SequenceGenerator                                                    ▼
//!           BleUuid::parse                      error translator ◄── wire::check_response
//! ```
//!
//! ## Modules
//!
//! - [`protocol`] - Well-known UUIDs and protocol default values
//! - [`requests`] - One constructor per request type
//! - [`wire`] - JSON line encoding and response status checks
//!
//! Sending and receiving lines is left to the caller's transport.

pub mod protocol;
pub mod requests;
pub mod wire;

pub use requests::RequestFactory;
