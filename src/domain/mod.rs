//! Wire identity types for the blehostd protocol
//!
//! Sequence numbers, UUIDs, addresses, message records and the error
//! types shared by the rest of the crate.

pub mod address;
pub mod error;
pub mod messages;
pub mod sequence;
pub mod settings;
pub mod status;
pub mod uuid;
