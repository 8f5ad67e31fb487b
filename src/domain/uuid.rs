//! 128-bit BLE UUIDs
//!
//! blehostd exchanges service and characteristic UUIDs in the canonical
//! `8-4-4-4-12` hyphenated hex form. Bytes are stored in the order the hex
//! pairs appear in the text; no byte-order reversal is applied.

use crate::domain::error::ParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Length of the canonical textual form
pub const UUID_STR_LEN: usize = 36;

/// A 128-bit UUID. Only obtainable from valid text or from 16 raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BleUuid(Uuid);

impl BleUuid {
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parse the canonical 36-character form.
    ///
    /// Hex digits may be upper or lower case. Anything else (wrong length,
    /// a missing or misplaced hyphen, a non-hex digit, braces or a urn
    /// prefix) is rejected with [`ParseError::InvalidUuidFormat`] carrying
    /// the offending input.
    pub fn parse(uuid_str: &str) -> Result<Self, ParseError> {
        // At this length the uuid crate only accepts the hyphenated form
        if uuid_str.len() != UUID_STR_LEN {
            return Err(ParseError::InvalidUuidFormat(uuid_str.to_string()));
        }
        Uuid::try_parse(uuid_str)
            .map(Self)
            .map_err(|_| ParseError::InvalidUuidFormat(uuid_str.to_string()))
    }
}

impl fmt::Display for BleUuid {
    /// Upper-case canonical form; the exact inverse of [`BleUuid::parse`]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

impl FromStr for BleUuid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 16]> for BleUuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Uuid> for BleUuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Serialize for BleUuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BleUuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN_SVC: &str = "8D53DC1D-1DB7-4CD3-868B-8A527460AA84";

    #[test]
    fn test_parse_plain_service_uuid() {
        let uuid = BleUuid::parse(PLAIN_SVC).unwrap();
        assert_eq!(
            uuid.as_bytes(),
            &[
                0x8D, 0x53, 0xDC, 0x1D, 0x1D, 0xB7, 0x4C, 0xD3, 0x86, 0x8B, 0x8A, 0x52, 0x74,
                0x60, 0xAA, 0x84
            ]
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let upper = BleUuid::parse(PLAIN_SVC).unwrap();
        let lower = BleUuid::parse(&PLAIN_SVC.to_lowercase()).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_display_round_trips() {
        for s in [
            PLAIN_SVC,
            "DA2E7828-FBCE-4E01-AE9E-261174997C48",
            "00000000-0000-0000-0000-000000000000",
            "FFFFFFFF-FFFF-FFFF-FFFF-FFFFFFFFFFFF",
        ] {
            let uuid: BleUuid = s.parse().unwrap();
            assert_eq!(uuid.to_string(), s);
        }
    }

    #[test]
    fn test_rejects_wrong_length() {
        let short = "8D53DC1D-1DB7-4CD3-868B-8A527460AA8";
        assert_eq!(
            BleUuid::parse(short),
            Err(ParseError::InvalidUuidFormat(short.to_string()))
        );
        assert!(BleUuid::parse("").is_err());
        assert!(BleUuid::parse(&format!("{PLAIN_SVC}0")).is_err());
    }

    #[test]
    fn test_rejects_misplaced_hyphens() {
        for pos in [8, 13, 18, 23] {
            let mut broken = PLAIN_SVC.as_bytes().to_vec();
            broken[pos] = b'0';
            let broken = String::from_utf8(broken).unwrap();
            assert!(BleUuid::parse(&broken).is_err(), "accepted {broken}");
        }

        // Same length, hyphens shifted by one
        assert!(BleUuid::parse("8D53DC1-D1DB7-4CD3-868B-8A527460AA84").is_err());
    }

    #[test]
    fn test_rejects_non_hex_digit() {
        assert!(BleUuid::parse("8D53DC1G-1DB7-4CD3-868B-8A527460AA84").is_err());
        assert!(BleUuid::parse("8D53DC1D-1DB7-4CD3-868B-8A527460AA8 ").is_err());
        // Leading sign
        assert!(BleUuid::parse("+D53DC1D-1DB7-4CD3-868B-8A527460AA84").is_err());
    }

    #[test]
    fn test_rejects_non_ascii_input() {
        // 36 bytes, 35 chars
        let s = "8D53DC1D-1DB7-4CD3-868B-8A527460AAé";
        assert!(BleUuid::parse(s).is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let uuid = BleUuid::parse(PLAIN_SVC).unwrap();
        let json = serde_json::to_string(&uuid).unwrap();
        assert_eq!(json, format!("\"{PLAIN_SVC}\""));

        let back: BleUuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uuid);
    }

    #[test]
    fn test_rejects_other_uuid_spellings() {
        // Valid for the uuid crate at other lengths, never on this wire
        for s in [
            "8D53DC1D1DB74CD3868B8A527460AA84",
            "{8D53DC1D-1DB7-4CD3-868B-8A527460AA84}",
            "urn:uuid:8D53DC1D-1DB7-4CD3-868B-8A527460AA84",
        ] {
            assert_eq!(
                BleUuid::parse(s),
                Err(ParseError::InvalidUuidFormat(s.to_string()))
            );
        }
    }

    #[test]
    fn test_agrees_with_uuid_crate() {
        let ours = BleUuid::parse(PLAIN_SVC).unwrap();
        let theirs = Uuid::parse_str(PLAIN_SVC).unwrap();
        assert_eq!(ours.as_uuid(), &theirs);
        assert_eq!(ours.to_string(), format!("{:X}", theirs));
        assert_eq!(BleUuid::from(theirs), ours);
        assert_eq!(BleUuid::from_bytes(*theirs.as_bytes()), ours);
    }
}
