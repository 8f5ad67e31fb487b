//! BLE device addresses

use crate::domain::error::ParseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Address type tag sent alongside every address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BleAddrType {
    #[default]
    #[serde(rename = "public")]
    Public,
    #[serde(rename = "random")]
    Random,
    /// Resolvable private address, falls back to the public identity
    #[serde(rename = "rpa_pub")]
    RpaPub,
    /// Resolvable private address, falls back to the random identity
    #[serde(rename = "rpa_rnd")]
    RpaRnd,
}

impl BleAddrType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Random => "random",
            Self::RpaPub => "rpa_pub",
            Self::RpaRnd => "rpa_rnd",
        }
    }
}

impl fmt::Display for BleAddrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BleAddrType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "random" => Ok(Self::Random),
            "rpa_pub" => Ok(Self::RpaPub),
            "rpa_rnd" => Ok(Self::RpaRnd),
            _ => Err(ParseError::InvalidAddress(s.to_string())),
        }
    }
}

/// Six-byte device address, stored in the order it is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BleAddr {
    pub bytes: [u8; 6],
}

impl BleAddr {
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self { bytes }
    }

    /// Parse the colon-separated form, e.g. `11:22:33:44:55:66`
    pub fn parse(addr_str: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidAddress(addr_str.to_string());

        if addr_str.len() != 17 {
            return Err(invalid());
        }

        let mut bytes = [0u8; 6];
        let mut parts = addr_str.split(':');
        for byte in bytes.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            if part.len() != 2 || !part.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            *byte = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { bytes })
    }
}

impl fmt::Display for BleAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl FromStr for BleAddr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 6]> for BleAddr {
    fn from(bytes: [u8; 6]) -> Self {
        Self::new(bytes)
    }
}

impl Serialize for BleAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BleAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let addr = BleAddr::parse("0A:b1:2C:d3:4E:F5").unwrap();
        assert_eq!(addr.bytes, [0x0A, 0xB1, 0x2C, 0xD3, 0x4E, 0xF5]);
        assert_eq!(addr.to_string(), "0a:b1:2c:d3:4e:f5");
    }

    #[test]
    fn test_default_is_zero_address() {
        assert_eq!(BleAddr::default().to_string(), "00:00:00:00:00:00");
        assert_eq!(BleAddrType::default(), BleAddrType::Public);
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for bad in [
            "",
            "11:22:33:44:55",
            "11:22:33:44:55:66:77",
            "11-22-33-44-55-66",
            "1:122:33:44:55:66",
            "11:22:33:44:55:6G",
            "+1:22:33:44:55:66",
        ] {
            assert_eq!(
                BleAddr::parse(bad),
                Err(ParseError::InvalidAddress(bad.to_string())),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_addr_type_wire_names() {
        for t in [
            BleAddrType::Public,
            BleAddrType::Random,
            BleAddrType::RpaPub,
            BleAddrType::RpaRnd,
        ] {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            assert_eq!(t.as_str().parse::<BleAddrType>().unwrap(), t);
        }
        assert!("static".parse::<BleAddrType>().is_err());
    }
}
