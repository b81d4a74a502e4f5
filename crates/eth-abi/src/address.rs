use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};

use crate::error::AbiError;

/// A 20-byte Ethereum account or contract address.
///
/// Equality is byte-wise. The canonical text form is a 0x-prefixed
/// 40-hex-character string; [`Display`](fmt::Display) renders the EIP-55
/// mixed-case checksum form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Length of a raw address in bytes.
    pub const LEN: usize = 20;

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Renders the address with the EIP-55 mixed-case checksum.
    ///
    /// A hex letter is uppercased when the corresponding nibble of the
    /// Keccak-256 hash of the lowercase hex address is >= 8.
    pub fn to_checksum_string(&self) -> String {
        let hex_part = hex::encode(self.0);
        let hash = Keccak256::digest(hex_part.as_bytes());

        let mut out = String::with_capacity(42);
        out.push_str("0x");

        for (i, c) in hex_part.chars().enumerate() {
            if c.is_ascii_digit() {
                out.push(c);
            } else {
                let shift = if i % 2 == 0 { 4 } else { 0 };
                let nibble = (hash[i / 2] >> shift) & 0x0f;
                if nibble >= 8 {
                    out.push(c.to_ascii_uppercase());
                } else {
                    out.push(c);
                }
            }
        }

        out
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Address {
    type Err = AbiError;

    /// Parses a 0x-prefixed 40-hex-character address string.
    ///
    /// All-lowercase and all-uppercase inputs are accepted as-is; mixed-case
    /// inputs must carry a valid EIP-55 checksum.
    fn from_str(s: &str) -> Result<Self, AbiError> {
        let hex_str = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| AbiError::InvalidAddress("address must start with 0x".into()))?;

        if hex_str.len() != 40 {
            return Err(AbiError::InvalidAddress(format!(
                "expected 40 hex characters, got {}",
                hex_str.len()
            )));
        }

        let bytes = hex::decode(hex_str)
            .map_err(|e| AbiError::InvalidAddress(format!("invalid hex: {e}")))?;

        let mut addr = [0u8; 20];
        addr.copy_from_slice(&bytes);
        let addr = Self(addr);

        // Mixed case carries an EIP-55 checksum; verify it.
        let has_upper = hex_str.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = hex_str.chars().any(|c| c.is_ascii_lowercase());
        if has_upper && has_lower && addr.to_checksum_string()[2..] != *hex_str {
            return Err(AbiError::InvalidAddress("EIP-55 checksum mismatch".into()));
        }

        Ok(addr)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum_string())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
