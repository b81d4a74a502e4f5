use alloy_primitives::U256;

use crate::address::Address;
use crate::error::AbiError;

/// Size of one ABI word in bytes.
pub const WORD_LEN: usize = 32;

/// A single statically-encoded call argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbiValue {
    /// A 20-byte address, left-padded to one word.
    Address(Address),
    /// A 256-bit unsigned integer, big-endian.
    Uint256(U256),
}

impl AbiValue {
    /// Encodes the value as one 32-byte ABI word.
    pub fn to_word(&self) -> [u8; WORD_LEN] {
        match self {
            AbiValue::Address(addr) => {
                // Left-pad: 12 zero bytes + 20 address bytes.
                let mut word = [0u8; WORD_LEN];
                word[12..].copy_from_slice(addr.as_bytes());
                word
            }
            AbiValue::Uint256(value) => value.to_be_bytes::<WORD_LEN>(),
        }
    }
}

/// Assembles a call payload as `selector || word(values[0]) || word(values[1]) || ...`.
pub fn encode_method_call(selector: [u8; 4], values: &[AbiValue]) -> Vec<u8> {
    let mut data = Vec::with_capacity(4 + values.len() * WORD_LEN);
    data.extend_from_slice(&selector);

    for value in values {
        data.extend_from_slice(&value.to_word());
    }

    data
}

/// Decodes a single uint256 return value from the first word of `data`.
///
/// Bytes beyond the first word are ignored; methods returning one value
/// leave nothing meaningful there.
pub fn decode_uint256(data: &[u8]) -> Result<U256, AbiError> {
    let word = data.get(..WORD_LEN).ok_or_else(|| {
        AbiError::InvalidHex(format!(
            "expected at least {WORD_LEN} bytes, got {}",
            data.len()
        ))
    })?;

    Ok(U256::from_be_slice(word))
}
