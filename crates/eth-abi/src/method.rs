use sha3::{Digest, Keccak256};

use crate::codec::{encode_method_call, AbiValue};

/// Derives the 4-byte function selector for a canonical signature string
/// such as `"balanceOf(address)"`.
///
/// The selector is the first 4 bytes of the Keccak-256 hash of the
/// signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = Keccak256::digest(signature.as_bytes());
    let mut sel = [0u8; 4];
    sel.copy_from_slice(&hash[..4]);
    sel
}

/// A contract method as an immutable value object: a canonical signature
/// plus its argument values, from which the call payload is derived.
pub trait ContractMethod {
    /// Canonical signature, e.g. `"balanceOf(address)"`.
    fn signature(&self) -> &'static str;

    /// Argument values in declaration order.
    fn arguments(&self) -> Vec<AbiValue>;

    /// Encodes the full call payload: selector followed by one 32-byte word
    /// per argument.
    fn encoded_abi(&self) -> Vec<u8> {
        encode_method_call(selector(self.signature()), &self.arguments())
    }
}
