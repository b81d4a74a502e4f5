//! Ethereum contract-ABI building blocks.
//!
//! This crate provides:
//! - The 20-byte [`Address`] type with 0x-hex parsing and EIP-55 checksum display
//! - Function-selector derivation from canonical signature strings
//! - 32-byte word encoding of static call arguments
//! - Call-payload assembly (`selector || words`)
//! - Decoding of single uint256 return values

pub mod address;
pub mod codec;
pub mod error;
pub mod method;

pub use address::Address;
pub use codec::{decode_uint256, encode_method_call, AbiValue, WORD_LEN};
pub use error::AbiError;
pub use method::{selector, ContractMethod};
