//! ERC20 token data access for wallet software.
//!
//! This crate provides:
//! - Immutable method value objects for the standard ERC20 calls
//!   (`balanceOf`, `allowance`, `totalSupply`, `transfer`, `approve`)
//! - The [`ContractCaller`] capability trait for injected read-only
//!   contract execution
//! - [`DataProvider`], which encodes a method call, submits it through the
//!   caller, and decodes the uint256 response
//!
//! Transport, signing, and gas policy live behind [`ContractCaller`]; this
//! crate only builds payloads and interprets responses.

pub mod error;
pub mod methods;
pub mod provider;

pub use error::{CallerError, TokenError};
pub use methods::{
    AllowanceMethod, ApproveMethod, BalanceOfMethod, TotalSupplyMethod, TransferMethod,
};
pub use provider::{ContractCaller, DataProvider};
