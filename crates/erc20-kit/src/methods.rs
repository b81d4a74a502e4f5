//! Immutable value objects for the standard ERC20 method calls.
//!
//! Each method knows its canonical signature and argument list; the payload
//! layout comes from [`ContractMethod::encoded_abi`].

use alloy_primitives::U256;
use eth_abi::{AbiValue, Address, ContractMethod};

/// `balanceOf(address)`: selector `0x70a08231`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceOfMethod {
    owner: Address,
}

impl BalanceOfMethod {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }
}

impl ContractMethod for BalanceOfMethod {
    fn signature(&self) -> &'static str {
        "balanceOf(address)"
    }

    fn arguments(&self) -> Vec<AbiValue> {
        vec![AbiValue::Address(self.owner)]
    }
}

/// `allowance(address,address)`: selector `0xdd62ed3e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllowanceMethod {
    owner: Address,
    spender: Address,
}

impl AllowanceMethod {
    pub fn new(owner: Address, spender: Address) -> Self {
        Self { owner, spender }
    }
}

impl ContractMethod for AllowanceMethod {
    fn signature(&self) -> &'static str {
        "allowance(address,address)"
    }

    fn arguments(&self) -> Vec<AbiValue> {
        vec![
            AbiValue::Address(self.owner),
            AbiValue::Address(self.spender),
        ]
    }
}

/// `totalSupply()`: selector `0x18160ddd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalSupplyMethod;

impl ContractMethod for TotalSupplyMethod {
    fn signature(&self) -> &'static str {
        "totalSupply()"
    }

    fn arguments(&self) -> Vec<AbiValue> {
        Vec::new()
    }
}

/// `transfer(address,uint256)`: selector `0xa9059cbb`.
///
/// Calldata builder only; signing and submission belong to the wallet layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferMethod {
    to: Address,
    value: U256,
}

impl TransferMethod {
    pub fn new(to: Address, value: U256) -> Self {
        Self { to, value }
    }
}

impl ContractMethod for TransferMethod {
    fn signature(&self) -> &'static str {
        "transfer(address,uint256)"
    }

    fn arguments(&self) -> Vec<AbiValue> {
        vec![AbiValue::Address(self.to), AbiValue::Uint256(self.value)]
    }
}

/// `approve(address,uint256)`: selector `0x095ea7b3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApproveMethod {
    spender: Address,
    value: U256,
}

impl ApproveMethod {
    pub fn new(spender: Address, value: U256) -> Self {
        Self { spender, value }
    }
}

impl ContractMethod for ApproveMethod {
    fn signature(&self) -> &'static str {
        "approve(address,uint256)"
    }

    fn arguments(&self) -> Vec<AbiValue> {
        vec![AbiValue::Address(self.spender), AbiValue::Uint256(self.value)]
    }
}
