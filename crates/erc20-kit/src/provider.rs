use alloy_primitives::U256;
use eth_abi::{decode_uint256, Address, ContractMethod};
use tracing::{debug, trace};

use crate::error::{CallerError, TokenError};
use crate::methods::{AllowanceMethod, BalanceOfMethod, TotalSupplyMethod};

/// A read-only contract execution capability against current chain state.
///
/// Implementations own transport, retry, and timeout policy. Calls are
/// independent and idempotent, so implementations must accept concurrent
/// invocations through a shared reference.
pub trait ContractCaller {
    /// Executes `data` against the contract at `contract_address` without
    /// mutating chain state and returns the raw response bytes.
    fn call(&self, contract_address: &Address, data: &[u8]) -> Result<Vec<u8>, CallerError>;
}

impl<T: ContractCaller + ?Sized> ContractCaller for &T {
    fn call(&self, contract_address: &Address, data: &[u8]) -> Result<Vec<u8>, CallerError> {
        (**self).call(contract_address, data)
    }
}

/// Reads ERC20 token state through an injected [`ContractCaller`].
pub struct DataProvider<C> {
    caller: C,
}

impl<C: ContractCaller> DataProvider<C> {
    pub fn new(caller: C) -> Self {
        Self { caller }
    }

    /// Returns the token balance of `owner`, in the token's smallest unit.
    pub fn get_balance(
        &self,
        contract_address: &Address,
        owner: &Address,
    ) -> Result<U256, TokenError> {
        self.read_uint256(contract_address, &BalanceOfMethod::new(*owner))
    }

    /// Returns the remaining allowance granted by `owner` to `spender`.
    pub fn get_allowance(
        &self,
        contract_address: &Address,
        owner: &Address,
        spender: &Address,
    ) -> Result<U256, TokenError> {
        self.read_uint256(contract_address, &AllowanceMethod::new(*owner, *spender))
    }

    /// Returns the token's total supply.
    pub fn get_total_supply(&self, contract_address: &Address) -> Result<U256, TokenError> {
        self.read_uint256(contract_address, &TotalSupplyMethod)
    }

    /// Encodes `method`, submits it, and decodes the first response word.
    ///
    /// Caller failures pass through uninterpreted; responses shorter than
    /// one word surface as [`TokenError::InvalidHex`].
    fn read_uint256<M: ContractMethod>(
        &self,
        contract_address: &Address,
        method: &M,
    ) -> Result<U256, TokenError> {
        let data = method.encoded_abi();
        debug!(
            contract = %contract_address,
            method = method.signature(),
            "issuing read-only contract call"
        );

        let response = self
            .caller
            .call(contract_address, &data)
            .map_err(TokenError::CallFailed)?;

        let value = decode_uint256(&response)?;
        trace!(%value, response_len = response.len(), "decoded response word");
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticCaller {
        response: Vec<u8>,
    }

    impl ContractCaller for StaticCaller {
        fn call(&self, _contract_address: &Address, _data: &[u8]) -> Result<Vec<u8>, CallerError> {
            Ok(self.response.clone())
        }
    }

    fn addr(last: u8) -> Address {
        let mut bytes = [0u8; 20];
        bytes[19] = last;
        Address::new(bytes)
    }

    #[test]
    fn get_balance_decodes_word() {
        let mut response = vec![0u8; 32];
        response[31] = 0x64;
        let provider = DataProvider::new(StaticCaller { response });

        let balance = provider.get_balance(&addr(0x01), &addr(0x2a)).unwrap();
        assert_eq!(balance, U256::from(100u64));
    }

    #[test]
    fn short_response_is_invalid_hex() {
        let provider = DataProvider::new(StaticCaller {
            response: vec![0u8; 16],
        });

        let result = provider.get_balance(&addr(0x01), &addr(0x2a));
        assert!(matches!(result, Err(TokenError::InvalidHex(_))));
    }

    #[test]
    fn caller_error_passes_through() {
        struct FailingCaller;

        impl ContractCaller for FailingCaller {
            fn call(&self, _c: &Address, _d: &[u8]) -> Result<Vec<u8>, CallerError> {
                Err("execution reverted".into())
            }
        }

        let provider = DataProvider::new(FailingCaller);
        let err = provider.get_balance(&addr(0x01), &addr(0x2a)).unwrap_err();

        match err {
            TokenError::CallFailed(source) => {
                assert_eq!(source.to_string(), "execution reverted");
            }
            other => panic!("expected CallFailed, got {other:?}"),
        }
    }
}
