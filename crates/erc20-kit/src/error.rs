use eth_abi::AbiError;
use thiserror::Error;

/// Error produced by an injected [`ContractCaller`](crate::ContractCaller).
///
/// Opaque to this crate: network failures, node rejections, and reverts all
/// arrive through this type and are forwarded unchanged.
pub type CallerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Token read errors.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The underlying contract call failed; the source error is passed
    /// through uninterpreted.
    #[error("contract call failed: {0}")]
    CallFailed(#[source] CallerError),

    /// The call response could not be parsed as a 32-byte big-endian
    /// unsigned integer.
    #[error("invalid response: {0}")]
    InvalidHex(#[from] AbiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_call_failed() {
        let err = TokenError::CallFailed("node unavailable".into());
        assert_eq!(err.to_string(), "contract call failed: node unavailable");
    }

    #[test]
    fn display_invalid_hex() {
        let err = TokenError::from(AbiError::InvalidHex("too short".into()));
        assert_eq!(err.to_string(), "invalid response: invalid hex response: too short");
    }

    #[test]
    fn call_failed_preserves_source() {
        let err = TokenError::CallFailed("execution reverted".into());
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "execution reverted");
    }
}
