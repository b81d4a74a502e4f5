use thiserror::Error;

/// ABI encoding and decoding errors.
#[derive(Debug, Error)]
pub enum AbiError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid hex response: {0}")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_address() {
        let err = AbiError::InvalidAddress("missing 0x prefix".into());
        assert_eq!(err.to_string(), "invalid address: missing 0x prefix");
    }

    #[test]
    fn display_invalid_hex() {
        let err = AbiError::InvalidHex("expected at least 32 bytes, got 4".into());
        assert_eq!(
            err.to_string(),
            "invalid hex response: expected at least 32 bytes, got 4"
        );
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> =
            Box::new(AbiError::InvalidAddress("test".into()));
        assert!(err.to_string().contains("test"));
    }
}
