//! Error types for the portfolio core

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A motion or timing parameter is out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The webview bridge sent something we could not use
    #[error("Bridge error: {0}")]
    Bridge(String),

    /// A bridge payload failed to deserialize
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type alias for portfolio operations
pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_display() {
        let err = PortfolioError::InvalidConfig("stiffness must be positive".into());
        assert_eq!(err.to_string(), "Invalid config: stiffness must be positive");
    }

    #[test]
    fn payload_error_from_serde() {
        let err: PortfolioError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, PortfolioError::Payload(_)));
        assert!(err.to_string().starts_with("Payload error"));
    }
}
