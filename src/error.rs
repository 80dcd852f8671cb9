use thiserror::Error;

/// Failure of one stage of the swap pipeline.
#[derive(Debug, Error)]
pub enum SwapError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("credential error: {0}")]
    Credential(String),

    #[error("invalid swap input: {0}")]
    InvalidInput(String),

    /// The pair could not be located or priced.
    #[error("pair data unavailable: {0}")]
    DataUnavailable(String),

    #[error("network request failed: {0}")]
    Network(String),

    #[error("transaction signing failed: {0}")]
    Signing(String),

    /// Dropped or reverted transactions; reverts only surface through the receipt.
    #[error("transaction submission failed: {0}")]
    Submission(String),
}

impl SwapError {
    pub fn stage(&self) -> &'static str {
        match self {
            SwapError::Config(_) => "config",
            SwapError::Credential(_) => "credential",
            SwapError::InvalidInput(_) => "prepare",
            SwapError::DataUnavailable(_) => "fetch-price",
            SwapError::Network(_) => "network",
            SwapError::Signing(_) => "sign",
            SwapError::Submission(_) => "submit",
        }
    }
}
