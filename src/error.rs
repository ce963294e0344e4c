use thiserror::Error;

/// Errors returned by client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network identifier is not one of the supported deployment stages.
    #[error("unknown network '{0}', expected one of: mainnet-stage, preprod-stage, preview-stage")]
    UnknownNetwork(String),

    /// No configuration has been applied yet.
    #[error("client not configured; pass a network to CexplorerClient::new or configure()")]
    Uninitialized,

    /// The merged configuration has no network set.
    #[error("missing required \"network\" in configuration")]
    MissingNetwork,

    /// API key is empty or not usable as a request header.
    #[error("invalid API key: must be a non-empty string")]
    InvalidApiKey,

    /// Endpoint path could not be combined with the network base URL.
    #[error("invalid endpoint path '{0}'")]
    InvalidPath(String),

    /// A single attempt did not settle within its timeout window.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Timeout window that elapsed, in milliseconds.
        timeout_ms: u64,
    },

    /// HTTP transport-layer request failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be parsed as JSON.
    #[error("failed to parse JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The attempt loop finished without settling.
    ///
    /// Unreachable when the loop is implemented correctly; every attempt
    /// either returns an envelope or surfaces its error on the last pass.
    #[error("request failed after exhausting retries")]
    RetriesExhausted,

    /// A failure that does not map onto any other variant.
    ///
    /// Exists so external [`Transport`](crate::Transport) implementations
    /// can surface foreign error types in a uniform shape.
    #[error("unknown fetch error: {0}")]
    Unknown(String),
}
