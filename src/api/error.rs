use thiserror::Error;

/// Failure of a single page fetch.
///
/// Payloads are flattened to strings so the error can be cloned into UI messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("api error: {0}")]
    Api(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if err.is_builder() {
            FetchError::InvalidRequest(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = FetchError::Status {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "server responded with status 429: rate limited"
        );

        let err = FetchError::Api("Invalid API key".to_string());
        assert_eq!(err.to_string(), "api error: Invalid API key");
    }

    #[test]
    fn test_from_serde_error_is_decode() {
        let err = serde_json::from_str::<crate::schemas::ApiResponse>("not json").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}
