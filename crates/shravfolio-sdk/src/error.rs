//! SDK error types.
//!
//! [`SdkError`] is the single error type returned by every fallible
//! operation in the SDK. Callers on the portfolio's load path usually log it
//! and fall back to the next data source rather than surface it.

/// Error type for all SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// Transport failure (connection refused, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote API answered with a non-success status.
    #[error("API returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// JSON serialization / deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No API key is configured for the generative-AI backend.
    #[error("generative-AI API key is not configured")]
    MissingCredential,

    /// The generative-AI backend answered without any text.
    #[error("no response from model")]
    EmptyResponse,
}

impl SdkError {
    /// Build a [`SdkError::Status`] from a failed response, consuming its body.
    pub(crate) async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();
        SdkError::Status { status, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        let err = SdkError::Status {
            status: 403,
            body: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API returned 403: rate limited");
    }

    #[test]
    fn serialization_from_serde() {
        let parse: Result<u32, _> = serde_json::from_str("nope");
        let err: SdkError = parse.unwrap_err().into();
        assert!(matches!(err, SdkError::Serialization(_)));
    }
}
