use thiserror::Error;

/// Reasons a single classification request did not produce a payload.
///
/// Every variant is terminal for the attempt that produced it; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("request timed out after {0}s")]
    Timeout(u64),
}

/// Failures surfaced inline by the submission view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Please upload an image first.")]
    NoFileSelected,
    #[error("Image exceeds the upload limit of {limit} bytes.")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("Error during detection: {0}")]
    Request(#[from] RequestFailure),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("invalid JSON body: {0}")]
    Json(String),
    #[error("missing field `{0}`")]
    MissingField(&'static str),
}

impl From<PayloadError> for RequestFailure {
    fn from(err: PayloadError) -> Self {
        RequestFailure::Malformed(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid endpoint URL `{value}`: {reason}")]
    InvalidEndpoint { value: String, reason: String },
    #[error("endpoint must use http or https, got `{0}`")]
    UnsupportedScheme(String),
    #[error("invalid number for {name}: `{value}`")]
    InvalidNumber { name: &'static str, value: String },
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
    #[error("timeout of {secs}s exceeds the maximum of {max}s")]
    TimeoutTooLarge { secs: u64, max: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_inline_text() {
        assert_eq!(SubmitError::NoFileSelected.to_string(), "Please upload an image first.");

        let err = SubmitError::from(RequestFailure::Network("connection refused".into()));
        assert_eq!(err.to_string(), "Error during detection: network error: connection refused");
    }

    #[test]
    fn payload_errors_become_malformed_failures() {
        let failure = RequestFailure::from(PayloadError::MissingField("gemini_result"));
        assert_eq!(failure, RequestFailure::Malformed("missing field `gemini_result`".into()));
    }
}
