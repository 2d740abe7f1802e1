use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API key not set, call set_api_key first")]
    CredentialMissing,

    #[error("API error: {status} {reason}")]
    RemoteError { status: u16, reason: String },

    #[error("Invalid nickname: {0:?}")]
    InvalidNickname(String),

    #[error("JSON parsing error: {0}")]
    DecodeError(String),

    #[error("HTTP error: {0}")]
    TransportError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::DecodeError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_mentions_status_and_reason() {
        let err = AppError::RemoteError {
            status: 404,
            reason: "Not Found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Not Found"));
    }

    #[test]
    fn missing_credential_tells_caller_what_to_do() {
        assert!(AppError::CredentialMissing.to_string().contains("set_api_key"));
    }
}
