// API error taxonomy module
// Every invalid request condition detected during validation maps to one
// variant, an HTTP status code and a user-facing message

use hyper::StatusCode;
use std::fmt;

/// Validation failure for an `/analyze` request
///
/// All variants are detected synchronously before the analyzer runs; none
/// is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A required query parameter is absent
    MissingParameter(&'static str),
    /// The `type` parameter does not name an analysis mode
    InvalidModeValue { value: String },
    /// The `text` parameter is longer than the configured maximum
    PayloadTooLarge { max_length: usize },
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) | Self::InvalidModeValue { .. } => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameter(name) => write!(f, "{name} parameter is missing."),
            Self::InvalidModeValue { value } => write!(
                f,
                "Parameter 'type' has an invalid value: '{value}'. Expected type: AnalysisMode"
            ),
            Self::PayloadTooLarge { max_length } => write!(
                f,
                "Input text exceeds maximum allowed length of {max_length} characters."
            ),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::MissingParameter("type").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidModeValue {
                value: "DIGITS".to_string()
            }
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::PayloadTooLarge { max_length: 250 }.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ApiError::MissingParameter("text").to_string(),
            "text parameter is missing."
        );
        assert_eq!(
            ApiError::InvalidModeValue {
                value: "INVALID".to_string()
            }
            .to_string(),
            "Parameter 'type' has an invalid value: 'INVALID'. Expected type: AnalysisMode"
        );
        assert_eq!(
            ApiError::PayloadTooLarge { max_length: 250 }.to_string(),
            "Input text exceeds maximum allowed length of 250 characters."
        );
    }
}
