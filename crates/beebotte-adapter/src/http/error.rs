/*
[INPUT]:  Error sources (HTTP transport, Beebotte API error bodies, serialization, arguments)
[OUTPUT]: Structured error types carrying status, application code and message
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or new Beebotte error codes
*/

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Classification of an error response returned by the Beebotte API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    Authentication,
    Parameter,
    BadRequest,
    Type,
    BadType,
    PayloadLimit,
    NotAllowed,
    Internal,
    NotFound,
    AlreadyExist,
    Unexpected,
}

impl ApiErrorKind {
    /// Map an HTTP status and application error code to an error kind.
    ///
    /// Only meaningful for statuses >= 400.
    pub fn classify(status: u16, code: Option<i64>) -> Self {
        match (status, code) {
            (400, Some(1101)) => ApiErrorKind::Authentication,
            (400, Some(1401)) => ApiErrorKind::Parameter,
            (400, Some(1403)) => ApiErrorKind::BadRequest,
            (400, Some(1404)) => ApiErrorKind::Type,
            (400, Some(1405)) => ApiErrorKind::BadType,
            (400, Some(1406)) => ApiErrorKind::PayloadLimit,
            (405, Some(1102)) => ApiErrorKind::NotAllowed,
            (500, _) => ApiErrorKind::Internal,
            (404, Some(1301..=1303)) => ApiErrorKind::NotFound,
            (404, Some(1304..=1306)) => ApiErrorKind::AlreadyExist,
            _ => ApiErrorKind::Unexpected,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiErrorKind::Authentication => "authentication error",
            ApiErrorKind::Parameter => "parameter error",
            ApiErrorKind::BadRequest => "bad request",
            ApiErrorKind::Type => "type error",
            ApiErrorKind::BadType => "bad type",
            ApiErrorKind::PayloadLimit => "payload limit exceeded",
            ApiErrorKind::NotAllowed => "not allowed",
            ApiErrorKind::Internal => "internal error",
            ApiErrorKind::NotFound => "not found",
            ApiErrorKind::AlreadyExist => "already exists",
            ApiErrorKind::Unexpected => "unexpected error",
        };
        f.write_str(name)
    }
}

/// Error response from the API, with the server message kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: u16,
    pub code: Option<i64>,
    pub message: String,
}

impl ApiError {
    pub fn new(status: u16, code: Option<i64>, message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::classify(status, code),
            status,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {}; Code ", self.status)?;
        match self.code {
            Some(code) => write!(f, "{code}")?,
            None => f.write_str("none")?,
        }
        write!(f, "; Message: {}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Main error type for the Beebotte adapter
#[derive(Error, Debug)]
pub enum BeebotteError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error: {0}")]
    Api(ApiError),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Argument rejected before any request was sent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Resource holds no records
    #[error("No records found in {channel}/{resource}")]
    NoRecords { channel: String, resource: String },
}

impl BeebotteError {
    /// Kind of the API error, if this is one
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        match self {
            BeebotteError::Api(err) => Some(err.kind),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        self.api_kind() == Some(ApiErrorKind::Authentication)
    }

    /// Create an API error from status code, application code and message
    pub fn api_error(status: StatusCode, code: Option<i64>, message: impl Into<String>) -> Self {
        BeebotteError::Api(ApiError::new(status.as_u16(), code, message))
    }
}

/// Result type alias for Beebotte operations
pub type Result<T> = std::result::Result<T, BeebotteError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(400, Some(1101), ApiErrorKind::Authentication)]
    #[case(400, Some(1401), ApiErrorKind::Parameter)]
    #[case(400, Some(1403), ApiErrorKind::BadRequest)]
    #[case(400, Some(1404), ApiErrorKind::Type)]
    #[case(400, Some(1405), ApiErrorKind::BadType)]
    #[case(400, Some(1406), ApiErrorKind::PayloadLimit)]
    #[case(400, Some(1402), ApiErrorKind::Unexpected)]
    #[case(400, Some(1102), ApiErrorKind::Unexpected)]
    #[case(400, None, ApiErrorKind::Unexpected)]
    #[case(405, Some(1102), ApiErrorKind::NotAllowed)]
    #[case(405, Some(1101), ApiErrorKind::Unexpected)]
    #[case(405, None, ApiErrorKind::Unexpected)]
    #[case(500, Some(1201), ApiErrorKind::Internal)]
    #[case(500, Some(9999), ApiErrorKind::Internal)]
    #[case(500, None, ApiErrorKind::Internal)]
    #[case(404, Some(1301), ApiErrorKind::NotFound)]
    #[case(404, Some(1302), ApiErrorKind::NotFound)]
    #[case(404, Some(1303), ApiErrorKind::NotFound)]
    #[case(404, Some(1304), ApiErrorKind::AlreadyExist)]
    #[case(404, Some(1305), ApiErrorKind::AlreadyExist)]
    #[case(404, Some(1306), ApiErrorKind::AlreadyExist)]
    #[case(404, Some(1300), ApiErrorKind::Unexpected)]
    #[case(404, Some(1307), ApiErrorKind::Unexpected)]
    #[case(404, None, ApiErrorKind::Unexpected)]
    #[case(401, Some(1101), ApiErrorKind::Unexpected)]
    #[case(403, Some(1102), ApiErrorKind::Unexpected)]
    #[case(429, None, ApiErrorKind::Unexpected)]
    #[case(502, Some(1201), ApiErrorKind::Unexpected)]
    fn test_classify(#[case] status: u16, #[case] code: Option<i64>, #[case] expected: ApiErrorKind) {
        assert_eq!(ApiErrorKind::classify(status, code), expected);
    }

    #[test]
    fn test_api_error_display_keeps_message() {
        let err = ApiError::new(400, Some(1101), "Authentication failed");
        assert_eq!(err.to_string(), "Status: 400; Code 1101; Message: Authentication failed");

        let err = ApiError::new(502, None, "Bad gateway");
        assert_eq!(err.to_string(), "Status: 502; Code none; Message: Bad gateway");
    }

    #[test]
    fn test_api_error_creation() {
        let err = BeebotteError::api_error(StatusCode::NOT_FOUND, Some(1304), "Channel exists");
        match err {
            BeebotteError::Api(ApiError { kind, status, code, message }) => {
                assert_eq!(kind, ApiErrorKind::AlreadyExist);
                assert_eq!(status, 404);
                assert_eq!(code, Some(1304));
                assert_eq!(message, "Channel exists");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(BeebotteError::api_error(StatusCode::BAD_REQUEST, Some(1101), "bad key").is_auth_error());
        assert!(!BeebotteError::api_error(StatusCode::BAD_REQUEST, Some(1401), "bad param").is_auth_error());
        assert!(!BeebotteError::InvalidArgument("x".to_string()).is_auth_error());
        assert_eq!(BeebotteError::Config("x".to_string()).api_kind(), None);
    }
}
