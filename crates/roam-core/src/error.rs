//! Error types for Roam client operations.
//!
//! Every call either returns the service's answer or one of three failures:
//! the request could not be built, the transport failed, or the response body
//! could not be decoded. None of them is retried by the library.

use thiserror::Error;

/// Result type alias for Roam operations.
pub type RoamResult<T> = Result<T, RoamError>;

/// Main error type for all Roam operations.
#[derive(Error, Debug)]
pub enum RoamError {
    /// The request could not be constructed (bad URL or header value).
    #[error("Request error: {message}")]
    Request { message: String, code: ErrorCode },

    /// The HTTP round trip failed (connect, DNS, TLS, timeout).
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        code: ErrorCode,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The response body did not match the expected JSON shape.
    #[error("Decode error: {message}")]
    Decode {
        message: String,
        code: ErrorCode,
        /// HTTP status of the response, when one was received.
        status: Option<u16>,
        #[source]
        source: Option<serde_json::Error>,
    },
}

/// Error codes for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Request (REQ_xxx)
    ReqInvalidUrl,
    ReqInvalidHeader,

    // Network (NET_xxx)
    NetTimeout,
    NetConnectionFailed,

    // Decode (DEC_xxx)
    DecInvalidJson,
    DecInvalidTimestamp,
}

impl ErrorCode {
    /// Get the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ReqInvalidUrl => "REQ_001",
            ErrorCode::ReqInvalidHeader => "REQ_002",
            ErrorCode::NetTimeout => "NET_001",
            ErrorCode::NetConnectionFailed => "NET_002",
            ErrorCode::DecInvalidJson => "DEC_001",
            ErrorCode::DecInvalidTimestamp => "DEC_002",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RoamError {
    /// Create a request error for a URL that failed to build.
    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
            code: ErrorCode::ReqInvalidUrl,
        }
    }

    /// Create a request error for a header value that cannot be sent.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::Request {
            message: message.into(),
            code: ErrorCode::ReqInvalidHeader,
        }
    }

    /// Create a transport error without an underlying source.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            code: ErrorCode::NetConnectionFailed,
            source: None,
        }
    }

    /// Create a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            code: ErrorCode::NetTimeout,
            source: None,
        }
    }

    /// Create a decode error from a JSON failure.
    pub fn decode(err: serde_json::Error, status: Option<u16>) -> Self {
        let message = match status {
            Some(status) => format!("HTTP {}: {}", status, err),
            None => err.to_string(),
        };
        Self::Decode {
            message,
            code: ErrorCode::DecInvalidJson,
            status,
            source: Some(err),
        }
    }

    /// Create a decode error for a malformed notification timestamp.
    pub fn invalid_timestamp(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            code: ErrorCode::DecInvalidTimestamp,
            status: None,
            source: None,
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Request { code, .. } => *code,
            Self::Transport { code, .. } => *code,
            Self::Decode { code, .. } => *code,
        }
    }

    /// Whether the transport gave up waiting for a response.
    pub fn is_timeout(&self) -> bool {
        self.code() == ErrorCode::NetTimeout
    }

    /// Whether the response body failed to decode.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

impl From<url::ParseError> for RoamError {
    fn from(err: url::ParseError) -> Self {
        Self::invalid_url(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for RoamError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Self::invalid_header(err.to_string())
    }
}
