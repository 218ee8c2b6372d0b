use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Network(String),
    Status(u16, String),
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status(code, body) => write!(f, "API returned {code}: {body}"),
            ApiError::Decode(msg) => write!(f, "JSON decode error: {msg}"),
        }
    }
}

impl Error for ApiError {}
