// errors.rs
use crate::loader::LoadError;
use std::fmt;

/// Errors surfaced by request handling.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<LoadError> for ServerError {
    fn from(err: LoadError) -> Self {
        ServerError::BadRequest(format!("Error parsing CSV: {err}"))
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<astra::Response, ServerError>;
