use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum JinkaError {
    /// Building the HTTP client itself failed.
    Client(String),
    /// Transport failure, non-2xx, or malformed body during login.
    Auth(String),
    /// Transport failure, non-2xx, or malformed body fetching the alert.
    Fetch(String),
}

impl fmt::Display for JinkaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JinkaError::Client(msg) => write!(f, "HTTP client error: {msg}"),
            JinkaError::Auth(msg) => write!(f, "Jinka login failed: {msg}"),
            JinkaError::Fetch(msg) => write!(f, "Jinka fetch failed: {msg}"),
        }
    }
}

impl Error for JinkaError {}
