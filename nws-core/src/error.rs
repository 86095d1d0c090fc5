use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = NwsError> = std::result::Result<T, E>;

/// Every way a call against the API can fail.
///
/// Errors are terminal for the call that produced them; nothing in this
/// crate retries.
#[derive(Debug, Error)]
pub enum NwsError {
    /// DNS, connect, TLS, timeout or body-read failure.
    #[error("Network error: {0}")]
    Network(#[source] BoxError),

    #[error("Invalid response from server")]
    InvalidResponse,

    /// The body arrived but does not match the requested type.
    #[error("Error decoding response: {0}")]
    Decoding(#[source] serde_json::Error),

    #[error("API rate limit exceeded. Please try again later.")]
    RateLimitExceeded,

    #[error("{}", describe_server_error(.status, .message))]
    Server { status: u16, message: Option<String> },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unauthorized request")]
    Unauthorized,

    #[error("Resource not found")]
    NotFound,

    #[error("{}", describe_unknown(.0))]
    Unknown(Option<BoxError>),
}

fn describe_server_error(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => format!("Server error ({status}): {message}"),
        None => format!("Server error ({status})"),
    }
}

fn describe_unknown(cause: &Option<BoxError>) -> String {
    match cause {
        Some(cause) => format!("Unknown error: {cause}"),
        None => "Unknown error occurred".to_string(),
    }
}
