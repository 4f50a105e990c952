use thiserror::Error;

/// Errors surfaced by the remote blog service port.
///
/// Every variant is terminal for the operation that produced it; there is
/// no automatic retry. The `Display` text is what the webview shows, so
/// server-reported messages are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No usable session token, or the server rejected the one we sent.
    #[error("not logged in")]
    Unauthorized,

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status with the server message when present.
    #[error("{message}")]
    Status { code: u16, message: String },

    #[error("malformed response: {0}")]
    Decode(String),
}
