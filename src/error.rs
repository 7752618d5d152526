use thiserror::Error;

/// Error types for the PSN account id flow
#[derive(Error, Debug)]
pub enum PsnAuthError {
    #[error("Malformed redirect URL: {0}")]
    MalformedInput(String),

    #[error("The redirect URL does not contain an authorization code")]
    MissingAuthorizationCode,

    #[error("Failed to create HTTP client: {0}")]
    ClientCreation(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected response: HTTP {status}: {body}")]
    UnexpectedResponse { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid user id: {0}")]
    InvalidUserId(String),

    #[error("Failed to write to clipboard: {0}")]
    ClipboardWriteFailed(String),

    #[error("Failed to open browser: {0}")]
    BrowserLaunch(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PsnAuthError {
    /// Whether the run must stop on this error.
    ///
    /// Clipboard and browser failures only degrade delivery; the user can still
    /// copy the printed value or open the printed URL by hand.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            PsnAuthError::ClipboardWriteFailed(_) | PsnAuthError::BrowserLaunch(_)
        )
    }
}

/// Build an `UnexpectedResponse` with a hint for the statuses users actually hit
pub(crate) fn http_error(status: u16, body: &str) -> PsnAuthError {
    let hint = match status {
        400 => Some(
            "The authorization code may be invalid, expired, or already used. Please log in again.",
        ),
        401 => Some("The client credentials were rejected."),
        404 => Some("The access token was not found. It may have expired."),
        500..=599 => Some("Server error on the PlayStation Network side. Please try again later."),
        _ => None,
    };

    let body = match hint {
        Some(hint) => format!("{}\nHint: {}", body, hint),
        None => body.to_string(),
    };

    PsnAuthError::UnexpectedResponse { status, body }
}

/// Result type alias for PSN account id operations
pub type Result<T> = std::result::Result<T, PsnAuthError>;
