/// Result alias used across the crate.
pub type CardResult<T> = Result<T, CardError>;

/// Every way a card run can fail.
///
/// "No match to display" is not an error; see [`crate::RunOutcome::NoMatch`].
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Missing or invalid configuration (empty API key, bad base URL).
    #[error("config error: {0}")]
    Config(String),

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status code.
    #[error("api error: {url} returned HTTP {status}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Requested URL with the API key redacted.
        url: String,
    },

    /// The API payload did not match the expected schema.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A live match arrived without a usable score entry.
    #[error("missing score: {0}")]
    MissingScore(String),

    /// A required font/background/logo could not be read or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// The finished card could not be written.
    #[error("output error: {0}")]
    Output(String),
}

impl CardError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }

    pub fn missing_score(msg: impl Into<String>) -> Self {
        Self::MissingScore(msg.into())
    }

    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
