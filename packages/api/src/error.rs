/// Failure of a remote statistics fetch.
///
/// The views never show these details: every variant is rendered as the same
/// generic error state. The variants exist so the failure can be logged.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
