#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum RankingError {
    /// The requested offset is past the end of the ranking. Recovered by
    /// redirecting to the default listing, never shown to the user.
    #[error("requested ranking page does not exist")]
    NotFound,
    /// Payload arrived but did not conform to the expected shape,
    /// including an unparsable tag style sub-document.
    #[error("malformed ranking payload: {0}")]
    MalformedResponse(String),
    /// Network failure or a non-2xx, non-404 status.
    #[error("ranking request failed: {0}")]
    Transport(String),
}
