use thiserror::Error;

/// Failure modes of a forecast or location lookup.
///
/// `Upstream` carries the provider's own error message (e.g. "No matching
/// location found.") and is always surfaced by the forecast path so the
/// caller can show it. `Decode` means the provider answered successfully
/// but the payload did not match the expected schema.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather provider error: {0}")]
    Upstream(String),

    #[error("request to weather provider failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode weather provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WeatherError>;
