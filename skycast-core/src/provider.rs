use crate::{
    Config,
    error::Result,
    model::ForecastResult,
    provider::{mock::MockSource, weatherapi::WeatherApiSource},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod mock;
pub mod weatherapi;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceId {
    WeatherApi,
    Mock,
}

impl SourceId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::WeatherApi => "weatherapi",
            SourceId::Mock => "mock",
        }
    }

    pub const fn all() -> &'static [SourceId] {
        &[SourceId::WeatherApi, SourceId::Mock]
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source of normalized forecasts. Implementations are single-shot and
/// stateless: one invocation issues at most one outbound call, and there
/// are no retries and no caching.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    fn id(&self) -> SourceId;

    /// Fetch current conditions plus the 10-day outlook for a free-form
    /// query (place name, postal code, or "lat,lon").
    async fn forecast(&self, query: &str) -> Result<ForecastResult>;
}

/// Construct the source the config calls for: the live WeatherAPI.com
/// client when a credential is present, synthetic data otherwise.
pub fn source_from_config(config: &Config) -> Box<dyn WeatherSource> {
    match config.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
        Some(key) => {
            tracing::debug!("using live weatherapi source");
            Box::new(WeatherApiSource::new(key.to_owned()))
        }
        None => {
            tracing::debug!("no credential configured, using mock source");
            Box::new(MockSource::new())
        }
    }
}
