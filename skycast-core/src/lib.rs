//! Core library for the `skycast` weather dashboard.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The forecast normalizer (live WeatherAPI.com source + mock source)
//! - Location autocomplete
//! - Shared display models and derived presentation (units, theme, map)
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod map;
pub mod model;
pub mod provider;
pub mod search;
pub mod theme;
pub mod units;

pub use config::Config;
pub use error::WeatherError;
pub use model::{CurrentConditions, ForecastDay, ForecastResult, LocationSuggestion};
pub use provider::{SourceId, WeatherSource, source_from_config};
pub use search::LocationResolver;
pub use units::Unit;

#[cfg(test)]
mod tests {
    use super::*;

    // End-to-end over the mock path: config with no credential must
    // produce a full dual-unit forecast without touching the network.
    #[tokio::test]
    async fn credential_free_forecast_is_complete() {
        let config = Config::default();
        let source = source_from_config(&config);

        let result = source.forecast("London").await.expect("mock path never fails");

        assert_eq!(result.forecast.len(), 10);
        for day in &result.forecast {
            let derived = units::fahrenheit_to_celsius(day.high_f);
            assert!((day.high_c - derived).abs() < 1e-9);
        }
    }
}
