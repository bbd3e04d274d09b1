use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate};
use rand::{Rng, SeedableRng, rngs::StdRng, thread_rng};

use crate::{
    error::Result,
    model::{CurrentConditions, ForecastDay, ForecastResult},
    provider::SourceId,
    units::fahrenheit_to_celsius,
};

use super::WeatherSource;

const CONDITIONS: &[&str] = &["Sun", "Cloudy", "Rain", "Partly Cloudy"];

/// Synthetic forecast source used when no credential is configured.
///
/// Output has exactly the shape of the live mapping (same fields, ten
/// days, today first) so rendering never needs to know which source
/// produced the data.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    seed: Option<u64>,
}

impl MockSource {
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Deterministic output: the same seed always yields the same forecast.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

#[async_trait]
impl WeatherSource for MockSource {
    fn id(&self) -> SourceId {
        SourceId::Mock
    }

    async fn forecast(&self, query: &str) -> Result<ForecastResult> {
        let today = Local::now().date_naive();

        let result = match self.seed {
            Some(seed) => generate(&mut StdRng::seed_from_u64(seed), query, today),
            None => generate(&mut thread_rng(), query, today),
        };

        Ok(result)
    }
}

/// Build the synthetic forecast: current conditions fixed at 72 °F and
/// "Partly Cloudy", ten days of bounded random highs/lows starting at
/// `today`. Both temperature units derive from the same roll.
pub fn generate(rng: &mut impl Rng, query: &str, today: NaiveDate) -> ForecastResult {
    let temp_f = 72.0;
    let high_f = 78.0;
    let low_f = 65.0;

    let current = CurrentConditions {
        city: query.to_string(),
        lat: 51.5074,
        lon: -0.1278,
        temp_f,
        temp_c: fahrenheit_to_celsius(temp_f),
        condition: "Partly Cloudy".to_string(),
        high_f,
        high_c: fahrenheit_to_celsius(high_f),
        low_f,
        low_c: fahrenheit_to_celsius(low_f),
        humidity: 45,
        wind_mph: 10.0,
        precipitation: 5.0,
        icon: "cloudy".to_string(),
        is_day: true,
    };

    let forecast = (0..10i64)
        .map(|i| {
            let date = today + Duration::days(i);
            let high_f: f64 = rng.gen_range(70.0..80.0);
            let low_f: f64 = rng.gen_range(60.0..65.0);

            ForecastDay {
                day: date.format("%a").to_string(),
                date: date.format("%b %-d").to_string(),
                high_f,
                high_c: fahrenheit_to_celsius(high_f),
                low_f,
                low_c: fahrenheit_to_celsius(low_f),
                condition: CONDITIONS[rng.gen_range(0..CONDITIONS.len())].to_string(),
                precip_chance: rng.gen_range(0..100),
            }
        })
        .collect();

    ForecastResult { current, forecast }
}
