use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{Result, WeatherError},
    model::{CurrentConditions, ForecastDay, ForecastResult},
    provider::SourceId,
};

use super::WeatherSource;

const BASE_URL: &str = "https://api.weatherapi.com/v1";
const FORECAST_DAYS: &str = "10";

#[derive(Debug, Clone)]
pub struct WeatherApiSource {
    api_key: String,
    http: Client,
}

impl WeatherApiSource {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }
}

#[async_trait]
impl WeatherSource for WeatherApiSource {
    fn id(&self) -> SourceId {
        SourceId::WeatherApi
    }

    async fn forecast(&self, query: &str) -> Result<ForecastResult> {
        let url = format!("{BASE_URL}/forecast.json");

        let res = self
            .http
            .get(url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query),
                ("days", FORECAST_DAYS),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        // WeatherAPI reports "location not found" and credential problems
        // as an error envelope, usually with a non-2xx status.
        if let Some(message) = upstream_error(&body) {
            return Err(WeatherError::Upstream(message));
        }

        if !status.is_success() {
            return Err(WeatherError::Upstream(format!(
                "forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: WaForecastResponse = serde_json::from_str(&body)?;
        map_forecast(parsed)
    }
}

/// Extract the provider's error message, if the body is an error envelope.
fn upstream_error(body: &str) -> Option<String> {
    serde_json::from_str::<WaErrorEnvelope>(body)
        .ok()
        .map(|e| e.error.message)
}

fn map_forecast(raw: WaForecastResponse) -> Result<ForecastResult> {
    let today = raw.forecast.forecastday.first().ok_or_else(|| {
        WeatherError::Upstream("forecast response contained no forecast days".to_string())
    })?;

    let current = CurrentConditions {
        city: city_label(&raw.location),
        lat: raw.location.lat,
        lon: raw.location.lon,
        temp_f: raw.current.temp_f,
        temp_c: raw.current.temp_c,
        condition: raw.current.condition.text.clone(),
        high_f: today.day.maxtemp_f,
        high_c: today.day.maxtemp_c,
        low_f: today.day.mintemp_f,
        low_c: today.day.mintemp_c,
        humidity: raw.current.humidity,
        wind_mph: raw.current.wind_mph,
        precipitation: raw.current.precip_in,
        icon: raw.current.condition.text,
        is_day: raw.current.is_day != 0,
    };

    let forecast = raw
        .forecast
        .forecastday
        .into_iter()
        .map(|fd| ForecastDay {
            day: fd.date.format("%a").to_string(),
            date: fd.date.format("%b %-d").to_string(),
            high_f: fd.day.maxtemp_f,
            high_c: fd.day.maxtemp_c,
            low_f: fd.day.mintemp_f,
            low_c: fd.day.mintemp_c,
            condition: fd.day.condition.text,
            precip_chance: fd.day.daily_chance_of_rain,
        })
        .collect();

    Ok(ForecastResult { current, forecast })
}

/// "Name, Region"; WeatherAPI returns an empty region for many
/// non-US locations, which would render as "Name, ".
fn city_label(location: &WaLocation) -> String {
    match location.region.as_deref() {
        Some(region) if !region.is_empty() => format!("{}, {}", location.name, region),
        _ => location.name.clone(),
    }
}

#[derive(Debug, Deserialize)]
struct WaError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct WaErrorEnvelope {
    error: WaError,
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    region: Option<String>,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_f: f64,
    temp_c: f64,
    is_day: u8,
    condition: WaCondition,
    humidity: u8,
    wind_mph: f64,
    precip_in: f64,
}

#[derive(Debug, Deserialize)]
struct WaDay {
    maxtemp_f: f64,
    maxtemp_c: f64,
    mintemp_f: f64,
    mintemp_c: f64,
    daily_chance_of_rain: u8,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: NaiveDate,
    day: WaDay,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    current: WaCurrent,
    forecast: WaForecast,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "location": {
            "name": "Paris",
            "region": "Ile-de-France",
            "lat": 48.87,
            "lon": 2.33
        },
        "current": {
            "temp_f": 55.4,
            "temp_c": 13.0,
            "is_day": 1,
            "condition": { "text": "Light rain" },
            "humidity": 87,
            "wind_mph": 8.1,
            "precip_in": 0.02
        },
        "forecast": {
            "forecastday": [
                {
                    "date": "2024-03-01",
                    "day": {
                        "maxtemp_f": 57.9,
                        "maxtemp_c": 14.4,
                        "mintemp_f": 46.2,
                        "mintemp_c": 7.9,
                        "daily_chance_of_rain": 89,
                        "condition": { "text": "Moderate rain" }
                    }
                },
                {
                    "date": "2024-03-02",
                    "day": {
                        "maxtemp_f": 59.0,
                        "maxtemp_c": 15.0,
                        "mintemp_f": 44.6,
                        "mintemp_c": 7.0,
                        "daily_chance_of_rain": 20,
                        "condition": { "text": "Sunny" }
                    }
                }
            ]
        }
    }"#;

    #[test]
    fn maps_forecast_fixture() {
        let raw: WaForecastResponse = serde_json::from_str(FIXTURE).expect("fixture parses");
        let result = map_forecast(raw).expect("fixture maps");

        assert_eq!(result.current.city, "Paris, Ile-de-France");
        assert_eq!(result.current.temp_f, 55.4);
        assert_eq!(result.current.temp_c, 13.0);
        assert_eq!(result.current.condition, "Light rain");
        assert_eq!(result.current.icon, "Light rain");
        assert!(result.current.is_day);
        // Current high/low come from today's entry.
        assert_eq!(result.current.high_f, 57.9);
        assert_eq!(result.current.low_c, 7.9);

        assert_eq!(result.forecast.len(), 2);
        let first = &result.forecast[0];
        assert_eq!(first.day, "Fri");
        assert_eq!(first.date, "Mar 1");
        assert_eq!(first.precip_chance, 89);
        assert_eq!(result.forecast[1].condition, "Sunny");
    }

    #[test]
    fn error_envelope_is_detected() {
        let body = r#"{"error":{"code":1006,"message":"No matching location found."}}"#;
        assert_eq!(
            upstream_error(body).as_deref(),
            Some("No matching location found.")
        );
    }

    #[test]
    fn success_body_is_not_an_error() {
        assert!(upstream_error(FIXTURE).is_none());
    }

    #[test]
    fn empty_forecastday_is_upstream_error() {
        let body = r#"{
            "location": { "name": "Paris", "region": "Ile-de-France", "lat": 48.87, "lon": 2.33 },
            "current": {
                "temp_f": 55.4, "temp_c": 13.0, "is_day": 1,
                "condition": { "text": "Light rain" },
                "humidity": 87, "wind_mph": 8.1, "precip_in": 0.02
            },
            "forecast": { "forecastday": [] }
        }"#;

        let raw: WaForecastResponse = serde_json::from_str(body).expect("body parses");
        let err = map_forecast(raw).unwrap_err();
        assert!(matches!(err, WeatherError::Upstream(_)));
    }

    #[test]
    fn city_label_skips_empty_region() {
        let location = WaLocation {
            name: "London".to_string(),
            region: Some(String::new()),
            lat: 51.5,
            lon: -0.1,
        };
        assert_eq!(city_label(&location), "London");

        let location = WaLocation {
            name: "Austin".to_string(),
            region: Some("Texas".to_string()),
            lat: 30.3,
            lon: -97.7,
        };
        assert_eq!(city_label(&location), "Austin, Texas");
    }

    #[test]
    fn truncates_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert!(truncated.len() < long.len());
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }
}
