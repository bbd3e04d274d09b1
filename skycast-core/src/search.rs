use reqwest::Client;
use serde::Deserialize;

use crate::{
    Config,
    error::{Result, WeatherError},
    model::LocationSuggestion,
};

const BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Queries shorter than this return no suggestions and make no request.
const MIN_QUERY_CHARS: usize = 3;

/// Best-effort autocomplete against the provider's search endpoint.
///
/// `suggest` never fails outward: provider errors, transport failures and
/// malformed payloads all degrade to an empty list. A failed lookup only
/// costs the user a suggestion; manual submission still works.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    api_key: Option<String>,
    http: Client,
}

impl LocationResolver {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key, http: Client::new() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_key.clone())
    }

    pub async fn suggest(&self, partial: &str) -> Vec<LocationSuggestion> {
        let partial = partial.trim();
        if partial.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) else {
            tracing::debug!("no credential configured, skipping location search");
            return Vec::new();
        };

        match self.fetch(key, partial).await {
            Ok(suggestions) => suggestions,
            Err(err) => {
                tracing::warn!("location search for {partial:?} failed: {err}");
                Vec::new()
            }
        }
    }

    async fn fetch(&self, key: &str, partial: &str) -> Result<Vec<LocationSuggestion>> {
        let url = format!("{BASE_URL}/search.json");

        let res = self
            .http
            .get(url)
            .query(&[("key", key), ("q", partial)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if let Ok(envelope) = serde_json::from_str::<WaErrorEnvelope>(&body) {
            return Err(WeatherError::Upstream(envelope.error.message));
        }

        if !status.is_success() {
            return Err(WeatherError::Upstream(format!(
                "search request failed with status {status}"
            )));
        }

        let entries: Vec<WaSearchEntry> = serde_json::from_str(&body)?;
        Ok(entries.into_iter().map(to_suggestion).collect())
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
struct WaSearchEntry {
    name: String,
    region: Option<String>,
    country: String,
    url: Option<String>,
    lat: f64,
    lon: f64,
}

fn to_suggestion(entry: WaSearchEntry) -> LocationSuggestion {
    let label = match entry.region.as_deref() {
        Some(region) if !region.is_empty() => {
            format!("{}, {}, {}", entry.name, region, entry.country)
        }
        _ => format!("{}, {}", entry.name, entry.country),
    };

    let value = match entry.url.filter(|u| !u.is_empty()) {
        Some(url) => url,
        None => format!("{},{}", entry.lat, entry.lon),
    };

    LocationSuggestion { label, name: entry.name, value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn short_query_returns_empty_without_calling_out() {
        let resolver = LocationResolver::new(Some("KEY".to_string()));
        // Two characters is below the gate, so no request is ever built.
        assert!(resolver.suggest("a").await.is_empty());
        assert!(resolver.suggest("ab").await.is_empty());
        assert!(resolver.suggest("  ab  ").await.is_empty());
    }

    #[tokio::test]
    async fn missing_credential_returns_empty() {
        let resolver = LocationResolver::new(None);
        assert!(resolver.suggest("London").await.is_empty());
    }

    #[test]
    fn label_skips_missing_region() {
        let entry = WaSearchEntry {
            name: "London".to_string(),
            region: None,
            country: "UK".to_string(),
            url: Some("london-uk".to_string()),
            lat: 51.5,
            lon: -0.1,
        };

        let suggestion = to_suggestion(entry);
        assert_eq!(suggestion.label, "London, UK");
        assert_eq!(suggestion.name, "London");
        assert_eq!(suggestion.value, "london-uk");
    }

    #[test]
    fn label_includes_region_when_present() {
        let entry = WaSearchEntry {
            name: "Portland".to_string(),
            region: Some("Oregon".to_string()),
            country: "United States of America".to_string(),
            url: None,
            lat: 45.52,
            lon: -122.68,
        };

        let suggestion = to_suggestion(entry);
        assert_eq!(suggestion.label, "Portland, Oregon, United States of America");
    }

    #[test]
    fn value_falls_back_to_coordinates() {
        let entry = WaSearchEntry {
            name: "London".to_string(),
            region: None,
            country: "UK".to_string(),
            url: None,
            lat: 51.5,
            lon: -0.1,
        };

        assert_eq!(to_suggestion(entry).value, "51.5,-0.1");
    }

    #[test]
    fn empty_url_counts_as_missing() {
        let entry = WaSearchEntry {
            name: "London".to_string(),
            region: Some(String::new()),
            country: "UK".to_string(),
            url: Some(String::new()),
            lat: 51.5,
            lon: -0.1,
        };

        let suggestion = to_suggestion(entry);
        assert_eq!(suggestion.label, "London, UK");
        assert_eq!(suggestion.value, "51.5,-0.1");
    }

    #[test]
    fn search_payload_decodes_in_provider_order() {
        let body = r#"[
            {"name": "London", "region": "City of London, Greater London",
             "country": "United Kingdom", "url": "london-city-of-london-greater-london-united-kingdom",
             "lat": 51.52, "lon": -0.11},
            {"name": "London", "region": "Ontario", "country": "Canada",
             "url": "london-ontario-canada", "lat": 42.98, "lon": -81.25}
        ]"#;

        let entries: Vec<WaSearchEntry> = serde_json::from_str(body).expect("payload parses");
        let suggestions: Vec<_> = entries.into_iter().map(to_suggestion).collect();

        assert_eq!(suggestions.len(), 2);
        assert_eq!(
            suggestions[0].label,
            "London, City of London, Greater London, United Kingdom"
        );
        assert_eq!(suggestions[1].value, "london-ontario-canada");
    }
}
