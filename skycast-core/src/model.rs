use serde::{Deserialize, Serialize};

/// Current conditions for the searched location, with every temperature
/// carried in both units so rendering never needs to convert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub temp_f: f64,
    pub temp_c: f64,
    pub condition: String,
    pub high_f: f64,
    pub high_c: f64,
    pub low_f: f64,
    pub low_c: f64,
    pub humidity: u8,
    pub wind_mph: f64,
    pub precipitation: f64,
    pub icon: String,
    pub is_day: bool,
}

/// One day of the 10-day outlook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Short weekday label, e.g. "Mon".
    pub day: String,
    /// Short month/day label, e.g. "Jan 5".
    pub date: String,
    pub high_f: f64,
    pub high_c: f64,
    pub low_f: f64,
    pub low_c: f64,
    pub condition: String,
    /// Chance of rain, 0–100.
    pub precip_chance: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResult {
    pub current: CurrentConditions,
    /// Chronological, today first.
    pub forecast: Vec<ForecastDay>,
}

/// One autocomplete candidate for a partially typed location query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationSuggestion {
    /// Display string, e.g. "London, City of London, United Kingdom".
    pub label: String,
    pub name: String,
    /// Query to submit when picked: the provider's canonical locator,
    /// or a "lat,lon" fallback.
    pub value: String,
}
