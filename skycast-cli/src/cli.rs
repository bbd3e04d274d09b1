use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};
use skycast_core::{
    Config, ForecastResult, LocationResolver, SourceId, Unit,
    map::radar_embed_url,
    source_from_config,
    theme::{ConditionKind, background_gradient},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather dashboard CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com credential.
    Configure,

    /// Show current conditions and the 10-day forecast for a location.
    Show {
        /// Place name, postal code, or "lat,lon".
        query: String,

        /// Temperature unit, "f" or "c".
        #[arg(long, default_value = "f")]
        unit: String,

        /// Also print the radar map embed URL.
        #[arg(long)]
        map: bool,
    },

    /// Search for matching locations and pick one to show.
    Search {
        /// Partial location name (3 characters minimum).
        query: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { query, unit, map } => {
                let unit = Unit::try_from(unit.as_str())?;
                show(&query, unit, map).await
            }
            Command::Search { query } => search(&query).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("WeatherAPI.com API key:").prompt()?;
    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Credential saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(query: &str, unit: Unit, map: bool) -> Result<()> {
    let config = Config::resolve()?;
    let source = source_from_config(&config);

    if source.id() == SourceId::Mock {
        println!("No credential configured; showing sample data. Run `skycast configure` for live forecasts.\n");
    }

    let result = source.forecast(query).await?;
    render_forecast(&result, unit, map);

    Ok(())
}

async fn search(query: &str) -> Result<()> {
    let config = Config::resolve()?;
    let resolver = LocationResolver::from_config(&config);

    let suggestions = resolver.suggest(query).await;
    if suggestions.is_empty() {
        println!("No matching locations.");
        return Ok(());
    }

    // Labels can repeat (the provider may return near-duplicates), so
    // pick by index rather than by label.
    let labels: Vec<String> = suggestions.iter().map(|s| s.label.clone()).collect();
    let choice = Select::new("Pick a location:", labels).raw_prompt()?;
    let picked = &suggestions[choice.index];

    show(&picked.value, Unit::Fahrenheit, false).await
}

fn render_forecast(result: &ForecastResult, unit: Unit, map: bool) {
    let current = &result.current;
    let kind = ConditionKind::classify(&current.condition);
    let gradient = background_gradient(&current.condition, current.is_day);

    let (temp, high, low) = match unit {
        Unit::Fahrenheit => (current.temp_f, current.high_f, current.low_f),
        Unit::Celsius => (current.temp_c, current.high_c, current.low_c),
    };

    println!("{}  {}", kind.glyph(), current.city);
    println!(
        "{}, {:.0}{}  (H: {:.0}°  L: {:.0}°)",
        current.condition,
        temp,
        unit.symbol(),
        high,
        low
    );
    println!(
        "Humidity {}%  Wind {} mph  Precip {}",
        current.humidity, current.wind_mph, current.precipitation
    );
    println!("Backdrop {} to {}", gradient.from, gradient.to);

    println!("\n10-Day Forecast");
    for day in &result.forecast {
        let (high, low) = match unit {
            Unit::Fahrenheit => (day.high_f, day.low_f),
            Unit::Celsius => (day.high_c, day.low_c),
        };

        println!(
            "{:<4} {:<7} {}  {:>3.0}° / {:>3.0}°  rain {:>3}%  {}",
            day.day,
            day.date,
            ConditionKind::classify(&day.condition).glyph(),
            high,
            low,
            day.precip_chance,
            day.condition
        );
    }

    if map {
        println!("\nRadar: {}", radar_embed_url(current.lat, current.lon));
    }
}
