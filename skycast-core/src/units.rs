#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Fahrenheit,
    Celsius,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Fahrenheit => "f",
            Unit::Celsius => "c",
        }
    }

    pub const fn all() -> &'static [Unit] {
        &[Unit::Fahrenheit, Unit::Celsius]
    }

    /// Degree suffix for display, e.g. "°F".
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Fahrenheit => "°F",
            Unit::Celsius => "°C",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Unit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "f" | "fahrenheit" => Ok(Unit::Fahrenheit),
            "c" | "celsius" => Ok(Unit::Celsius),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: f, c."
            )),
        }
    }
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}
