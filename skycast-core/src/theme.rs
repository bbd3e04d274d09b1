//! Presentation state derived from the condition text: a coarse
//! condition class for icon selection and a background gradient keyed
//! on condition plus daylight.

/// Coarse bucket for a free-form condition string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    Rain,
    Storm,
    Cloudy,
    Windy,
    Clear,
}

impl ConditionKind {
    /// Substring classification; rain wins over storm for mixed
    /// conditions like "thundery rain".
    pub fn classify(condition: &str) -> Self {
        let c = condition.to_lowercase();
        if c.contains("rain") {
            ConditionKind::Rain
        } else if c.contains("storm") || c.contains("lightning") || c.contains("thunder") {
            ConditionKind::Storm
        } else if c.contains("cloud") || c.contains("overcast") {
            ConditionKind::Cloudy
        } else if c.contains("wind") {
            ConditionKind::Windy
        } else {
            ConditionKind::Clear
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ConditionKind::Rain => "🌧",
            ConditionKind::Storm => "⛈",
            ConditionKind::Cloudy => "☁",
            ConditionKind::Windy => "🌬",
            ConditionKind::Clear => "☀",
        }
    }
}

/// Two-stop background gradient, hex RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

/// Pick the background for the current conditions. Night gets the dark
/// palette regardless of condition; day brightens with clear skies.
pub fn background_gradient(condition: &str, is_day: bool) -> Gradient {
    let c = condition.to_lowercase();

    if !is_day {
        return if c.contains("rain") {
            Gradient { from: "#0f172a", to: "#000000" }
        } else if c.contains("cloud") {
            Gradient { from: "#1e293b", to: "#1e1b4b" }
        } else {
            Gradient { from: "#1e1b4b", to: "#000000" }
        };
    }

    if c.contains("rain") {
        Gradient { from: "#334155", to: "#0f172a" }
    } else if c.contains("cloud") {
        Gradient { from: "#60a5fa", to: "#3730a3" }
    } else if c.contains("sun") || c.contains("clear") {
        Gradient { from: "#fbbf24", to: "#2563eb" }
    } else {
        Gradient { from: "#2563eb", to: "#1e3a8a" }
    }
}
