use serde::Serialize;

pub const HIGH_MIN: f64 = 80.0;
pub const MODERATE_MIN: f64 = 60.0;
pub const RISK_MIN: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    High,
    Moderate,
    Risk,
    Low,
}

impl Band {
    /// First match wins; each lower bound belongs to the higher band.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= HIGH_MIN {
            Band::High
        } else if percentage >= MODERATE_MIN {
            Band::Moderate
        } else if percentage >= RISK_MIN {
            Band::Risk
        } else {
            Band::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Band::High => "high",
            Band::Moderate => "moderate",
            Band::Risk => "risk",
            Band::Low => "low",
        }
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            Band::High => "High happiness, keep that balance.",
            Band::Moderate => "Moderate happiness, there is room to improve.",
            Band::Risk => "Risk of dissatisfaction, review your priorities.",
            Band::Low => "Low happiness, seek support and meaningful change.",
        }
    }
}

pub fn band_order() -> &'static [Band] {
    &[Band::High, Band::Moderate, Band::Risk, Band::Low]
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/bands.rs"]
mod tests;
