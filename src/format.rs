use serde::Serialize;

/// Formats a number compactly: millions as `"1.2 million"`, thousands as `"3.4k"`,
/// anything else with `decimals` decimal places.
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1} million", value / 1_000_000.0)
    } else if value.abs() >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else {
        format!("{value:.decimals$}")
    }
}

/// How favourable an emission reduction is
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum EmissionRating {
    /// the project increases emissions (or does nothing)
    Negative,
    Small,
    Medium,
    Large,
}

impl EmissionRating {
    /// Rates a reduction in kg CO2e
    pub fn of(value: f64) -> Self {
        if value <= 0.0 {
            EmissionRating::Negative
        } else if value < 1000.0 {
            EmissionRating::Small
        } else if value < 10000.0 {
            EmissionRating::Medium
        } else {
            EmissionRating::Large
        }
    }
}
