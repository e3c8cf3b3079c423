use serde::{Deserialize, Serialize};

/// Type-of-day code carried by every ridership record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    /// `W`
    Weekday,
    /// `A`
    Saturday,
    /// `U`
    SundayHoliday,
}

impl DayType {
    pub fn code(&self) -> &'static str {
        match self {
            DayType::Weekday => "W",
            DayType::Saturday => "A",
            DayType::SundayHoliday => "U",
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::SundayHoliday => write!(f, "Sunday/holiday"),
        }
    }
}

impl std::str::FromStr for DayType {
    type Err = crate::error::CtaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "W" => Ok(DayType::Weekday),
            "A" => Ok(DayType::Saturday),
            "U" => Ok(DayType::SundayHoliday),
            _ => Err(crate::error::CtaError::ParseError(format!(
                "Unknown type of day: '{s}'"
            ))),
        }
    }
}

/// Rider total for one period (a year like `2021` or a month like `03/2021`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotal {
    pub label: String,
    pub riders: i64,
}

/// Rider total for a single service day, keyed by `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRidership {
    pub date: String,
    pub riders: i64,
}
