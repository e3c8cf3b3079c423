use rusqlite::params;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::percent;
use crate::db::Dataset;
use crate::error::CtaError;
use crate::models::DayType;

/// Rider totals for one station split by type of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTypeBreakdown {
    pub station: String,
    pub weekday: i64,
    pub saturday: i64,
    pub sunday_holiday: i64,
}

impl DayTypeBreakdown {
    /// Sum riders per type of day for the station named exactly `station`.
    ///
    /// Returns `Ok(None)` when the station has no ridership rows at all.
    pub fn compute(dataset: &Dataset, station: &str) -> Result<Option<Self>, CtaError> {
        let rows: Vec<(String, i64)> = dataset.query(
            "SELECT Type_of_Day, SUM(Num_Riders)
             FROM Ridership
             JOIN Stations ON Ridership.Station_ID = Stations.Station_ID
             WHERE Station_Name = ?1
             GROUP BY Type_of_Day;",
            params![station],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )?;

        if rows.is_empty() {
            return Ok(None);
        }

        let mut breakdown = Self {
            station: station.to_string(),
            weekday: 0,
            saturday: 0,
            sunday_holiday: 0,
        };
        for (code, riders) in rows {
            match code.parse::<DayType>() {
                Ok(DayType::Weekday) => breakdown.weekday = riders,
                Ok(DayType::Saturday) => breakdown.saturday = riders,
                Ok(DayType::SundayHoliday) => breakdown.sunday_holiday = riders,
                Err(_) => debug!(code = %code, riders, "skipping unknown type of day"),
            }
        }
        Ok(Some(breakdown))
    }

    pub fn riders(&self, day: DayType) -> i64 {
        match day {
            DayType::Weekday => self.weekday,
            DayType::Saturday => self.saturday,
            DayType::SundayHoliday => self.sunday_holiday,
        }
    }

    pub fn total(&self) -> i64 {
        self.weekday + self.saturday + self.sunday_holiday
    }

    /// Share of the total for one type of day; 0.0 when the total is zero.
    pub fn percent(&self, day: DayType) -> f64 {
        percent(self.riders(day), self.total())
    }
}
