use serde::{Deserialize, Serialize};

use crate::db::Dataset;
use crate::error::CtaError;

/// Dataset-wide counts shown when a session starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub stations: i64,
    pub stops: i64,
    pub ride_entries: i64,
    /// Earliest ride date (`YYYY-MM-DD`), absent when there is no ridership.
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    pub total_riders: i64,
}

impl OverviewStats {
    pub fn compute(dataset: &Dataset) -> Result<Self, CtaError> {
        let stations = dataset.query_one("SELECT COUNT(*) FROM Stations;", [], |r| r.get(0))?;
        let stops = dataset.query_one("SELECT COUNT(*) FROM Stops;", [], |r| r.get(0))?;
        let ride_entries = dataset.query_one("SELECT COUNT(*) FROM Ridership;", [], |r| r.get(0))?;
        let (first_date, last_date) = dataset.query_one(
            "SELECT MIN(date(Ride_Date)), MAX(date(Ride_Date)) FROM Ridership;",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )?;
        let total_riders = dataset.query_one(
            "SELECT COALESCE(SUM(Num_Riders), 0) FROM Ridership;",
            [],
            |r| r.get(0),
        )?;

        Ok(Self {
            stations,
            stops,
            ride_entries,
            first_date,
            last_date,
            total_riders,
        })
    }
}
