use rusqlite::params;
use serde::{Deserialize, Serialize};

use super::percent;
use crate::db::Dataset;
use crate::error::CtaError;
use crate::models::DayType;

/// One station's weekday riders and its share of the system-wide weekday total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationShare {
    pub station: String,
    pub riders: i64,
    pub percent: f64,
}

/// Stations ranked by weekday ridership, busiest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayRanking {
    pub total: i64,
    pub stations: Vec<StationShare>,
}

impl WeekdayRanking {
    pub fn compute(dataset: &Dataset) -> Result<Self, CtaError> {
        let rows: Vec<(String, i64)> = dataset.query(
            "SELECT Station_Name, SUM(Num_Riders) AS Total_Ridership
             FROM Ridership
             JOIN Stations ON Ridership.Station_ID = Stations.Station_ID
             WHERE Type_of_Day = ?1
             GROUP BY Station_Name
             ORDER BY Total_Ridership DESC, Station_Name ASC;",
            params![DayType::Weekday.code()],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )?;

        let total: i64 = rows.iter().map(|(_, riders)| riders).sum();
        let stations = rows
            .into_iter()
            .map(|(station, riders)| StationShare {
                station,
                riders,
                percent: percent(riders, total),
            })
            .collect();

        Ok(Self { total, stations })
    }
}
