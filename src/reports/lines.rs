use rusqlite::params;
use serde::{Deserialize, Serialize};

use super::percent;
use crate::db::Dataset;
use crate::error::CtaError;
use crate::models::StopListing;

/// Whether a line of the given color exists (case-insensitive).
pub fn line_exists(dataset: &Dataset, color: &str) -> Result<bool, CtaError> {
    let count: i64 = dataset.query_one(
        "SELECT COUNT(*) FROM Lines WHERE UPPER(Color) = ?1;",
        params![color.trim().to_uppercase()],
        |r| r.get(0),
    )?;
    Ok(count > 0)
}

/// Stops served by a line in one direction, ordered by stop name.
///
/// Fails with [`CtaError::NoSuchLine`] for an unknown color and
/// [`CtaError::NoStopsInDirection`] when the line has no stops that way.
pub fn stops_for_line(
    dataset: &Dataset,
    color: &str,
    direction: &str,
) -> Result<Vec<StopListing>, CtaError> {
    if !line_exists(dataset, color)? {
        return Err(CtaError::NoSuchLine);
    }

    let stops = dataset.query(
        "SELECT Stops.Stop_Name, Stops.Direction, Stops.ADA
         FROM Stops
         JOIN StopDetails ON Stops.Stop_ID = StopDetails.Stop_ID
         JOIN Lines ON StopDetails.Line_ID = Lines.Line_ID
         WHERE UPPER(Lines.Color) = ?1 AND UPPER(Stops.Direction) = ?2
         ORDER BY Stops.Stop_Name ASC;",
        params![color.trim().to_uppercase(), direction.trim().to_uppercase()],
        |r| {
            Ok(StopListing {
                name: r.get(0)?,
                direction: r.get(1)?,
                accessible: r.get(2)?,
            })
        },
    )?;

    if stops.is_empty() {
        return Err(CtaError::NoStopsInDirection);
    }
    Ok(stops)
}

/// Number of stops for one line color heading one direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopCount {
    pub color: String,
    pub direction: String,
    pub stops: i64,
    /// Share of all distinct stops in the dataset
    pub percent: f64,
}

/// Stop counts grouped by line color and direction, ordered by color then direction.
pub fn stop_counts(dataset: &Dataset) -> Result<Vec<StopCount>, CtaError> {
    let groups: Vec<(String, String, i64)> = dataset.query(
        "SELECT Lines.Color, Stops.Direction, COUNT(*) AS Stop_Count
         FROM Stops
         JOIN StopDetails ON Stops.Stop_ID = StopDetails.Stop_ID
         JOIN Lines ON StopDetails.Line_ID = Lines.Line_ID
         GROUP BY Lines.Color, Stops.Direction
         ORDER BY Lines.Color ASC, Stops.Direction ASC;",
        [],
        |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
    )?;

    let distinct_stops: i64 =
        dataset.query_one("SELECT COUNT(DISTINCT Stop_ID) FROM Stops;", [], |r| r.get(0))?;

    Ok(groups
        .into_iter()
        .map(|(color, direction, stops)| StopCount {
            color,
            direction,
            stops,
            percent: percent(stops, distinct_stops),
        })
        .collect())
}
