use rusqlite::params;
use tracing::debug;

use crate::db::Dataset;
use crate::error::CtaError;
use crate::models::Station;

/// Stations whose name matches a `LIKE` pattern (`_` and `%` wildcards),
/// case-insensitively, sorted by name.
pub fn find_stations(dataset: &Dataset, pattern: &str) -> Result<Vec<Station>, CtaError> {
    dataset.query(
        "SELECT Station_ID, Station_Name
         FROM Stations
         WHERE Station_Name LIKE ?1
         ORDER BY Station_Name ASC;",
        params![pattern.to_uppercase()],
        |r| {
            Ok(Station {
                id: r.get(0)?,
                name: r.get(1)?,
            })
        },
    )
}

/// Resolve a pattern to exactly one distinct station name.
pub fn resolve_station_name(dataset: &Dataset, pattern: &str) -> Result<String, CtaError> {
    let names: Vec<String> = dataset.query(
        "SELECT DISTINCT Station_Name FROM Stations WHERE Station_Name LIKE ?1;",
        params![pattern],
        |r| r.get(0),
    )?;
    exactly_one(pattern, names)
}

/// Resolve a pattern to exactly one station (identifier and name).
pub fn resolve_station(dataset: &Dataset, pattern: &str) -> Result<Station, CtaError> {
    let stations = dataset.query(
        "SELECT DISTINCT Station_ID, Station_Name FROM Stations WHERE Station_Name LIKE ?1;",
        params![pattern],
        |r| {
            Ok(Station {
                id: r.get(0)?,
                name: r.get(1)?,
            })
        },
    )?;
    exactly_one(pattern, stations)
}

fn exactly_one<T>(pattern: &str, mut matches: Vec<T>) -> Result<T, CtaError> {
    debug!(pattern, matches = matches.len(), "resolving station");
    match matches.len() {
        0 => Err(CtaError::NoStationFound),
        1 => Ok(matches.remove(0)),
        _ => Err(CtaError::MultipleStationsFound),
    }
}
