use rusqlite::params;
use serde::{Deserialize, Serialize};

use crate::db::Dataset;
use crate::error::CtaError;
use crate::models::{BoundingBox, Coordinate, StationLocation};
use crate::visualization::{Chart, MapChart, MapPoint};

/// Stations with a stop inside the one-mile box around a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyStations {
    pub center: Coordinate,
    pub bounds: BoundingBox,
    pub stations: Vec<StationLocation>,
}

impl NearbyStations {
    pub fn compute(dataset: &Dataset, center: Coordinate) -> Result<Self, CtaError> {
        let bounds = BoundingBox::one_mile_around(center);
        let stations = dataset.query(
            "SELECT DISTINCT Stations.Station_Name, Stops.Latitude, Stops.Longitude
             FROM Stops
             JOIN Stations ON Stops.Station_ID = Stations.Station_ID
             WHERE Stops.Latitude BETWEEN ?1 AND ?2
               AND Stops.Longitude BETWEEN ?3 AND ?4
             ORDER BY Stations.Station_Name ASC;",
            params![bounds.lat_min, bounds.lat_max, bounds.lon_min, bounds.lon_max],
            |r| {
                Ok(StationLocation {
                    name: r.get(0)?,
                    latitude: r.get(1)?,
                    longitude: r.get(2)?,
                })
            },
        )?;
        Ok(Self {
            center,
            bounds,
            stations,
        })
    }

    /// Scatter of the found stations, annotated with their names.
    pub fn chart(&self) -> Chart {
        Chart::Map(MapChart {
            title: "Stations Near You".to_string(),
            points: self
                .stations
                .iter()
                .map(|s| MapPoint {
                    label: s.name.clone(),
                    latitude: s.latitude,
                    longitude: s.longitude,
                })
                .collect(),
        })
    }
}
