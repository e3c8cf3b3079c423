mod station;
mod ridership;
mod geo;

pub use station::{Direction, Station, StationLocation, StopListing};
pub use ridership::{DailyRidership, DayType, PeriodTotal};
pub use geo::{
    check_latitude, check_longitude, parse_degrees, BoundingBox, Coordinate,
    LATITUDE_BOUNDS, LATITUDE_DEGREES_PER_MILE, LONGITUDE_BOUNDS, LONGITUDE_DEGREES_PER_MILE,
};
