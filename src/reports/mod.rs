mod overview;
mod stations;
mod day_type;
mod weekday;
mod lines;
mod ridership;
mod nearby;
mod reporter;

pub use overview::OverviewStats;
pub use stations::{find_stations, resolve_station, resolve_station_name};
pub use day_type::DayTypeBreakdown;
pub use weekday::{StationShare, WeekdayRanking};
pub use lines::{line_exists, stop_counts, stops_for_line, StopCount};
pub use ridership::{
    head_and_tail, DailyComparison, DailySeries, MonthlyRidership, YearlyRidership, PREVIEW_ROWS,
};
pub use nearby::NearbyStations;
pub use reporter::Reporter;

/// `part` as a percentage of `total`, or 0.0 when `total` is not positive.
pub fn percent(part: i64, total: i64) -> f64 {
    if total > 0 {
        part as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}
