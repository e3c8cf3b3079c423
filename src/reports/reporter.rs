use crate::db::Dataset;
use crate::error::CtaError;
use crate::models::{Coordinate, Station, StopListing};
use crate::reports::{
    find_stations, line_exists, resolve_station, resolve_station_name, stop_counts,
    stops_for_line, DailyComparison, DailySeries, DayTypeBreakdown, MonthlyRidership,
    NearbyStations, OverviewStats, StopCount, WeekdayRanking, YearlyRidership,
};

/// Unified reporting API over one open dataset.
pub struct Reporter<'a> {
    dataset: &'a Dataset,
}

impl<'a> Reporter<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Station, stop and ride-entry counts, date range and total riders.
    pub fn overview(&self) -> Result<OverviewStats, CtaError> {
        OverviewStats::compute(self.dataset)
    }

    /// Stations matching a partial name with `_`/`%` wildcards.
    pub fn find_stations(&self, pattern: &str) -> Result<Vec<Station>, CtaError> {
        find_stations(self.dataset, pattern)
    }

    /// Riders by type of day for an exactly-named station; `None` without data.
    pub fn day_types(&self, station: &str) -> Result<Option<DayTypeBreakdown>, CtaError> {
        DayTypeBreakdown::compute(self.dataset, station)
    }

    pub fn weekday_ranking(&self) -> Result<WeekdayRanking, CtaError> {
        WeekdayRanking::compute(self.dataset)
    }

    pub fn line_exists(&self, color: &str) -> Result<bool, CtaError> {
        line_exists(self.dataset, color)
    }

    pub fn line_stops(&self, color: &str, direction: &str) -> Result<Vec<StopListing>, CtaError> {
        stops_for_line(self.dataset, color, direction)
    }

    pub fn stop_counts(&self) -> Result<Vec<StopCount>, CtaError> {
        stop_counts(self.dataset)
    }

    pub fn resolve_station(&self, pattern: &str) -> Result<Station, CtaError> {
        resolve_station(self.dataset, pattern)
    }

    pub fn resolve_station_name(&self, pattern: &str) -> Result<String, CtaError> {
        resolve_station_name(self.dataset, pattern)
    }

    pub fn yearly(&self, pattern: &str) -> Result<YearlyRidership, CtaError> {
        YearlyRidership::compute(self.dataset, pattern)
    }

    pub fn monthly(&self, pattern: &str, year: &str) -> Result<MonthlyRidership, CtaError> {
        MonthlyRidership::compute(self.dataset, pattern, year)
    }

    /// Monthly totals for a station name already resolved by [`Self::resolve_station_name`].
    pub fn monthly_for(&self, station: String, year: &str) -> Result<MonthlyRidership, CtaError> {
        MonthlyRidership::for_station(self.dataset, station, year)
    }

    pub fn daily(&self, station: Station, year: &str) -> Result<DailySeries, CtaError> {
        DailySeries::compute(self.dataset, station, year)
    }

    pub fn compare(
        &self,
        year: &str,
        first_pattern: &str,
        second_pattern: &str,
    ) -> Result<DailyComparison, CtaError> {
        DailyComparison::compute(self.dataset, year, first_pattern, second_pattern)
    }

    /// Daily comparison for two stations already resolved by [`Self::resolve_station`].
    pub fn compare_stations(
        &self,
        year: &str,
        first: Station,
        second: Station,
    ) -> Result<DailyComparison, CtaError> {
        DailyComparison::for_stations(self.dataset, year, first, second)
    }

    pub fn nearby(&self, center: Coordinate) -> Result<NearbyStations, CtaError> {
        NearbyStations::compute(self.dataset, center)
    }
}
