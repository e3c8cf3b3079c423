use std::collections::BTreeSet;

use rusqlite::params;
use serde::{Deserialize, Serialize};

use super::stations::{resolve_station, resolve_station_name};
use crate::db::Dataset;
use crate::error::CtaError;
use crate::models::{DailyRidership, PeriodTotal, Station};
use crate::visualization::{Chart, ChartKind, Series, SeriesChart};

/// Rows shown from each end of a daily series.
pub const PREVIEW_ROWS: usize = 5;

/// Ridership per calendar year for one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyRidership {
    pub station: String,
    pub years: Vec<PeriodTotal>,
}

impl YearlyRidership {
    /// Resolve `pattern` to one station and total its riders per year.
    pub fn compute(dataset: &Dataset, pattern: &str) -> Result<Self, CtaError> {
        let station = resolve_station_name(dataset, pattern)?;
        let years = dataset.query(
            "SELECT strftime('%Y', Ride_Date) AS Year, SUM(Num_Riders)
             FROM Ridership
             JOIN Stations ON Ridership.Station_ID = Stations.Station_ID
             WHERE Station_Name = ?1
             GROUP BY Year
             ORDER BY Year;",
            params![station],
            period_row,
        )?;
        Ok(Self { station, years })
    }

    pub fn title(&self) -> String {
        format!("Yearly Ridership at {}", self.station)
    }

    pub fn chart(&self) -> Chart {
        single_series_chart(
            ChartKind::Line,
            self.title(),
            "Year",
            &self.station,
            &self.years,
        )
    }
}

/// Ridership per month of one year for one station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRidership {
    pub station: String,
    pub year: String,
    /// Labelled `MM/YYYY`
    pub months: Vec<PeriodTotal>,
}

impl MonthlyRidership {
    /// Resolve `pattern` to one station and total its riders per month of `year`.
    pub fn compute(dataset: &Dataset, pattern: &str, year: &str) -> Result<Self, CtaError> {
        let station = resolve_station_name(dataset, pattern)?;
        Self::for_station(dataset, station, year)
    }

    /// Monthly totals for an already-resolved station name.
    pub fn for_station(dataset: &Dataset, station: String, year: &str) -> Result<Self, CtaError> {
        let year = year.trim().to_string();
        let months = dataset.query(
            "SELECT strftime('%m/%Y', Ride_Date) AS Month, SUM(Num_Riders)
             FROM Ridership
             JOIN Stations ON Ridership.Station_ID = Stations.Station_ID
             WHERE Station_Name = ?1 AND strftime('%Y', Ride_Date) = ?2
             GROUP BY Month
             ORDER BY Month;",
            params![station, year],
            period_row,
        )?;
        Ok(Self {
            station,
            year,
            months,
        })
    }

    pub fn title(&self) -> String {
        format!("Monthly Ridership at {} for {}", self.station, self.year)
    }

    pub fn chart(&self) -> Chart {
        single_series_chart(
            ChartKind::Bar,
            self.title(),
            "Month",
            &self.station,
            &self.months,
        )
    }
}

/// Daily ridership of one station over one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeries {
    pub station: Station,
    pub days: Vec<DailyRidership>,
}

impl DailySeries {
    pub fn compute(dataset: &Dataset, station: Station, year: &str) -> Result<Self, CtaError> {
        let days = dataset.query(
            "SELECT strftime('%Y-%m-%d', Ride_Date) AS Day, SUM(Num_Riders)
             FROM Ridership
             WHERE Station_ID = ?1 AND strftime('%Y', Ride_Date) = ?2
             GROUP BY Day
             ORDER BY Day;",
            params![station.id, year.trim()],
            |r| {
                Ok(DailyRidership {
                    date: r.get(0)?,
                    riders: r.get(1)?,
                })
            },
        )?;
        Ok(Self { station, days })
    }

    /// First and last [`PREVIEW_ROWS`] days; every day once if the series is short.
    pub fn preview(&self) -> Vec<&DailyRidership> {
        head_and_tail(&self.days, PREVIEW_ROWS)
    }
}

/// Two stations' daily ridership over the same year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyComparison {
    pub year: String,
    pub first: DailySeries,
    pub second: DailySeries,
}

impl DailyComparison {
    /// Resolve both patterns, stopping at the first that does not name exactly
    /// one station, then fetch each station's daily series.
    pub fn compute(
        dataset: &Dataset,
        year: &str,
        first_pattern: &str,
        second_pattern: &str,
    ) -> Result<Self, CtaError> {
        let first = resolve_station(dataset, first_pattern)?;
        let second = resolve_station(dataset, second_pattern)?;
        Self::for_stations(dataset, year, first, second)
    }

    pub fn for_stations(
        dataset: &Dataset,
        year: &str,
        first: Station,
        second: Station,
    ) -> Result<Self, CtaError> {
        Ok(Self {
            year: year.trim().to_string(),
            first: DailySeries::compute(dataset, first, year)?,
            second: DailySeries::compute(dataset, second, year)?,
        })
    }

    /// Dual-line chart over the union of both stations' dates.
    ///
    /// `None` when either station has no data for the year.
    pub fn chart(&self) -> Option<Chart> {
        if self.first.days.is_empty() || self.second.days.is_empty() {
            return None;
        }

        let categories: Vec<String> = self
            .first
            .days
            .iter()
            .chain(&self.second.days)
            .map(|d| d.date.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let align = |series: &DailySeries| Series {
            name: series.station.name.clone(),
            values: categories
                .iter()
                .map(|date| {
                    series
                        .days
                        .iter()
                        .find(|d| &d.date == date)
                        .map(|d| d.riders)
                })
                .collect(),
        };

        Some(Chart::Series(SeriesChart {
            kind: ChartKind::Line,
            title: format!("Daily Ridership Comparison for {}", self.year),
            x_desc: "Date".to_string(),
            y_desc: "Ridership".to_string(),
            series: vec![align(&self.first), align(&self.second)],
            categories,
        }))
    }
}

/// The first `n` and last `n` items, without repeating any when `len <= 2n`.
pub fn head_and_tail<T>(items: &[T], n: usize) -> Vec<&T> {
    if items.len() <= n * 2 {
        return items.iter().collect();
    }
    items[..n].iter().chain(&items[items.len() - n..]).collect()
}

fn period_row(r: &rusqlite::Row<'_>) -> rusqlite::Result<PeriodTotal> {
    Ok(PeriodTotal {
        label: r.get(0)?,
        riders: r.get(1)?,
    })
}

fn single_series_chart(
    kind: ChartKind,
    title: String,
    x_desc: &str,
    station: &str,
    totals: &[PeriodTotal],
) -> Chart {
    Chart::Series(SeriesChart {
        kind,
        title,
        x_desc: x_desc.to_string(),
        y_desc: "Ridership".to_string(),
        categories: totals.iter().map(|t| t.label.clone()).collect(),
        series: vec![Series {
            name: station.to_string(),
            values: totals.iter().map(|t| Some(t.riders)).collect(),
        }],
    })
}
