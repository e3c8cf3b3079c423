use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, ContentArrangement, Table};

use super::number::{format_percent, format_thousands};
use crate::error::CtaError;
use crate::models::{DayType, Station, StopListing};
use crate::reports::{
    DailySeries, DayTypeBreakdown, MonthlyRidership, NearbyStations, OverviewStats, StopCount,
    WeekdayRanking, YearlyRidership,
};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Console line for a validation notice, e.g. `**No such line...`.
pub fn format_notice(err: &CtaError) -> String {
    format!("**{err}\n")
}

/// Format the general statistics block shown at startup.
pub fn format_overview(stats: &OverviewStats) -> String {
    let range = match (&stats.first_date, &stats.last_date) {
        (Some(first), Some(last)) => format!("{first} - {last}"),
        _ => "none".to_string(),
    };
    let mut output = String::from("General Statistics:\n");
    output.push_str(&format!("  # of stations: {}\n", format_thousands(stats.stations)));
    output.push_str(&format!("  # of stops: {}\n", format_thousands(stats.stops)));
    output.push_str(&format!(
        "  # of ride entries: {}\n",
        format_thousands(stats.ride_entries)
    ));
    output.push_str(&format!("  date range: {range}\n"));
    output.push_str(&format!(
        "  Total ridership: {}\n",
        format_thousands(stats.total_riders)
    ));
    output
}

pub fn print_overview(stats: &OverviewStats) {
    print!("{}", format_overview(stats));
}

/// Format `id : name` lines for a station search.
pub fn format_station_matches(stations: &[Station]) -> String {
    if stations.is_empty() {
        return "**No stations found...\n".to_string();
    }
    stations.iter().map(|s| format!("{s}\n")).collect()
}

pub fn print_station_matches(stations: &[Station]) {
    print!("{}", format_station_matches(stations));
}

/// Format the day-type breakdown for `station`.
///
/// Percentage lines are omitted when the total is zero.
pub fn format_day_types(station: &str, breakdown: Option<&DayTypeBreakdown>) -> String {
    let Some(b) = breakdown else {
        return "**No data found...\n".to_string();
    };

    let mut output = format!(
        "{}\n",
        format!("Percentage of ridership for the {station} station:").bold()
    );
    let total = b.total();
    if total > 0 {
        for day in [DayType::Weekday, DayType::Saturday, DayType::SundayHoliday] {
            output.push_str(&format!(
                "  {day} ridership: {} ({})\n",
                format_thousands(b.riders(day)),
                format_percent(b.percent(day))
            ));
        }
        output.push_str(&format!("  Total ridership: {}\n", format_thousands(total)));
    }
    output
}

pub fn print_day_types(station: &str, breakdown: Option<&DayTypeBreakdown>) {
    print!("{}", format_day_types(station, breakdown));
}

/// Format the weekday ranking as a table, busiest station first.
pub fn format_weekday_ranking(ranking: &WeekdayRanking) -> String {
    let mut output = format!(
        "{}\n",
        "Ridership on Weekdays for Each Station".bold().green()
    );

    let mut table = new_table(vec!["Station", "Weekday Riders", "% of Total"]);
    for share in &ranking.stations {
        table.add_row(vec![
            Cell::new(&share.station),
            Cell::new(format_thousands(share.riders)),
            Cell::new(format_percent(share.percent)),
        ]);
    }

    output.push_str(&format!("{table}\n"));
    output
}

pub fn print_weekday_ranking(ranking: &WeekdayRanking) {
    print!("{}", format_weekday_ranking(ranking));
}

/// Format the stops of one line heading one direction, one `name : direction = D (...)` line each.
pub fn format_line_stops(stops: &[StopListing]) -> String {
    stops
        .iter()
        .map(|stop| {
            format!(
                "{} : direction = {} ({})\n",
                stop.name,
                stop.direction,
                stop.accessibility()
            )
        })
        .collect()
}

pub fn print_line_stops(stops: &[StopListing]) {
    print!("{}", format_line_stops(stops));
}

/// Format stop counts per line color and direction as `Color going D : count (pct%)`.
pub fn format_stop_counts(counts: &[StopCount]) -> String {
    let mut output = format!(
        "{}\n",
        "Number of Stops For Each Color By Direction".bold().green()
    );
    for count in counts {
        output.push_str(&format!(
            "{} going {} : {} ({})\n",
            count.color,
            count.direction,
            count.stops,
            format_percent(count.percent)
        ));
    }
    output
}

pub fn print_stop_counts(counts: &[StopCount]) {
    print!("{}", format_stop_counts(counts));
}

pub fn format_yearly(yearly: &YearlyRidership) -> String {
    let mut output = format!("{}\n", yearly.title().bold().green());
    for year in &yearly.years {
        output.push_str(&format!("{} : {}\n", year.label, format_thousands(year.riders)));
    }
    output
}

pub fn print_yearly(yearly: &YearlyRidership) {
    print!("{}", format_yearly(yearly));
}

pub fn format_monthly(monthly: &MonthlyRidership) -> String {
    let mut output = format!("{}\n", monthly.title().bold().green());
    for month in &monthly.months {
        output.push_str(&format!("{} : {}\n", month.label, format_thousands(month.riders)));
    }
    output
}

pub fn print_monthly(monthly: &MonthlyRidership) {
    print!("{}", format_monthly(monthly));
}

/// Format one station's daily series: header, then its first and last five days.
pub fn format_daily_series(label: &str, series: &DailySeries) -> String {
    let mut output = format!(
        "{}\n",
        format!("{label}: {} {}", series.station.id, series.station.name).bold()
    );
    for day in series.preview() {
        output.push_str(&format!("{} {}\n", day.date, day.riders));
    }
    output
}

pub fn print_daily_series(label: &str, series: &DailySeries) {
    print!("{}", format_daily_series(label, series));
}

/// Format stations found around a coordinate.
pub fn format_nearby(nearby: &NearbyStations) -> String {
    if nearby.stations.is_empty() {
        return "**No stations found...\n".to_string();
    }
    let mut output = format!("{}\n", "List of Stations Within a Mile".bold().green());
    for station in &nearby.stations {
        output.push_str(&format!(
            "{} : ({}, {})\n",
            station.name, station.latitude, station.longitude
        ));
    }
    output
}

pub fn print_nearby(nearby: &NearbyStations) {
    print!("{}", format_nearby(nearby));
}
