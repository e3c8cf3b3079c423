mod common;

use std::path::PathBuf;

use assert_approx_eq::assert_approx_eq;
use tempfile::TempDir;

use cta_ridership_analyzer::{
    config::ChartConfig,
    models::{Coordinate, DayType},
    reports::Reporter,
    visualization::{
        format_day_types, format_overview, Chart, ChartRenderer, ChartTarget, PlottersRenderer,
        RecordingRenderer,
    },
    CtaError, Dataset, Shell,
};

fn open_loop() -> (TempDir, Dataset) {
    let dir = TempDir::new().unwrap();
    let path = common::loop_dataset(dir.path());
    let dataset = Dataset::open(&path).unwrap();
    (dir, dataset)
}

#[test]
fn test_overview_of_uniform_dataset() {
    let dir = TempDir::new().unwrap();
    let dataset = Dataset::open(&common::uniform_dataset(dir.path())).unwrap();
    let stats = Reporter::new(&dataset).overview().unwrap();

    assert_eq!(stats.stations, 10);
    assert_eq!(stats.stops, 50);
    assert_eq!(stats.ride_entries, 1000);
    assert_eq!(stats.total_riders, 25_000);

    let text = format_overview(&stats);
    assert!(text.contains("# of ride entries: 1,000"));
    assert!(text.contains("date range: 2019-01-01 - 2021-12-31"));
    assert!(text.contains("Total ridership: 25,000"));
}

#[test]
fn test_missing_dataset_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = Dataset::open(&dir.path().join("nope.db")).err().unwrap();
    assert!(matches!(err, CtaError::DatasetNotFound(_)));
    assert!(!err.is_notice());
}

#[test]
fn test_station_search_is_case_insensitive() {
    let (_dir, dataset) = open_loop();
    let reporter = Reporter::new(&dataset);

    let matches = reporter.find_stations("belmont%").unwrap();
    let names: Vec<_> = matches.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Belmont-North Main", "Belmont-O'Hare"]);

    assert!(reporter.find_stations("Nowhere%").unwrap().is_empty());
}

#[test]
fn test_day_type_breakdown() {
    let (_dir, dataset) = open_loop();
    let breakdown = Reporter::new(&dataset)
        .day_types("State/Lake")
        .unwrap()
        .unwrap();

    assert_eq!(breakdown.riders(DayType::Weekday), 2200);
    assert_eq!(breakdown.riders(DayType::Saturday), 1000);
    assert_eq!(breakdown.riders(DayType::SundayHoliday), 300);
    assert_eq!(breakdown.total(), 3500);
    assert_approx_eq!(breakdown.percent(DayType::Weekday), 62.857142, 1e-4);

    let text = format_day_types("State/Lake", Some(&breakdown));
    assert!(text.contains("Weekday ridership: 2,200 (62.86%)"));
    assert!(text.contains("Sunday/holiday ridership: 300 (8.57%)"));
}

#[test]
fn test_day_type_breakdown_with_zero_riders() {
    let (_dir, dataset) = open_loop();
    let breakdown = Reporter::new(&dataset).day_types("Howard").unwrap().unwrap();
    assert_eq!(breakdown.total(), 0);
    assert_eq!(breakdown.percent(DayType::Saturday), 0.0);

    let text = format_day_types("Howard", Some(&breakdown));
    assert!(!text.contains("ridership:"));
}

#[test]
fn test_weekday_ranking() {
    let (_dir, dataset) = open_loop();
    let ranking = Reporter::new(&dataset).weekday_ranking().unwrap();

    assert_eq!(ranking.total, 5620);
    let names: Vec<_> = ranking.stations.iter().map(|s| s.station.as_str()).collect();
    assert_eq!(names, vec!["Clark/Lake", "State/Lake", "Washington/Wells"]);

    let percent_sum: f64 = ranking.stations.iter().map(|s| s.percent).sum();
    assert_approx_eq!(percent_sum, 100.0, 1e-9);
}

#[test]
fn test_line_stops_and_validation() {
    let (_dir, dataset) = open_loop();
    let reporter = Reporter::new(&dataset);

    let stops = reporter.line_stops("red", "n").unwrap();
    let names: Vec<_> = stops.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Belmont (Red)", "Howard (Red)"]);

    assert!(matches!(
        reporter.line_stops("Purple", "N"),
        Err(CtaError::NoSuchLine)
    ));
    assert!(matches!(
        reporter.line_stops("Yellow", "N"),
        Err(CtaError::NoStopsInDirection)
    ));
}

#[test]
fn test_stop_counts_share_of_all_stops() {
    let (_dir, dataset) = open_loop();
    let counts = Reporter::new(&dataset).stop_counts().unwrap();

    let keys: Vec<_> = counts
        .iter()
        .map(|c| (c.color.as_str(), c.direction.as_str(), c.stops))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("Blue", "E", 2),
            ("Green", "E", 1),
            ("Green", "N", 1),
            ("Red", "N", 2),
            ("Red", "S", 1),
        ]
    );
    assert_approx_eq!(counts[0].percent, 200.0 / 7.0, 1e-9);
}

#[test]
fn test_yearly_and_monthly_totals() {
    let (_dir, dataset) = open_loop();
    let reporter = Reporter::new(&dataset);

    let yearly = reporter.yearly("state/lake").unwrap();
    assert_eq!(yearly.station, "State/Lake");
    let years: Vec<_> = yearly
        .years
        .iter()
        .map(|y| (y.label.as_str(), y.riders))
        .collect();
    assert_eq!(years, vec![("2020", 1700), ("2021", 1800)]);

    let monthly = reporter.monthly("State/Lake", "2021").unwrap();
    let months: Vec<_> = monthly
        .months
        .iter()
        .map(|m| (m.label.as_str(), m.riders))
        .collect();
    assert_eq!(months, vec![("02/2021", 1200), ("03/2021", 600)]);

    assert!(reporter.monthly("State/Lake", "1999").unwrap().months.is_empty());
}

#[test]
fn test_station_resolution_notices() {
    let (_dir, dataset) = open_loop();
    let reporter = Reporter::new(&dataset);

    assert!(matches!(
        reporter.yearly("Belmont%"),
        Err(CtaError::MultipleStationsFound)
    ));
    assert!(matches!(reporter.yearly("Nowhere"), Err(CtaError::NoStationFound)));
    assert!(matches!(
        reporter.compare("2021", "Nowhere", "Belmont%"),
        Err(CtaError::NoStationFound)
    ));
}

#[test]
fn test_daily_comparison_aligns_dates() {
    let (_dir, dataset) = open_loop();
    let comparison = Reporter::new(&dataset)
        .compare("2021", "Clark/Lake", "Washington/Wells")
        .unwrap();

    assert_eq!(comparison.first.days.len(), 5);
    assert_eq!(comparison.second.days.len(), 3);

    let Some(Chart::Series(chart)) = comparison.chart() else {
        panic!("expected a series chart");
    };
    assert_eq!(chart.categories.len(), 5);
    assert_eq!(chart.series[0].values, vec![Some(500), Some(600), Some(700), Some(800), Some(640)]);
    assert_eq!(chart.series[1].values, vec![Some(50), Some(60), Some(70), None, None]);
}

#[test]
fn test_daily_comparison_without_data_has_no_chart() {
    let (_dir, dataset) = open_loop();
    let comparison = Reporter::new(&dataset)
        .compare("2020", "Clark/Lake", "State/Lake")
        .unwrap();
    assert!(comparison.first.days.is_empty());
    assert!(comparison.chart().is_none());
}

#[test]
fn test_nearby_stations_downtown() {
    let (_dir, dataset) = open_loop();
    let center = Coordinate::new(41.8857, -87.6278).unwrap();
    let nearby = Reporter::new(&dataset).nearby(center).unwrap();

    let names: Vec<_> = nearby.stations.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Clark/Lake", "State/Lake", "Washington/Wells"]);
    for station in &nearby.stations {
        assert!(nearby.bounds.contains(station.latitude, station.longitude));
    }
}

#[test]
fn test_nearby_out_of_bounds_coordinates() {
    assert!(matches!(
        Coordinate::new(50.0, -87.6),
        Err(CtaError::LatitudeOutOfBounds)
    ));
    assert!(matches!(
        Coordinate::new(41.9, -86.5),
        Err(CtaError::LongitudeOutOfBounds)
    ));
}

#[test]
fn test_plotters_renderer_writes_svg_files() {
    let (dir, dataset) = open_loop();
    let reporter = Reporter::new(&dataset);
    let mut renderer = PlottersRenderer::new(ChartConfig {
        output_dir: dir.path().to_path_buf(),
        map_background: dir.path().join("missing.png"),
        ..ChartConfig::default()
    });

    let yearly = reporter.yearly("State/Lake").unwrap();
    let written = renderer
        .render(&yearly.chart(), &ChartTarget::Display)
        .unwrap()
        .unwrap();
    assert_eq!(written, dir.path().join("yearly_ridership_at_state_lake.svg"));
    assert!(written.is_file());

    let map_path = dir.path().join("near.svg");
    let nearby = reporter
        .nearby(Coordinate::new(41.8857, -87.6278).unwrap())
        .unwrap();
    let written = renderer
        .render(&nearby.chart(), &ChartTarget::Save(map_path.clone()))
        .unwrap();
    assert_eq!(written, Some(map_path.clone()));
    assert!(std::fs::read_to_string(&map_path).unwrap().contains("<svg"));
}

#[test]
fn test_shell_session_end_to_end() {
    let (_dir, dataset) = open_loop();
    let mut renderer = RecordingRenderer::default();
    let mut output = Vec::new();
    let script = "1\nState%\n2\nState/Lake\n3\n5\n7\nState/Lake\n2021\ny\n9\n50\nq\nx\n";
    {
        let mut shell = Shell::new(
            Reporter::new(&dataset),
            &mut renderer,
            PathBuf::from("stations_map.svg"),
            script.as_bytes(),
            &mut output,
        );
        shell.run().unwrap();
    }
    let out = String::from_utf8(output).unwrap();

    assert!(out.contains("40260 : State/Lake"));
    assert!(out.contains("Weekday ridership: 2,200 (62.86%)"));
    assert!(out.contains("Clark/Lake"));
    assert!(out.contains("02/2021 : 1,200"));
    assert!(out.contains("**Latitude entered is out of bounds..."));
    assert!(out.contains("**Error, unknown command, try again..."));
    assert_eq!(renderer.rendered.len(), 1);
    assert_eq!(renderer.rendered[0].0.title(), "Monthly Ridership at State/Lake for 2021");
}
