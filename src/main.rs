use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cta_ridership_analyzer::{
    config::AppConfig,
    models::{Coordinate, Direction},
    reports::Reporter,
    visualization::{
        format_notice, print_daily_series, print_day_types, print_line_stops, print_monthly,
        print_nearby, print_overview, print_station_matches, print_stop_counts,
        print_weekday_ranking, print_yearly, Chart, ChartRenderer, ChartTarget, PlottersRenderer,
    },
    CtaError, Dataset, Shell,
};

#[derive(Parser)]
#[command(
    name = "cta-analyzer",
    about = "CTA 'L' Ridership Analyzer - station, line, and ridership reports",
    version,
    author
)]
struct Cli {
    /// Path to the SQLite ridership dataset
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory displayed charts are written to
    #[arg(long, global = true)]
    chart_dir: Option<PathBuf>,

    /// Print report results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Shell,

    /// General statistics for the whole dataset
    Stats,

    /// Find stations by partial name (wildcards _ and %)
    Stations { pattern: String },

    /// Ridership split by weekday / Saturday / Sunday-holiday for one station
    DayTypes {
        /// Exact station name
        station: String,
    },

    /// Stations ranked by weekday ridership
    Weekday,

    /// Stops on a line heading one direction
    LineStops {
        /// Line color, e.g. Red or Yellow
        color: String,
        /// N, S, E, or W
        direction: Direction,
    },

    /// Stop counts per line color and direction
    StopCounts,

    /// Ridership per year for one station
    Yearly {
        /// Station name pattern resolving to exactly one station
        pattern: String,
        #[arg(long)]
        plot: bool,
    },

    /// Ridership per month of one year for one station
    Monthly {
        pattern: String,
        year: String,
        #[arg(long)]
        plot: bool,
    },

    /// Daily ridership of two stations over one year
    Compare {
        year: String,
        first: String,
        second: String,
        #[arg(long)]
        plot: bool,
    },

    /// Stations within about a mile of a coordinate
    Nearby {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
        /// Save a map of the stations to the configured map output
        #[arg(long)]
        plot: bool,
    },
}

/// Turn a report result into `Some(value)`, printing validation notices.
fn report<T>(result: Result<T, CtaError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_notice() => {
            print!("{}", format_notice(&e));
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn plot(renderer: &mut dyn ChartRenderer, chart: Option<Chart>, target: ChartTarget) -> Result<()> {
    let Some(chart) = chart else {
        println!("**Nothing to plot...");
        return Ok(());
    };
    if let Some(path) = report(renderer.render(&chart, &target))?.flatten() {
        println!("Chart written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(database) = cli.database {
        config.database = database;
    }
    if let Some(dir) = cli.chart_dir {
        config.charts.output_dir = dir;
    }

    let dataset = Dataset::open(&config.database)?;
    let reporter = Reporter::new(&dataset);
    let map_output = config.charts.map_output.clone();
    let mut renderer = PlottersRenderer::new(config.charts);
    let json = cli.json;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            let mut shell = Shell::new(
                reporter,
                &mut renderer,
                map_output,
                stdin.lock(),
                io::stdout(),
            );
            shell.run()?;
        }

        Commands::Stats => {
            let stats = reporter.overview()?;
            emit(json, &stats, print_overview)?;
        }

        Commands::Stations { pattern } => {
            let stations = reporter.find_stations(&pattern)?;
            emit(json, &stations, |s| print_station_matches(s))?;
        }

        Commands::DayTypes { station } => {
            let breakdown = reporter.day_types(&station)?;
            emit(json, &breakdown, |b| print_day_types(&station, b.as_ref()))?;
        }

        Commands::Weekday => {
            let ranking = reporter.weekday_ranking()?;
            emit(json, &ranking, print_weekday_ranking)?;
        }

        Commands::LineStops { color, direction } => {
            if let Some(stops) = report(reporter.line_stops(&color, direction.code()))? {
                emit(json, &stops, |s| print_line_stops(s))?;
            }
        }

        Commands::StopCounts => {
            let counts = reporter.stop_counts()?;
            emit(json, &counts, |c| print_stop_counts(c))?;
        }

        Commands::Yearly { pattern, plot: want_plot } => {
            if let Some(yearly) = report(reporter.yearly(&pattern))? {
                emit(json, &yearly, print_yearly)?;
                if want_plot {
                    plot(&mut renderer, Some(yearly.chart()), ChartTarget::Display)?;
                }
            }
        }

        Commands::Monthly {
            pattern,
            year,
            plot: want_plot,
        } => {
            if let Some(monthly) = report(reporter.monthly(&pattern, &year))? {
                emit(json, &monthly, print_monthly)?;
                if want_plot {
                    plot(&mut renderer, Some(monthly.chart()), ChartTarget::Display)?;
                }
            }
        }

        Commands::Compare {
            year,
            first,
            second,
            plot: want_plot,
        } => {
            if let Some(comparison) = report(reporter.compare(&year, &first, &second))? {
                emit(json, &comparison, |c| {
                    print_daily_series("Station 1", &c.first);
                    print_daily_series("Station 2", &c.second);
                })?;
                if want_plot {
                    plot(&mut renderer, comparison.chart(), ChartTarget::Display)?;
                }
            }
        }

        Commands::Nearby {
            latitude,
            longitude,
            plot: want_plot,
        } => {
            let Some(center) = report(Coordinate::new(latitude, longitude))? else {
                return Ok(());
            };
            let nearby = reporter.nearby(center)?;
            emit(json, &nearby, print_nearby)?;
            if want_plot && !nearby.stations.is_empty() {
                plot(&mut renderer, Some(nearby.chart()), ChartTarget::Save(map_output))?;
            }
        }
    }

    Ok(())
}
