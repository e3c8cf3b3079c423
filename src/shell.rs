//! Interactive command loop.
//!
//! Reads single-character commands, prompts for each report's parameters,
//! and hands them to [`Reporter`]. Validation failures print a notice and
//! return to the prompt; anything else ends the session.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::CtaError;
use crate::models::{check_latitude, check_longitude, parse_degrees, Coordinate};
use crate::reports::Reporter;
use crate::visualization::{
    format_daily_series, format_day_types, format_line_stops, format_monthly, format_nearby,
    format_notice, format_overview, format_station_matches, format_stop_counts,
    format_weekday_ranking, format_yearly, Chart, ChartRenderer, ChartTarget,
};

const COMMAND_PROMPT: &str = "Please enter a command (1-9, x to exit): ";

pub struct Shell<'a, R, W> {
    reporter: Reporter<'a>,
    renderer: &'a mut dyn ChartRenderer,
    map_output: PathBuf,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(
        reporter: Reporter<'a>,
        renderer: &'a mut dyn ChartRenderer,
        map_output: PathBuf,
        input: R,
        output: W,
    ) -> Self {
        Self {
            reporter,
            renderer,
            map_output,
            input,
            output,
        }
    }

    /// Print the overview, then serve commands until `x` or end of input.
    pub fn run(&mut self) -> Result<(), CtaError> {
        writeln!(self.output, "** Welcome to CTA L analysis app **")?;
        writeln!(self.output)?;

        let stats = self.reporter.overview()?;
        writeln!(self.output, "{}", format_overview(&stats))?;

        while let Some(command) = self.read_command()? {
            debug!(command = command.as_str(), "dispatching");
            let result = match command.as_str() {
                "x" => break,
                "1" => self.find_station_name(),
                "2" => self.day_type_ridership(),
                "3" => self.weekday_ranking(),
                "4" => self.stops_for_line(),
                "5" => self.stop_counts(),
                "6" => self.yearly_ridership(),
                "7" => self.monthly_ridership(),
                "8" => self.compare_daily_ridership(),
                "9" => self.stations_nearby(),
                _ => {
                    writeln!(self.output, "**Error, unknown command, try again...")?;
                    writeln!(self.output)?;
                    continue;
                }
            };

            match result {
                Ok(()) => {}
                Err(e) if e.is_notice() => write!(self.output, "{}", format_notice(&e))?,
                Err(e) => return Err(e),
            }
            writeln!(self.output)?;
        }

        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    fn read_command(&mut self) -> Result<Option<String>, CtaError> {
        write!(self.output, "{COMMAND_PROMPT}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for one value. End of input reads as an empty answer.
    fn ask(&mut self, prompt: &str) -> Result<String, CtaError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn offer_plot(&mut self, chart: Option<Chart>, target: ChartTarget) -> Result<(), CtaError> {
        let answer = self.ask("Plot? (y/n) ")?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        let Some(chart) = chart else {
            writeln!(self.output, "**Nothing to plot...")?;
            return Ok(());
        };
        if let Some(path) = self.renderer.render(&chart, &target)? {
            writeln!(self.output, "Chart written to {}", path.display())?;
        }
        Ok(())
    }

    fn find_station_name(&mut self) -> Result<(), CtaError> {
        writeln!(self.output)?;
        let pattern = self.ask("Enter partial station name (wildcards _ and %): ")?;
        let stations = self.reporter.find_stations(&pattern)?;
        write!(self.output, "{}", format_station_matches(&stations))?;
        Ok(())
    }

    fn day_type_ridership(&mut self) -> Result<(), CtaError> {
        writeln!(self.output)?;
        let station = self.ask("Enter the name of the station you would like to analyze: ")?;
        let breakdown = self.reporter.day_types(&station)?;
        write!(self.output, "{}", format_day_types(&station, breakdown.as_ref()))?;
        Ok(())
    }

    fn weekday_ranking(&mut self) -> Result<(), CtaError> {
        let ranking = self.reporter.weekday_ranking()?;
        write!(self.output, "{}", format_weekday_ranking(&ranking))?;
        Ok(())
    }

    fn stops_for_line(&mut self) -> Result<(), CtaError> {
        writeln!(self.output)?;
        let color = self.ask("Enter a line color (e.g. Red or Yellow): ")?;
        if !self.reporter.line_exists(&color)? {
            return Err(CtaError::NoSuchLine);
        }
        let direction = self.ask("Enter a direction (N/S/W/E): ")?;
        let stops = self.reporter.line_stops(&color, &direction)?;
        write!(self.output, "{}", format_line_stops(&stops))?;
        Ok(())
    }

    fn stop_counts(&mut self) -> Result<(), CtaError> {
        let counts = self.reporter.stop_counts()?;
        write!(self.output, "{}", format_stop_counts(&counts))?;
        Ok(())
    }

    fn yearly_ridership(&mut self) -> Result<(), CtaError> {
        writeln!(self.output)?;
        let pattern = self.ask("Enter a station name (wildcards _ and %): ")?;
        let yearly = self.reporter.yearly(&pattern)?;
        write!(self.output, "{}", format_yearly(&yearly))?;
        writeln!(self.output)?;
        self.offer_plot(Some(yearly.chart()), ChartTarget::Display)
    }

    fn monthly_ridership(&mut self) -> Result<(), CtaError> {
        writeln!(self.output)?;
        let pattern = self.ask("Enter a station name (wildcards _ and %): ")?;
        let station = self.reporter.resolve_station_name(&pattern)?;
        let year = self.ask("Enter a year: ")?;
        let monthly = self.reporter.monthly_for(station, &year)?;
        write!(self.output, "{}", format_monthly(&monthly))?;
        self.offer_plot(Some(monthly.chart()), ChartTarget::Display)
    }

    fn compare_daily_ridership(&mut self) -> Result<(), CtaError> {
        writeln!(self.output)?;
        let year = self.ask("Year to compare against? ")?;
        writeln!(self.output)?;
        let first_pattern = self.ask("Enter station 1 (wildcards _ and %): ")?;
        let first = self.reporter.resolve_station(&first_pattern)?;
        writeln!(self.output)?;
        let second_pattern = self.ask("Enter station 2 (wildcards _ and %): ")?;
        let second = self.reporter.resolve_station(&second_pattern)?;

        let comparison = self.reporter.compare_stations(&year, first, second)?;
        write!(self.output, "{}", format_daily_series("Station 1", &comparison.first))?;
        write!(self.output, "{}", format_daily_series("Station 2", &comparison.second))?;
        writeln!(self.output)?;
        self.offer_plot(comparison.chart(), ChartTarget::Display)
    }

    fn stations_nearby(&mut self) -> Result<(), CtaError> {
        writeln!(self.output)?;
        let latitude = self.ask("Enter a latitude: ")?;
        let latitude = check_latitude(parse_degrees(&latitude)?)?;
        let longitude = self.ask("Enter a longitude: ")?;
        let longitude = check_longitude(parse_degrees(&longitude)?)?;

        let nearby = self.reporter.nearby(Coordinate {
            latitude,
            longitude,
        })?;
        if nearby.stations.is_empty() {
            write!(self.output, "{}", format_nearby(&nearby))?;
            return Ok(());
        }

        writeln!(self.output)?;
        write!(self.output, "{}", format_nearby(&nearby))?;
        writeln!(self.output)?;
        let target = ChartTarget::Save(self.map_output.clone());
        self.offer_plot(Some(nearby.chart()), target)
    }
}
