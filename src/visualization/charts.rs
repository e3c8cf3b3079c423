//! Renderer-agnostic chart descriptions and the [`ChartRenderer`] seam.
//!
//! Reports build a [`Chart`] from data they have already printed; a renderer
//! turns it into an image. Tests use [`RecordingRenderer`] and never touch a
//! drawing backend.

use std::path::{Path, PathBuf};

use crate::error::CtaError;

/// How values are drawn against the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// One named series aligned to [`SeriesChart::categories`].
///
/// `None` marks a category with no value for this series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<Option<i64>>,
}

/// A line or bar chart over text categories (years, months, dates).
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesChart {
    pub kind: ChartKind,
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl SeriesChart {
    /// Largest value across all series, or 0 when there is none.
    pub fn max_value(&self) -> i64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().flatten())
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// A labelled point on the station map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPoint {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Scatter of station locations drawn over the background map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapChart {
    pub title: String,
    pub points: Vec<MapPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Series(SeriesChart),
    Map(MapChart),
}

impl Chart {
    pub fn title(&self) -> &str {
        match self {
            Chart::Series(c) => &c.title,
            Chart::Map(c) => &c.title,
        }
    }
}

/// Where a rendered chart goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartTarget {
    /// Show the chart to the user; file-based renderers pick the location.
    Display,
    /// Persist the chart at a fixed path.
    Save(PathBuf),
}

/// Something that can draw a [`Chart`].
pub trait ChartRenderer {
    /// Render `chart`, returning the file written if there is one.
    fn render(&mut self, chart: &Chart, target: &ChartTarget) -> Result<Option<PathBuf>, CtaError>;
}

/// Headless renderer that only remembers what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub rendered: Vec<(Chart, ChartTarget)>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&mut self, chart: &Chart, target: &ChartTarget) -> Result<Option<PathBuf>, CtaError> {
        self.rendered.push((chart.clone(), target.clone()));
        Ok(match target {
            ChartTarget::Display => None,
            ChartTarget::Save(path) => Some(path.clone()),
        })
    }
}

/// File name for a displayed chart, derived from its title.
///
/// `"Yearly Ridership at State/Lake"` becomes `yearly_ridership_at_state_lake.svg`.
pub fn chart_file_name(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "chart.svg".to_string()
    } else {
        format!("{slug}.svg")
    }
}

/// Path a displayed chart is written to under `dir`.
pub fn display_path(dir: &Path, chart: &Chart) -> PathBuf {
    dir.join(chart_file_name(chart.title()))
}
