use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use plotters::prelude::*;
use tracing::{info, warn};

use super::charts::{display_path, Chart, ChartKind, ChartRenderer, ChartTarget, MapChart, SeriesChart};
use super::number::format_thousands;
use crate::config::{ChartConfig, MapExtent};
use crate::error::CtaError;

const SERIES_COLORS: [RGBColor; 4] = [BLUE, RED, GREEN, MAGENTA];
/// Horizontal resolution the background map is resampled to before drawing.
const BACKGROUND_COLUMNS: u32 = 160;
const MAX_X_LABELS: usize = 12;

/// Draws charts as SVG files with `plotters`.
///
/// Displayed charts land in [`ChartConfig::output_dir`] under a name derived
/// from the title; saved charts go exactly where the target says.
pub struct PlottersRenderer {
    config: ChartConfig,
}

impl PlottersRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    fn draw_series(&self, chart: &SeriesChart, path: &Path) -> Result<(), CtaError> {
        let root = SVGBackend::new(path, (self.config.width, self.config.height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let n = chart.categories.len().max(1);
        let y_max = ((chart.max_value().max(1) as f64) * 1.1).ceil() as i64;
        let categories = &chart.categories;
        let label_for = |x: &f64| {
            let idx = x.round();
            if (x - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            categories.get(idx as usize).cloned().unwrap_or_default()
        };

        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 24))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(80)
            .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0i64..y_max)
            .map_err(chart_err)?;

        ctx.configure_mesh()
            .x_desc(&chart.x_desc)
            .y_desc(&chart.y_desc)
            .x_labels(n.min(MAX_X_LABELS))
            .x_label_formatter(&label_for)
            .y_label_formatter(&|v: &i64| format_thousands(*v))
            .draw()
            .map_err(chart_err)?;

        for (i, series) in chart.series.iter().enumerate() {
            let color = SERIES_COLORS[i % SERIES_COLORS.len()];
            let points: Vec<(f64, i64)> = series
                .values
                .iter()
                .enumerate()
                .filter_map(|(x, v)| v.map(|v| (x as f64, v)))
                .collect();

            match chart.kind {
                ChartKind::Line => {
                    ctx.draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                        .map_err(chart_err)?
                        .label(series.name.as_str())
                        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
                    ctx.draw_series(
                        points
                            .iter()
                            .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
                    )
                    .map_err(chart_err)?;
                }
                ChartKind::Bar => {
                    ctx.draw_series(points.iter().map(|&(x, y)| {
                        Rectangle::new([(x - 0.4, 0), (x + 0.4, y)], color.filled())
                    }))
                    .map_err(chart_err)?
                    .label(series.name.as_str())
                    .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
                }
            }
        }

        if chart.series.len() > 1 {
            ctx.configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(chart_err)?;
        }

        root.present().map_err(chart_err)?;
        Ok(())
    }

    fn draw_map(&self, map: &MapChart, path: &Path) -> Result<(), CtaError> {
        let extent = self.config.map_extent;
        let root = SVGBackend::new(path, (self.config.width, self.config.height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_err)?;

        let mut ctx = ChartBuilder::on(&root)
            .caption(&map.title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(extent.lon_min..extent.lon_max, extent.lat_min..extent.lat_max)
            .map_err(chart_err)?;

        match background_tiles(&self.config.map_background, extent) {
            Ok(tiles) => {
                ctx.draw_series(tiles).map_err(chart_err)?;
            }
            Err(e) => warn!(
                path = %self.config.map_background.display(),
                error = %e,
                "drawing station map without background"
            ),
        }

        ctx.configure_mesh()
            .disable_mesh()
            .x_desc("Longitude")
            .y_desc("Latitude")
            .draw()
            .map_err(chart_err)?;

        ctx.draw_series(
            map.points
                .iter()
                .map(|p| Circle::new((p.longitude, p.latitude), 4, BLUE.filled())),
        )
        .map_err(chart_err)?;
        ctx.draw_series(map.points.iter().map(|p| {
            Text::new(
                p.label.clone(),
                (p.longitude, p.latitude),
                ("sans-serif", 12).into_font().color(&BLACK),
            )
        }))
        .map_err(chart_err)?;

        root.present().map_err(chart_err)?;
        Ok(())
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&mut self, chart: &Chart, target: &ChartTarget) -> Result<Option<PathBuf>, CtaError> {
        let path = match target {
            ChartTarget::Display => display_path(&self.config.output_dir, chart),
            ChartTarget::Save(path) => path.clone(),
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(chart_err)?;
        }

        match chart {
            Chart::Series(series) => self.draw_series(series, &path)?,
            Chart::Map(map) => self.draw_map(map, &path)?,
        }

        info!(path = %path.display(), title = chart.title(), "chart written");
        Ok(Some(path))
    }
}

/// Resample the background image into filled cells covering `extent`.
fn background_tiles(
    path: &Path,
    extent: MapExtent,
) -> Result<Vec<Rectangle<(f64, f64)>>, CtaError> {
    let image = image::open(path)?;
    let columns = BACKGROUND_COLUMNS.min(image.width().max(1));
    let rows = ((image.height() as f64 / image.width().max(1) as f64) * columns as f64)
        .round()
        .max(1.0) as u32;
    let pixels = image.resize_exact(columns, rows, FilterType::Triangle).to_rgb8();

    let cell_w = (extent.lon_max - extent.lon_min) / columns as f64;
    let cell_h = (extent.lat_max - extent.lat_min) / rows as f64;

    Ok(pixels
        .enumerate_pixels()
        .map(|(x, y, px)| {
            let [r, g, b] = px.0;
            let left = extent.lon_min + x as f64 * cell_w;
            let top = extent.lat_max - y as f64 * cell_h;
            Rectangle::new([(left, top), (left + cell_w, top - cell_h)], RGBColor(r, g, b).filled())
        })
        .collect())
}

fn chart_err<E: std::fmt::Display>(e: E) -> CtaError {
    CtaError::Chart(e.to_string())
}
