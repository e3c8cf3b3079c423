mod tables;
mod charts;
mod number;
mod render;

pub use tables::{
    format_notice,
    format_overview, print_overview,
    format_station_matches, print_station_matches,
    format_day_types, print_day_types,
    format_weekday_ranking, print_weekday_ranking,
    format_line_stops, print_line_stops,
    format_stop_counts, print_stop_counts,
    format_yearly, print_yearly,
    format_monthly, print_monthly,
    format_daily_series, print_daily_series,
    format_nearby, print_nearby,
};
pub use charts::{
    chart_file_name, display_path, Chart, ChartKind, ChartRenderer, ChartTarget, MapChart,
    MapPoint, RecordingRenderer, Series, SeriesChart,
};
pub use number::{format_percent, format_thousands};
pub use render::PlottersRenderer;
