pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod reports;
pub mod shell;
pub mod visualization;

pub use config::AppConfig;
pub use db::Dataset;
pub use error::CtaError;
pub use models::{Coordinate, DayType, Direction, Station, StopListing};
pub use reports::Reporter;
pub use shell::Shell;
