use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while querying and reporting on the ridership dataset.
#[derive(Error, Debug)]
pub enum CtaError {
    #[error("Dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("No station found...")]
    NoStationFound,

    #[error("Multiple stations found...")]
    MultipleStationsFound,

    #[error("No such line...")]
    NoSuchLine,

    #[error("That line does not run in the direction chosen...")]
    NoStopsInDirection,

    #[error("Latitude entered is out of bounds...")]
    LatitudeOutOfBounds,

    #[error("Longitude entered is out of bounds...")]
    LongitudeOutOfBounds,
}

impl CtaError {
    /// Whether this error ends only the current report rather than the session.
    ///
    /// Notices are printed to the user and the command loop carries on;
    /// everything else (dataset, IO, config) is fatal.
    pub fn is_notice(&self) -> bool {
        matches!(
            self,
            CtaError::Chart(_)
                | CtaError::ParseError(_)
                | CtaError::NoStationFound
                | CtaError::MultipleStationsFound
                | CtaError::NoSuchLine
                | CtaError::NoStopsInDirection
                | CtaError::LatitudeOutOfBounds
                | CtaError::LongitudeOutOfBounds
        )
    }
}

impl From<toml::de::Error> for CtaError {
    fn from(e: toml::de::Error) -> Self {
        CtaError::Config(e.to_string())
    }
}

impl From<image::ImageError> for CtaError {
    fn from(e: image::ImageError) -> Self {
        CtaError::Chart(e.to_string())
    }
}
