use serde::{Deserialize, Serialize};

/// A station in the 'L' system. One station may own several stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Station identifier
    pub id: i64,
    /// Station name as stored (e.g., "State/Lake")
    pub name: String,
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.id, self.name)
    }
}

/// Compass direction a stop serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Single-letter code used in the `Stops.Direction` column.
    pub fn code(&self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Direction {
    type Err = crate::error::CtaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            _ => Err(crate::error::CtaError::ParseError(format!(
                "Unknown direction: '{s}'"
            ))),
        }
    }
}

/// A stop served by a line, as listed by the line/direction report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopListing {
    pub name: String,
    /// Direction code as stored (N/S/E/W)
    pub direction: String,
    /// ADA accessibility flag
    pub accessible: bool,
}

impl StopListing {
    /// Human-readable accessibility phrase for the ADA flag.
    pub fn accessibility(&self) -> &'static str {
        if self.accessible {
            "handicap accessible"
        } else {
            "not handicap accessible"
        }
    }
}

/// A station with the coordinate of one of its stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}
