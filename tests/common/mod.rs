#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

const SCHEMA: &str = "
CREATE TABLE Stations (Station_ID INTEGER PRIMARY KEY, Station_Name TEXT NOT NULL);
CREATE TABLE Stops (
    Stop_ID INTEGER PRIMARY KEY,
    Stop_Name TEXT NOT NULL,
    Direction TEXT NOT NULL,
    ADA INTEGER NOT NULL,
    Latitude REAL NOT NULL,
    Longitude REAL NOT NULL,
    Station_ID INTEGER NOT NULL REFERENCES Stations(Station_ID)
);
CREATE TABLE Lines (Line_ID INTEGER PRIMARY KEY, Color TEXT NOT NULL);
CREATE TABLE StopDetails (
    Stop_ID INTEGER NOT NULL REFERENCES Stops(Stop_ID),
    Line_ID INTEGER NOT NULL REFERENCES Lines(Line_ID)
);
CREATE TABLE Ridership (
    Station_ID INTEGER NOT NULL REFERENCES Stations(Station_ID),
    Ride_Date TEXT NOT NULL,
    Type_of_Day TEXT NOT NULL,
    Num_Riders INTEGER NOT NULL
);
";

/// A handful of Loop and North Side stations.
///
/// Totals: 6 stations, 7 stops, 14 ridership rows, 6,920 riders,
/// dates 2020-01-02 through 2021-03-06.
pub fn loop_dataset(dir: &Path) -> PathBuf {
    let path = dir.join("loop.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(SCHEMA).unwrap();

    for (id, name) in [
        (40260, "State/Lake"),
        (40380, "Clark/Lake"),
        (40730, "Washington/Wells"),
        (40900, "Howard"),
        (41320, "Belmont-North Main"),
        (40060, "Belmont-O'Hare"),
    ] {
        conn.execute("INSERT INTO Stations VALUES (?1, ?2)", params![id, name])
            .unwrap();
    }
    for (id, color) in [(1, "Red"), (2, "Blue"), (3, "Green"), (4, "Yellow")] {
        conn.execute("INSERT INTO Lines VALUES (?1, ?2)", params![id, color])
            .unwrap();
    }

    // (stop id, name, direction, ada, lat, lon, station, line)
    for (id, name, dir, ada, lat, lon, station, line) in [
        (30003, "Howard (Red)", "N", 1, 42.019063, -87.672892, 40900, 1),
        (30004, "Howard (Red)", "S", 1, 42.019063, -87.672892, 40900, 1),
        (30005, "Clark/Lake (Blue)", "E", 1, 41.885737, -87.630886, 40380, 2),
        (30007, "State/Lake (Green)", "E", 0, 41.88574, -87.627835, 40260, 3),
        (30008, "Washington/Wells (Green)", "N", 1, 41.882695, -87.63378, 40730, 3),
        (30009, "Belmont (Red)", "N", 1, 41.939751, -87.65338, 41320, 1),
        (30010, "Belmont (Blue)", "E", 0, 41.938132, -87.712359, 40060, 2),
    ] {
        conn.execute(
            "INSERT INTO Stops VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![id, name, dir, ada, lat, lon, station],
        )
        .unwrap();
        conn.execute("INSERT INTO StopDetails VALUES (?1, ?2)", params![id, line])
            .unwrap();
    }

    for (station, date, kind, riders) in [
        (40260, "2020-01-02", "W", 1000),
        (40260, "2020-01-04", "A", 400),
        (40260, "2020-01-05", "U", 300),
        (40260, "2021-02-01", "W", 1200),
        (40260, "2021-03-06", "A", 600),
        (40730, "2021-01-04", "W", 50),
        (40730, "2021-01-05", "W", 60),
        (40730, "2021-01-06", "W", 70),
        (40380, "2021-01-04", "W", 500),
        (40380, "2021-01-05", "W", 600),
        (40380, "2021-01-06", "W", 700),
        (40380, "2021-01-07", "W", 800),
        (40380, "2021-01-08", "W", 640),
        (40900, "2021-01-02", "A", 0),
    ] {
        conn.execute(
            "INSERT INTO Ridership VALUES (?1, ?2, ?3, ?4)",
            params![station, date, kind, riders],
        )
        .unwrap();
    }

    path
}

/// Ten stations, fifty stops, and a thousand weekday entries of 25 riders
/// spread between 2019-01-01 and 2021-12-31.
pub fn uniform_dataset(dir: &Path) -> PathBuf {
    let path = dir.join("uniform.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(SCHEMA).unwrap();
    conn.execute("INSERT INTO Lines VALUES (1, 'Red')", []).unwrap();

    for station in 0..10 {
        conn.execute(
            "INSERT INTO Stations VALUES (?1, ?2)",
            params![41000 + station, format!("Station {station}")],
        )
        .unwrap();
    }
    for stop in 0..50 {
        conn.execute(
            "INSERT INTO Stops VALUES (?1, ?2, 'N', 1, 41.9, -87.65, ?3)",
            params![30000 + stop, format!("Stop {stop}"), 41000 + stop % 10],
        )
        .unwrap();
        conn.execute("INSERT INTO StopDetails VALUES (?1, 1)", params![30000 + stop])
            .unwrap();
    }
    for row in 0..999 {
        conn.execute(
            "INSERT INTO Ridership VALUES (?1, date('2019-01-01', ?2), 'W', 25)",
            params![41000 + row % 10, format!("+{row} days")],
        )
        .unwrap();
    }
    conn.execute(
        "INSERT INTO Ridership VALUES (41000, '2021-12-31', 'W', 25)",
        [],
    )
    .unwrap();

    path
}
