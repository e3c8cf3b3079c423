use std::path::Path;

use rusqlite::{params, Connection};

use super::Dataset;

pub(crate) const SCHEMA: &str = "
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

/// Small downtown slice of the network.
///
/// Totals: 8 stations, 10 stops, 23 ridership rows, 13,330 riders,
/// dates 2020-01-02 through 2021-06-01.
pub(crate) fn populate(conn: &Connection) {
    conn.execute_batch(SCHEMA).unwrap();

    let stations = [
        (40260, "State/Lake"),
        (40380, "Clark/Lake"),
        (40730, "Washington/Wells"),
        (41450, "Chicago/State"),
        (40900, "Howard"),
        (41320, "Belmont-North Main"),
        (40060, "Belmont-O'Hare"),
        (40640, "Adams/Wabash"),
    ];
    for (id, name) in stations {
        conn.execute("INSERT INTO Stations VALUES (?1, ?2)", params![id, name])
            .unwrap();
    }

    let lines = [(1, "Red"), (2, "Blue"), (3, "Green"), (4, "Yellow")];
    for (id, color) in lines {
        conn.execute("INSERT INTO Lines VALUES (?1, ?2)", params![id, color])
            .unwrap();
    }

    // (stop id, name, direction, ada, lat, lon, station, line)
    let stops = [
        (30001, "Chicago (Red)", "N", 1, 41.896671, -87.628176, 41450, 1),
        (30002, "Chicago (Red)", "S", 1, 41.896671, -87.628176, 41450, 1),
        (30003, "Howard (Red)", "N", 1, 42.019063, -87.672892, 40900, 1),
        (30004, "Howard (Red)", "S", 1, 42.019063, -87.672892, 40900, 1),
        (30005, "Clark/Lake (Blue)", "E", 1, 41.885737, -87.630886, 40380, 2),
        (30006, "Clark/Lake (Blue)", "W", 0, 41.885737, -87.630886, 40380, 2),
        (30007, "State/Lake (Green)", "E", 0, 41.88574, -87.627835, 40260, 3),
        (30008, "Washington/Wells (Green)", "N", 1, 41.882695, -87.63378, 40730, 3),
        (30009, "Belmont (Red)", "N", 1, 41.939751, -87.65338, 41320, 1),
        (30010, "Belmont (Blue)", "E", 0, 41.938132, -87.712359, 40060, 2),
    ];
    for (id, name, dir, ada, lat, lon, station, line) in stops {
        conn.execute(
            "INSERT INTO Stops VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![id, name, dir, ada, lat, lon, station],
        )
        .unwrap();
        conn.execute("INSERT INTO StopDetails VALUES (?1, ?2)", params![id, line])
            .unwrap();
    }

    let mut rides: Vec<(i64, String, &str, i64)> = vec![
        (40260, "2020-01-02".into(), "W", 1000),
        (40260, "2020-01-04".into(), "A", 400),
        (40260, "2020-01-05".into(), "U", 300),
        (40260, "2021-02-01".into(), "W", 1200),
        (40260, "2021-03-06".into(), "A", 600),
        (40730, "2021-01-04".into(), "W", 50),
        (40730, "2021-01-05".into(), "W", 60),
        (40730, "2021-01-06".into(), "W", 70),
        (41450, "2020-06-01".into(), "W", 900),
        (41450, "2021-06-01".into(), "W", 950),
        (40900, "2021-01-02".into(), "A", 0),
    ];
    for day in 1..=12 {
        rides.push((40380, format!("2021-01-{day:02}"), "W", day * 100));
    }
    for (station, date, kind, riders) in rides {
        conn.execute(
            "INSERT INTO Ridership VALUES (?1, ?2, ?3, ?4)",
            params![station, date, kind, riders],
        )
        .unwrap();
    }
}

pub(crate) fn sample_dataset() -> Dataset {
    let conn = Connection::open_in_memory().unwrap();
    populate(&conn);
    Dataset::from_connection(conn)
}

pub(crate) fn write_dataset(path: &Path) {
    let conn = Connection::open(path).unwrap();
    populate(&conn);
}
