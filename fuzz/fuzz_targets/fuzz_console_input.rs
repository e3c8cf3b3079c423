#![no_main]

use cta_ridership_analyzer::models::{parse_degrees, BoundingBox, Coordinate, DayType, Direction};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let _ = text.parse::<Direction>();
    let _ = text.parse::<DayType>();

    // "lat,lon" as typed at the two coordinate prompts
    let Some((lat, lon)) = text.split_once(',') else {
        return;
    };
    let (Ok(lat), Ok(lon)) = (parse_degrees(lat), parse_degrees(lon)) else {
        return;
    };
    if let Ok(center) = Coordinate::new(lat, lon) {
        let bounds = BoundingBox::one_mile_around(center);
        assert!(bounds.lat_min <= bounds.lat_max);
        assert!(bounds.lon_min <= bounds.lon_max);
    }
});
