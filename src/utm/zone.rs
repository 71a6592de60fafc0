//! UTM zone numbers, including the Norway and Svalbard exceptions

/// Returns the UTM zone (1..=60) containing a geographic coordinate
///
/// Longitude is wrapped into [-180, 180) first. Between 56 and 64 degrees
/// north, 3..12 degrees east belongs to zone 32 (Norway). Between 72 and 84
/// degrees north, zones 32, 34 and 36 are absorbed by 31, 33, 35 and 37
/// (Svalbard). All band bounds are lower-inclusive, upper-exclusive.
pub fn resolve_zone(latitude: f64, longitude: f64) -> i32 {
    let lon = normalize_longitude(longitude);

    let mut zone = (((lon + 180.0) / 6.0).floor() as i32 + 1).clamp(1, 60);

    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&lon) {
        zone = 32;
    }

    if (72.0..84.0).contains(&latitude) {
        if (0.0..9.0).contains(&lon) {
            zone = 31;
        } else if (9.0..21.0).contains(&lon) {
            zone = 33;
        } else if (21.0..33.0).contains(&lon) {
            zone = 35;
        } else if (33.0..42.0).contains(&lon) {
            zone = 37;
        }
    }

    zone
}

/// Wraps a longitude into [-180, 180)
pub fn normalize_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}
