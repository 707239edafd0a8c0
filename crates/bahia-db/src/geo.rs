//! Great-circle distance math for the "near me" feature.
//!
//! Coordinates are stored as decimal strings in the database (imported
//! listings arrive that way); parsing happens here, and a row whose
//! coordinates do not parse is treated as having no location at all
//! rather than poisoning distance comparisons.

/// Mean Earth radius in kilometers, as used by the Haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A parsed latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinates {
    /// Parse a coordinate pair from the decimal strings stored in the
    /// database. Returns `None` if either component is not a finite
    /// number, so malformed rows are excluded from distance filters
    /// instead of comparing as `NaN`.
    pub fn parse(latitude: &str, longitude: &str) -> Option<Self> {
        let latitude: f64 = latitude.trim().parse().ok()?;
        let longitude: f64 = longitude.trim().parse().ok()?;
        if latitude.is_finite() && longitude.is_finite() {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }
}

/// Great-circle distance between two points in kilometers (Haversine).
#[allow(clippy::arithmetic_side_effects)]
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Whether the stored coordinate strings fall within `radius_km` of the
/// reference point. Unparsable coordinates are never within any radius.
pub fn within_radius(reference: Coordinates, latitude: &str, longitude: &str, radius_km: f64) -> bool {
    Coordinates::parse(latitude, longitude)
        .is_some_and(|point| haversine_km(reference, point) <= radius_km)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    const BAYFRONT: Coordinates = Coordinates {
        latitude: 32.6401,
        longitude: -117.0842,
    };

    #[test]
    fn zero_distance_at_same_point() {
        let d = haversine_km(BAYFRONT, BAYFRONT);
        assert!(d.abs() < 1e-9, "distance to self should be ~0, got {d}");
    }

    #[test]
    fn point_at_reference_is_always_within_radius() {
        assert!(within_radius(BAYFRONT, "32.6401", "-117.0842", 0.0));
    }

    #[test]
    fn known_distance_downtown_to_eastlake() {
        // Roughly 10.5 km apart; assert a sane bracket rather than an
        // exact float.
        let eastlake = Coordinates {
            latitude: 32.6480,
            longitude: -116.9720,
        };
        let d = haversine_km(BAYFRONT, eastlake);
        assert!(d > 9.0 && d < 12.0, "unexpected distance {d}");
    }

    #[test]
    fn outside_radius_is_excluded() {
        assert!(!within_radius(BAYFRONT, "32.6480", "-116.9720", 5.0));
        assert!(within_radius(BAYFRONT, "32.6480", "-116.9720", 15.0));
    }

    #[test]
    fn unparsable_coordinates_are_excluded() {
        assert!(!within_radius(BAYFRONT, "not-a-number", "-117.0842", 100.0));
        assert!(!within_radius(BAYFRONT, "", "", 100.0));
        assert!(!within_radius(BAYFRONT, "NaN", "-117.0842", 100.0));
    }

    #[test]
    fn parse_accepts_surrounding_whitespace() {
        let parsed = Coordinates::parse(" 32.64 ", " -117.08 ").unwrap();
        assert!((parsed.latitude - 32.64).abs() < 1e-12);
        assert!((parsed.longitude + 117.08).abs() < 1e-12);
    }

    #[test]
    fn antimeridian_distance_is_symmetric() {
        let a = Coordinates {
            latitude: 0.0,
            longitude: 179.9,
        };
        let b = Coordinates {
            latitude: 0.0,
            longitude: -179.9,
        };
        let d1 = haversine_km(a, b);
        let d2 = haversine_km(b, a);
        assert!((d1 - d2).abs() < 1e-9);
        assert!(d1 < 30.0, "short hop across the antimeridian, got {d1}");
    }
}
