//! Location identity and geography.

use std::fmt;

/// Error returned when constructing a point from out-of-range coordinates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinates: {reason}")]
pub struct InvalidCoordinates {
    reason: &'static str,
}

/// Identity of a location in the network snapshot.
///
/// Locations are reference data owned by the caller; the engine compares
/// and hashes their ids but never mutates the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId(pub u64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated latitude/longitude pair in degrees.
///
/// # Examples
///
/// ```
/// use bus_router::domain::GeoPoint;
///
/// let chennai = GeoPoint::new(13.0827, 80.2707).unwrap();
/// assert_eq!(chennai.latitude(), 13.0827);
///
/// // Out-of-range coordinates are rejected
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// assert!(GeoPoint::new(0.0, -181.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Create a point from degrees.
    ///
    /// Latitude must lie within `-90..=90`, longitude within `-180..=180`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidCoordinates {
                reason: "latitude must be within -90..=90",
            });
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates {
                reason: "longitude must be within -180..=180",
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to another point in kilometres, via the
    /// Haversine formula.
    pub fn distance_km(&self, other: &Self) -> f64 {
        const EARTH_RADIUS_KM: f64 = 6371.0;

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// A place buses serve: a terminus or an intermediate stop location.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Stable identity; the graph node key.
    pub id: LocationId,
    /// Human-readable name.
    pub name: String,
    /// Coordinates, when known. Only used for distance fallback.
    pub position: Option<GeoPoint>,
}

impl Location {
    /// Create a location without coordinates.
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: None,
        }
    }

    /// Attach coordinates.
    pub fn with_position(mut self, position: GeoPoint) -> Self {
        self.position = Some(position);
        self
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any in-range pair constructs successfully
        #[test]
        fn in_range_always_constructs(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            prop_assert!(GeoPoint::new(lat, lon).is_ok());
        }

        /// Out-of-range latitude is always rejected
        #[test]
        fn bad_latitude_rejected(lat in 90.0f64..1000.0, lon in -180.0f64..=180.0) {
            prop_assume!(lat > 90.0);
            prop_assert!(GeoPoint::new(lat, lon).is_err());
        }

        /// Distance is symmetric
        #[test]
        fn distance_symmetric(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let a = GeoPoint::new(lat1, lon1).unwrap();
            let b = GeoPoint::new(lat2, lon2).unwrap();
            prop_assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-6);
        }

        /// Distance is never negative and never exceeds half the
        /// circumference
        #[test]
        fn distance_bounded(
            lat1 in -90.0f64..=90.0, lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lon2 in -180.0f64..=180.0,
        ) {
            let a = GeoPoint::new(lat1, lon1).unwrap();
            let b = GeoPoint::new(lat2, lon2).unwrap();
            let distance = a.distance_km(&b);
            prop_assert!(distance >= 0.0);
            prop_assert!(distance <= 6371.0 * std::f64::consts::PI + 1.0);
        }
    }
}
