//! Link Geometry Library
//!
//! Spherical-earth geodesy for antenna link planning:
//! - Haversine distance and initial bearing between coordinates
//! - Vertical elevation angle between two sites
//! - Simplified first-Fresnel-zone obstruction estimate
//! - Unit conversions (dBm/mW, frequency/wavelength, meters/km)
//!
//! Everything here is a pure, synchronous function over validated value
//! types. Coordinates are checked at construction, so the math never sees
//! NaN or out-of-range degrees.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod geodesy;
pub mod profile;
pub mod units;

pub use geodesy::{compass_point, distance_km, elevation_angle_deg, initial_bearing_deg};
pub use profile::{FresnelResult, DEFAULT_CLEARANCE_M, DEFAULT_PROFILE_INTERVALS};

/// Mean Earth radius in km (spherical model)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("latitude {0} is not a finite value in [-90, 90]")]
    InvalidLatitude(f64),
    #[error("longitude {0} is not a finite value in [-180, 180]")]
    InvalidLongitude(f64),
    #[error("height {0} m is not finite")]
    InvalidHeight(f64),
    #[error("distance {0} km is outside the valid domain")]
    InvalidDistance(f64),
    #[error("frequency {0} GHz must be finite and positive")]
    InvalidFrequency(f64),
    #[error("power {0} mW must be finite and positive")]
    InvalidPower(f64),
    #[error("wavelength {0} m must be finite and positive")]
    InvalidWavelength(f64),
    #[error("path profile needs at least two samples, got {0}")]
    ProfileTooShort(usize),
}

pub type Result<T> = std::result::Result<T, GeometryError>;

/// A validated geographic coordinate on the spherical Earth model.
///
/// Constructed only through [`GeoPoint::new`], so downstream math can rely
/// on finite, in-range degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint", into = "RawGeoPoint")]
pub struct GeoPoint {
    latitude_deg: f64,
    longitude_deg: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawGeoPoint {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = GeometryError;

    fn try_from(raw: RawGeoPoint) -> Result<Self> {
        GeoPoint::new(raw.latitude_deg, raw.longitude_deg)
    }
}

impl From<GeoPoint> for RawGeoPoint {
    fn from(p: GeoPoint) -> Self {
        Self {
            latitude_deg: p.latitude_deg,
            longitude_deg: p.longitude_deg,
        }
    }
}

impl GeoPoint {
    /// Validate and construct a coordinate. Rejects non-finite or
    /// out-of-range degrees instead of letting NaN flow into the math.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(GeometryError::InvalidLatitude(latitude_deg));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(GeometryError::InvalidLongitude(longitude_deg));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// One terrain/altitude sample from the elevation-lookup collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElevationSample {
    pub point: GeoPoint,
    pub height_m: f64,
}

impl ElevationSample {
    pub fn new(point: GeoPoint, height_m: f64) -> Result<Self> {
        if !height_m.is_finite() {
            return Err(GeometryError::InvalidHeight(height_m));
        }
        Ok(Self { point, height_m })
    }
}
