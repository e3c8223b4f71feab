//! Spherical-triangle look angles
//!
//! Works on the triangle {Earth center, observer, satellite}: the central
//! angle between observer and sub-satellite point gives the slant range
//! by the law of cosines and the elevation from the projection onto the
//! observer's horizon plane.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use link_geometry::{geodesy, GeoPoint, EARTH_RADIUS_KM};

use crate::{PointingError, Result};

/// Below this the central angle is treated as zero (observer at the
/// sub-satellite point). Wide enough to absorb the rounding of the unit
/// vector dot product for coincident points.
const ZENITH_SIN_EPSILON: f64 = 1e-6;

/// Pointing solution from an observer to a satellite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SatelliteGeometry {
    /// 0-360 degrees from true north
    pub azimuth_deg: f64,
    /// Display elevation, clamped at the horizon
    pub elevation_deg: f64,
    /// Raw elevation; negative means the satellite is below the horizon
    pub elevation_true_deg: f64,
    pub slant_range_km: f64,
    pub visible: bool,
}

/// Unit position vector for a surface point.
fn unit_vector(p: GeoPoint) -> Vector3<f64> {
    let (lat, lon) = (p.latitude_rad(), p.longitude_rad());
    Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

/// Look angles from `observer` to a satellite above `sub_satellite` at
/// the given orbital altitude.
pub fn look_angles(
    observer: GeoPoint,
    sub_satellite: GeoPoint,
    orbital_altitude_km: f64,
) -> Result<SatelliteGeometry> {
    if !orbital_altitude_km.is_finite() || orbital_altitude_km <= 0.0 {
        return Err(PointingError::InvalidAltitude(orbital_altitude_km));
    }

    let r = EARTH_RADIUS_KM;
    let orbit_r = r + orbital_altitude_km;

    // cos of the central angle; clamped so rounding cannot push acos out
    // of its domain for (near-)coincident points
    let cos_psi = unit_vector(observer)
        .dot(&unit_vector(sub_satellite))
        .clamp(-1.0, 1.0);
    let psi = cos_psi.acos();

    let slant_range_km =
        (orbit_r * orbit_r + r * r - 2.0 * r * orbit_r * cos_psi).sqrt();

    let elevation_true_deg = if psi.sin() < ZENITH_SIN_EPSILON && cos_psi > 0.0 {
        tracing::debug!("observer at sub-satellite point, elevation clamped to zenith");
        90.0
    } else {
        ((cos_psi - r / orbit_r) / psi.sin()).atan().to_degrees()
    };

    let d_lon = sub_satellite.longitude_rad() - observer.longitude_rad();
    let azimuth_deg = geodesy::normalize_bearing_deg(
        d_lon
            .sin()
            .atan2(
                observer.latitude_rad().cos() * sub_satellite.latitude_rad().tan()
                    - observer.latitude_rad().sin() * d_lon.cos(),
            )
            .to_degrees(),
    );

    let visible = elevation_true_deg > 0.0;
    if !visible {
        tracing::debug!(elevation_true_deg, "satellite below the horizon");
    }

    Ok(SatelliteGeometry {
        azimuth_deg,
        elevation_deg: elevation_true_deg.max(0.0),
        elevation_true_deg,
        slant_range_km,
        visible,
    })
}
