//! Spherical-earth geodesy
//!
//! Great-circle distance, forward azimuth, path interpolation, and the
//! vertical elevation angle between two sites. All angles in degrees at
//! the API boundary, radians internally.

use crate::{GeoPoint, EARTH_RADIUS_KM};

/// Great-circle distance between two points, in km (haversine).
///
/// The atan2 form stays numerically stable as the half-chord term
/// approaches 1 near antipodal points, where acos would lose precision.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude_deg() - a.latitude_deg()).to_radians();
    let d_lon = (b.longitude_deg() - a.longitude_deg()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude_rad().cos() * b.latitude_rad().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Forward azimuth from `a` to `b` in degrees, normalized to [0, 360).
///
/// Coincident points reduce to atan2(0, 0) = 0: a defined but meaningless
/// bearing, not an error.
pub fn initial_bearing_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lon = (b.longitude_deg() - a.longitude_deg()).to_radians();
    let (phi1, phi2) = (a.latitude_rad(), b.latitude_rad());

    let y = d_lon.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lon.cos();

    normalize_bearing_deg(y.atan2(x).to_degrees())
}

/// Wrap a bearing into [0, 360).
///
/// rem_euclid alone can round up to exactly 360.0 for tiny negative
/// inputs, so the result is folded back explicitly.
pub fn normalize_bearing_deg(bearing_deg: f64) -> f64 {
    let n = bearing_deg.rem_euclid(360.0);
    if n >= 360.0 {
        0.0
    } else {
        n
    }
}

/// Vertical elevation angle in degrees for a horizontal run and a height
/// difference.
///
/// Zero horizontal distance is resolved to the limiting value rather than
/// dividing by zero: straight up/down by the sign of the height
/// difference, 0 when both are zero.
pub fn elevation_angle_deg(horizontal_distance_km: f64, height_difference_m: f64) -> f64 {
    if horizontal_distance_km == 0.0 {
        if height_difference_m == 0.0 {
            return 0.0;
        }
        tracing::debug!(
            height_difference_m,
            "zero-distance elevation clamped to vertical"
        );
        return 90.0_f64.copysign(height_difference_m);
    }
    (height_difference_m / (horizontal_distance_km * 1000.0))
        .atan()
        .to_degrees()
}

/// Point a given fraction of the way along the great circle from `a` to
/// `b` (0 = `a`, 1 = `b`). Used to generate positions for a batched
/// terrain-profile elevation lookup.
pub fn intermediate_point(a: GeoPoint, b: GeoPoint, fraction: f64) -> GeoPoint {
    let f = fraction.clamp(0.0, 1.0);
    let delta = distance_km(a, b) / EARTH_RADIUS_KM;
    if delta == 0.0 {
        return a;
    }

    let sin_delta = delta.sin();
    if sin_delta.abs() < f64::EPSILON {
        // Antipodal endpoints: the great circle is ambiguous
        return if f < 0.5 { a } else { b };
    }

    let ka = ((1.0 - f) * delta).sin() / sin_delta;
    let kb = (f * delta).sin() / sin_delta;

    let (phi1, lam1) = (a.latitude_rad(), a.longitude_rad());
    let (phi2, lam2) = (b.latitude_rad(), b.longitude_rad());

    let x = ka * phi1.cos() * lam1.cos() + kb * phi2.cos() * lam2.cos();
    let y = ka * phi1.cos() * lam1.sin() + kb * phi2.cos() * lam2.sin();
    let z = ka * phi1.sin() + kb * phi2.sin();

    // atan2 keeps both angles inside the valid coordinate ranges
    GeoPoint {
        latitude_deg: z.atan2((x * x + y * y).sqrt()).to_degrees(),
        longitude_deg: y.atan2(x).to_degrees(),
    }
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// 16-wind compass label for a bearing, for display next to the numeric
/// azimuth.
pub fn compass_point(bearing_deg: f64) -> &'static str {
    let idx = ((normalize_bearing_deg(bearing_deg) / 22.5).round() as usize) % 16;
    COMPASS_POINTS[idx]
}
