//! Fresnel-zone obstruction estimate
//!
//! Simplified first-Fresnel clearance check for a terrestrial link. This
//! is a planning heuristic, not engineering-grade clearance analysis: the
//! radius uses a flat coefficient fit and the path check compares terrain
//! samples against a straight line between the endpoint elevations.

use serde::{Deserialize, Serialize};

use crate::{geodesy, ElevationSample, GeoPoint, GeometryError, Result};

/// Margin above the reference line before an intermediate sample counts
/// as an obstruction.
pub const DEFAULT_CLEARANCE_M: f64 = 50.0;

/// Default number of path intervals for terrain-profile sampling.
pub const DEFAULT_PROFILE_INTERVALS: usize = 50;

/// Obstruction estimate for one link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FresnelResult {
    /// Taller endpoint elevation plus the Fresnel radius: the height an
    /// obstacle must stay under along the path.
    pub max_obstacle_height_m: f64,
    pub line_of_sight_clear: bool,
}

/// Simplified first-Fresnel-zone radius in meters.
///
/// Uses the geodesic link distance; the frequency must be positive for
/// the division to be defined.
pub fn fresnel_radius_m(distance_km: f64, frequency_ghz: f64) -> Result<f64> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(GeometryError::InvalidDistance(distance_km));
    }
    if !frequency_ghz.is_finite() || frequency_ghz <= 0.0 {
        return Err(GeometryError::InvalidFrequency(frequency_ghz));
    }
    Ok(24.8 * (distance_km / (4.0 * frequency_ghz)).sqrt())
}

/// Two-endpoint estimate, used when no intermediate terrain data is
/// available. With nothing known about the path, it is reported clear and
/// the obstacle ceiling comes from the taller endpoint.
pub fn obstruction_estimate(
    alt_a_m: f64,
    alt_b_m: f64,
    distance_km: f64,
    frequency_ghz: f64,
) -> Result<FresnelResult> {
    if !alt_a_m.is_finite() {
        return Err(GeometryError::InvalidHeight(alt_a_m));
    }
    if !alt_b_m.is_finite() {
        return Err(GeometryError::InvalidHeight(alt_b_m));
    }
    let radius = fresnel_radius_m(distance_km, frequency_ghz)?;
    Ok(FresnelResult {
        max_obstacle_height_m: alt_a_m.max(alt_b_m) + radius,
        line_of_sight_clear: true,
    })
}

/// Positions for a batched elevation lookup along the great-circle path:
/// `intervals + 1` points from `a` to `b` inclusive.
pub fn sample_positions(a: GeoPoint, b: GeoPoint, intervals: usize) -> Vec<GeoPoint> {
    let n = intervals.max(1);
    (0..=n)
        .map(|i| geodesy::intermediate_point(a, b, i as f64 / n as f64))
        .collect()
}

/// Terrain-profile variant: flags obstruction when any intermediate
/// sample rises more than `clearance_m` above the straight line between
/// the endpoint elevations.
///
/// The reference line is interpolated by along-path distance, so unevenly
/// spaced profiles degrade gracefully; for evenly spaced samples this
/// matches interpolation by sample index.
pub fn profile_obstruction(
    samples: &[ElevationSample],
    frequency_ghz: f64,
    clearance_m: f64,
) -> Result<FresnelResult> {
    if samples.len() < 2 {
        return Err(GeometryError::ProfileTooShort(samples.len()));
    }

    let first = samples[0];
    let last = samples[samples.len() - 1];
    let total_km = geodesy::distance_km(first.point, last.point);
    let radius = fresnel_radius_m(total_km, frequency_ghz)?;

    let mut clear = true;
    if total_km > 0.0 {
        let mut along_km = 0.0;
        for i in 1..samples.len() - 1 {
            along_km += geodesy::distance_km(samples[i - 1].point, samples[i].point);
            // Chord sums can slightly exceed the end-to-end distance
            let f = (along_km / total_km).clamp(0.0, 1.0);
            let line_height_m = first.height_m + (last.height_m - first.height_m) * f;
            if samples[i].height_m > line_height_m + clearance_m {
                tracing::debug!(
                    sample = i,
                    height_m = samples[i].height_m,
                    line_height_m,
                    "terrain sample above clearance line"
                );
                clear = false;
                break;
            }
        }
    }

    Ok(FresnelResult {
        max_obstacle_height_m: first.height_m.max(last.height_m) + radius,
        line_of_sight_clear: clear,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoPoint;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn sample(lat: f64, lon: f64, height_m: f64) -> ElevationSample {
        ElevationSample::new(point(lat, lon), height_m).unwrap()
    }

    /// Evenly spaced samples along a meridian with the given heights.
    fn profile(heights: &[f64]) -> Vec<ElevationSample> {
        let n = (heights.len() - 1) as f64;
        heights
            .iter()
            .enumerate()
            .map(|(i, &h)| sample(i as f64 / n, 10.0, h))
            .collect()
    }

    #[test]
    fn test_fresnel_radius_fixture() {
        // 24.8 * sqrt(10 / 40) = 12.4
        let r = fresnel_radius_m(10.0, 10.0).unwrap();
        assert!((r - 12.4).abs() < 1e-9, "expected 12.4 m, got {}", r);
    }

    #[test]
    fn test_fresnel_radius_rejects_bad_domains() {
        assert!(fresnel_radius_m(-1.0, 10.0).is_err());
        assert!(fresnel_radius_m(10.0, 0.0).is_err());
        assert!(fresnel_radius_m(10.0, -5.0).is_err());
        assert!(fresnel_radius_m(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn test_obstruction_estimate_uses_taller_endpoint() {
        let result = obstruction_estimate(120.0, 340.0, 10.0, 10.0).unwrap();
        assert!((result.max_obstacle_height_m - (340.0 + 12.4)).abs() < 1e-9);
        assert!(result.line_of_sight_clear, "pair variant always reports clear");
    }

    #[test]
    fn test_sample_positions_count_and_endpoints() {
        let a = point(0.0, 0.0);
        let b = point(0.0, 10.0);
        let positions = sample_positions(a, b, DEFAULT_PROFILE_INTERVALS);
        assert_eq!(positions.len(), DEFAULT_PROFILE_INTERVALS + 1);
        assert!(geodesy::distance_km(positions[0], a) < 1e-6);
        assert!(geodesy::distance_km(positions[50], b) < 1e-6);
    }

    #[test]
    fn test_profile_flat_terrain_is_clear() {
        let result = profile_obstruction(&profile(&[100.0; 11]), 10.0, DEFAULT_CLEARANCE_M).unwrap();
        assert!(result.line_of_sight_clear);
    }

    #[test]
    fn test_profile_spike_blocks_line_of_sight() {
        let mut heights = [100.0; 11];
        heights[5] = 200.0; // 100 m above the line, past the 50 m margin
        let result = profile_obstruction(&profile(&heights), 10.0, DEFAULT_CLEARANCE_M).unwrap();
        assert!(!result.line_of_sight_clear, "spike should block the path");
    }

    #[test]
    fn test_profile_spike_within_clearance_is_clear() {
        let mut heights = [100.0; 11];
        heights[5] = 140.0; // inside the 50 m margin
        let result = profile_obstruction(&profile(&heights), 10.0, DEFAULT_CLEARANCE_M).unwrap();
        assert!(result.line_of_sight_clear);
    }

    #[test]
    fn test_profile_sloped_reference_line() {
        // Line rises 0 -> 1000 m; a 400 m hill at the midpoint sits well
        // under the 500 m line height there.
        let mut heights = [0.0; 11];
        for (i, h) in heights.iter_mut().enumerate() {
            *h = i as f64 * 100.0;
        }
        heights[5] = 400.0;
        let result = profile_obstruction(&profile(&heights), 10.0, DEFAULT_CLEARANCE_M).unwrap();
        assert!(result.line_of_sight_clear);

        heights[5] = 600.0; // now 100 m above the line
        let result = profile_obstruction(&profile(&heights), 10.0, DEFAULT_CLEARANCE_M).unwrap();
        assert!(!result.line_of_sight_clear);
    }

    #[test]
    fn test_profile_too_short() {
        let samples = profile(&[100.0, 100.0]);
        assert!(profile_obstruction(&samples[..1], 10.0, DEFAULT_CLEARANCE_M).is_err());
        assert!(profile_obstruction(&[], 10.0, DEFAULT_CLEARANCE_M).is_err());
    }
}
