//! Link Budget Library
//!
//! Translates link distance and operating frequency into a physically
//! motivated parabolic dish size via a free-space-path-loss budget, and
//! assembles the planner-facing geometry, signal-quality, and report
//! records. Pure functions over plain numbers; the map, elevation, and
//! weather collaborators live outside this crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use link_geometry::{geodesy, ElevationSample, GeometryError};

pub mod report;
pub mod signal_quality;
pub mod sizing;

pub use report::LinkReport;
pub use signal_quality::{assess, AtmosphericConditions, Recommendation, Severity, SignalQualityAssessment};
pub use sizing::{detailed_sizing, free_space_path_loss_db, suggested_diameter_m, SizingBreakdown};

#[derive(Error, Debug)]
pub enum BudgetError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("transmit power {0} dBm is not finite")]
    InvalidTxPower(f64),
    #[error("target receive level {0} dBm is not finite")]
    InvalidTargetRx(f64),
    #[error("fade margin {0} dB is not finite")]
    InvalidFadeMargin(f64),
    #[error("aperture efficiency {0} must be in (0, 1]")]
    InvalidEfficiency(f64),
    #[error("minimum antenna gain {0} dBi is not finite")]
    InvalidGainFloor(f64),
}

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Link-budget configuration with engineering defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkBudgetParameters {
    /// Operating frequency (GHz)
    pub frequency_ghz: f64,
    /// Transmit power (dBm)
    pub tx_power_dbm: f64,
    /// Target receive level (dBm); enters the budget as a positive
    /// contribution regardless of sign convention at the input
    pub target_rx_dbm: f64,
    /// Fade margin reserved for rain/multipath (dB)
    pub fade_margin_db: f64,
    /// Parabolic aperture efficiency, (0, 1]
    pub aperture_efficiency: f64,
    /// Smallest per-antenna gain considered practical for a dish (dBi)
    pub min_antenna_gain_dbi: f64,
}

impl Default for LinkBudgetParameters {
    fn default() -> Self {
        Self {
            frequency_ghz: 10.7,
            tx_power_dbm: 30.0,
            target_rx_dbm: -60.0,
            fade_margin_db: 10.0,
            aperture_efficiency: 0.55,
            min_antenna_gain_dbi: 16.0,
        }
    }
}

impl LinkBudgetParameters {
    pub fn validate(&self) -> Result<()> {
        if !self.frequency_ghz.is_finite() || self.frequency_ghz <= 0.0 {
            return Err(GeometryError::InvalidFrequency(self.frequency_ghz).into());
        }
        if !self.tx_power_dbm.is_finite() {
            return Err(BudgetError::InvalidTxPower(self.tx_power_dbm));
        }
        if !self.target_rx_dbm.is_finite() {
            return Err(BudgetError::InvalidTargetRx(self.target_rx_dbm));
        }
        if !self.fade_margin_db.is_finite() {
            return Err(BudgetError::InvalidFadeMargin(self.fade_margin_db));
        }
        if !self.aperture_efficiency.is_finite()
            || self.aperture_efficiency <= 0.0
            || self.aperture_efficiency > 1.0
        {
            return Err(BudgetError::InvalidEfficiency(self.aperture_efficiency));
        }
        if !self.min_antenna_gain_dbi.is_finite() {
            return Err(BudgetError::InvalidGainFloor(self.min_antenna_gain_dbi));
        }
        Ok(())
    }
}

/// Planner output for one terrestrial link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkGeometry {
    pub distance_km: f64,
    /// 0-360 degrees from true north
    pub azimuth_deg: f64,
    /// Antenna tilt from site A toward site B
    pub elevation_angle_deg: f64,
    pub suggested_diameter_m: f64,
    pub error_margin_percent: f64,
}

/// Compute the full link geometry between two surveyed sites.
///
/// Coincident sites are rejected: a zero-length path has no defined
/// free-space loss, so there is nothing to size.
pub fn plan_link(
    site_a: &ElevationSample,
    site_b: &ElevationSample,
    params: &LinkBudgetParameters,
) -> Result<LinkGeometry> {
    let distance_km = geodesy::distance_km(site_a.point, site_b.point);
    let breakdown = sizing::detailed_sizing(distance_km, params)?;

    Ok(LinkGeometry {
        distance_km,
        azimuth_deg: geodesy::initial_bearing_deg(site_a.point, site_b.point),
        elevation_angle_deg: geodesy::elevation_angle_deg(
            distance_km,
            site_b.height_m - site_a.height_m,
        ),
        suggested_diameter_m: breakdown.suggested_diameter_m,
        error_margin_percent: error_margin_percent(distance_km),
    })
}

/// Rough survey-accuracy margin by link length: 0.1% per km, clamped to
/// [1, 5] percent.
pub fn error_margin_percent(distance_km: f64) -> f64 {
    (distance_km * 0.1).clamp(1.0, 5.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use link_geometry::GeoPoint;

    fn site(lat: f64, lon: f64, height_m: f64) -> ElevationSample {
        ElevationSample::new(GeoPoint::new(lat, lon).unwrap(), height_m).unwrap()
    }

    #[test]
    fn test_default_parameters_validate() {
        assert!(LinkBudgetParameters::default().validate().is_ok());
    }

    #[test]
    fn test_parameter_validation_catches_bad_fields() {
        let p = LinkBudgetParameters {
            frequency_ghz: 0.0,
            ..Default::default()
        };
        assert!(p.validate().is_err());

        let p = LinkBudgetParameters {
            aperture_efficiency: 1.2,
            ..Default::default()
        };
        assert!(p.validate().is_err());

        let p = LinkBudgetParameters {
            tx_power_dbm: f64::NAN,
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_plan_link_new_york_london() {
        let a = site(40.7128, -74.0060, 10.0);
        let b = site(51.5074, -0.1278, 24.0);
        let params = LinkBudgetParameters::default();
        let link = plan_link(&a, &b, &params).unwrap();

        let err = (link.distance_km - 5570.0).abs() / 5570.0;
        assert!(err < 0.01, "NY-London should be ~5570 km, got {}", link.distance_km);
        assert!((0.0..360.0).contains(&link.azimuth_deg));
        assert!(link.elevation_angle_deg.abs() < 0.01, "14 m over 5570 km is flat");
        assert!(link.suggested_diameter_m > 0.0);
        assert_eq!(link.error_margin_percent, 5.0, "long links clamp to 5 percent");
    }

    #[test]
    fn test_plan_link_rejects_coincident_sites() {
        let a = site(10.0, 20.0, 100.0);
        let b = site(10.0, 20.0, 300.0);
        let result = plan_link(&a, &b, &LinkBudgetParameters::default());
        assert!(result.is_err(), "zero-length link must not be sized");
    }

    #[test]
    fn test_plan_link_elevation_sign_follows_height() {
        let low = site(0.0, 0.0, 10.0);
        let high = site(0.0, 0.5, 800.0);
        let params = LinkBudgetParameters::default();

        let up = plan_link(&low, &high, &params).unwrap();
        let down = plan_link(&high, &low, &params).unwrap();
        assert!(up.elevation_angle_deg > 0.0);
        assert!(down.elevation_angle_deg < 0.0);
    }

    #[test]
    fn test_error_margin_clamps() {
        assert_eq!(error_margin_percent(5.0), 1.0);
        assert_eq!(error_margin_percent(30.0), 3.0);
        assert_eq!(error_margin_percent(500.0), 5.0);
    }
}
