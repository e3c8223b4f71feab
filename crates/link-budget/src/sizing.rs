//! Dish sizing from a free-space link budget
//!
//! FSL -> required end-to-end gain -> per-antenna gain (floored at a
//! practical minimum) -> parabolic aperture diameter.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use link_geometry::{units, GeometryError};

use crate::{LinkBudgetParameters, Result};

/// Free-space path loss in dB for a distance in km and a frequency in
/// GHz. Both must be positive: log10 is undefined at zero, and the loss
/// would otherwise come out as -inf instead of an error.
pub fn free_space_path_loss_db(distance_km: f64, frequency_ghz: f64) -> Result<f64> {
    if !distance_km.is_finite() || distance_km <= 0.0 {
        return Err(GeometryError::InvalidDistance(distance_km).into());
    }
    if !frequency_ghz.is_finite() || frequency_ghz <= 0.0 {
        return Err(GeometryError::InvalidFrequency(frequency_ghz).into());
    }
    Ok(92.45 + 20.0 * distance_km.log10() + 20.0 * frequency_ghz.log10())
}

/// Every stage of the sizing budget, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingBreakdown {
    pub distance_km: f64,
    pub frequency_ghz: f64,
    pub fsl_db: f64,
    /// End-to-end gain the two antennas must supply together
    pub total_gain_needed_dbi: f64,
    /// Per-antenna share before the practical floor
    pub per_antenna_gain_dbi: f64,
    /// Gain actually used for sizing (floored)
    pub design_gain_dbi: f64,
    pub gain_floor_applied: bool,
    pub wavelength_m: f64,
    /// Rounded to 2 decimals for presentation stability
    pub suggested_diameter_m: f64,
}

/// Run the full sizing budget for a link.
pub fn detailed_sizing(distance_km: f64, params: &LinkBudgetParameters) -> Result<SizingBreakdown> {
    params.validate()?;
    let fsl_db = free_space_path_loss_db(distance_km, params.frequency_ghz)?;

    // Target receive level counts toward the budget as a positive term
    let total_gain_needed_dbi =
        fsl_db - params.tx_power_dbm - params.target_rx_dbm.abs() + params.fade_margin_db;

    // Two identical antennas split the requirement evenly
    let per_antenna_gain_dbi = total_gain_needed_dbi / 2.0;
    let design_gain_dbi = per_antenna_gain_dbi.max(params.min_antenna_gain_dbi);
    let gain_floor_applied = design_gain_dbi > per_antenna_gain_dbi;
    if gain_floor_applied {
        tracing::debug!(
            per_antenna_gain_dbi,
            floor_dbi = params.min_antenna_gain_dbi,
            "per-antenna gain below practical floor"
        );
    }

    let wavelength_m = units::wavelength_m(params.frequency_ghz)?;
    let linear_gain = 10f64.powf(design_gain_dbi / 10.0);
    let diameter_m = (wavelength_m / PI) * (linear_gain / params.aperture_efficiency).sqrt();

    Ok(SizingBreakdown {
        distance_km,
        frequency_ghz: params.frequency_ghz,
        fsl_db,
        total_gain_needed_dbi,
        per_antenna_gain_dbi,
        design_gain_dbi,
        gain_floor_applied,
        wavelength_m,
        suggested_diameter_m: round2(diameter_m),
    })
}

/// Suggested dish diameter in meters for a link.
pub fn suggested_diameter_m(distance_km: f64, params: &LinkBudgetParameters) -> Result<f64> {
    Ok(detailed_sizing(distance_km, params)?.suggested_diameter_m)
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
