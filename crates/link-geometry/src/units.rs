//! Unit conversions shared by the planner surfaces
//!
//! Log-domain conversions reject non-positive inputs instead of
//! returning -inf/NaN.

use crate::{GeometryError, Result};

/// Speed of light in m/s
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// dBm to milliwatts. Total over finite inputs.
pub fn dbm_to_milliwatts(dbm: f64) -> f64 {
    10f64.powf(dbm / 10.0)
}

/// Milliwatts to dBm. The power must be positive for the log to be
/// defined.
pub fn milliwatts_to_dbm(mw: f64) -> Result<f64> {
    if !mw.is_finite() || mw <= 0.0 {
        return Err(GeometryError::InvalidPower(mw));
    }
    Ok(10.0 * mw.log10())
}

/// Wavelength in meters for a carrier frequency in GHz.
pub fn wavelength_m(frequency_ghz: f64) -> Result<f64> {
    if !frequency_ghz.is_finite() || frequency_ghz <= 0.0 {
        return Err(GeometryError::InvalidFrequency(frequency_ghz));
    }
    Ok(SPEED_OF_LIGHT_M_S / (frequency_ghz * 1e9))
}

/// Carrier frequency in GHz for a wavelength in meters.
pub fn frequency_ghz(wavelength_m: f64) -> Result<f64> {
    if !wavelength_m.is_finite() || wavelength_m <= 0.0 {
        return Err(GeometryError::InvalidWavelength(wavelength_m));
    }
    Ok(SPEED_OF_LIGHT_M_S / (wavelength_m * 1e9))
}

pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

pub fn km_to_meters(km: f64) -> f64 {
    km * 1000.0
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dbm_milliwatt_fixtures() {
        assert!((dbm_to_milliwatts(0.0) - 1.0).abs() < 1e-12);
        assert!((dbm_to_milliwatts(30.0) - 1000.0).abs() < 1e-9);
        assert!((milliwatts_to_dbm(1.0).unwrap()).abs() < 1e-12);
        assert!((milliwatts_to_dbm(1000.0).unwrap() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_dbm_milliwatt_round_trip() {
        let dbm = 17.3;
        let back = milliwatts_to_dbm(dbm_to_milliwatts(dbm)).unwrap();
        assert!((back - dbm).abs() < 1e-9);
    }

    #[test]
    fn test_milliwatts_to_dbm_rejects_log_domain() {
        assert!(milliwatts_to_dbm(0.0).is_err());
        assert!(milliwatts_to_dbm(-3.0).is_err());
        assert!(milliwatts_to_dbm(f64::NAN).is_err());
    }

    #[test]
    fn test_wavelength_fixture() {
        // 1 GHz is just under 30 cm
        let lambda = wavelength_m(1.0).unwrap();
        assert!((lambda - 0.299_792_458).abs() < 1e-9);
    }

    #[test]
    fn test_frequency_wavelength_symmetry() {
        // The conversion is its own inverse
        let lambda = wavelength_m(10.7).unwrap();
        let f = frequency_ghz(lambda).unwrap();
        assert!((f - 10.7).abs() < 1e-9);
    }

    #[test]
    fn test_wavelength_rejects_non_positive_frequency() {
        assert!(wavelength_m(0.0).is_err());
        assert!(wavelength_m(-2.4).is_err());
        assert!(frequency_ghz(0.0).is_err());
    }

    #[test]
    fn test_length_conversions() {
        assert_eq!(meters_to_km(1500.0), 1.5);
        assert_eq!(km_to_meters(1.5), 1500.0);
    }

    #[test]
    fn test_angle_conversions() {
        assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((radians_to_degrees(std::f64::consts::PI) - 180.0).abs() < 1e-12);
    }
}
