//! Demo satellite catalog
//!
//! Three satellite systems with fixed sub-satellite demo positions,
//! standing in for a real orbital-propagation collaborator. Frequencies
//! and altitudes are representative of each service.

use serde::{Deserialize, Serialize};

use link_geometry::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SatelliteClass {
    Gps,
    Communications,
    Television,
}

/// One satellite inside a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteInfo {
    pub name: String,
    pub norad_id: u32,
    pub inclination_deg: f64,
}

/// A satellite service with its operating band and orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteSystem {
    pub class: SatelliteClass,
    pub name: String,
    pub frequency_ghz: f64,
    pub altitude_km: f64,
    pub satellites: Vec<SatelliteInfo>,
}

fn info(name: &str, norad_id: u32, inclination_deg: f64) -> SatelliteInfo {
    SatelliteInfo {
        name: name.to_string(),
        norad_id,
        inclination_deg,
    }
}

/// The demo system for a class.
pub fn system(class: SatelliteClass) -> SatelliteSystem {
    match class {
        SatelliteClass::Gps => SatelliteSystem {
            class,
            name: "GPS (NAVSTAR)".to_string(),
            frequency_ghz: 1.575,
            altitude_km: 20_200.0,
            satellites: vec![
                info("GPS I-01", 4044, 55.0),
                info("GPS II-01", 16019, 55.0),
                info("GPS III-01", 43873, 55.0),
            ],
        },
        SatelliteClass::Communications => SatelliteSystem {
            class,
            name: "Satellite Communications".to_string(),
            frequency_ghz: 11.5,
            altitude_km: 36_000.0,
            satellites: vec![
                info("Intelsat 39A", 41959, 0.03),
                info("SES-14", 43013, 0.02),
                info("Eutelsat 7B", 40425, 0.05),
            ],
        },
        SatelliteClass::Television => SatelliteSystem {
            class,
            name: "Satellite Television".to_string(),
            frequency_ghz: 12.75,
            altitude_km: 36_000.0,
            satellites: vec![
                info("DirecTV 7S", 37949, 0.05),
                info("Sky Brasil C1", 40360, 0.03),
                info("Hispasat 30W-6", 39161, 0.01),
            ],
        },
    }
}

/// All demo systems.
pub fn catalog() -> Vec<SatelliteSystem> {
    vec![
        system(SatelliteClass::Gps),
        system(SatelliteClass::Communications),
        system(SatelliteClass::Television),
    ]
}

/// Demo sub-satellite point for a satellite index within a system, or
/// `None` when the index has no configured position.
pub fn demo_position(class: SatelliteClass, index: usize) -> Option<GeoPoint> {
    let coords: &[(f64, f64)] = match class {
        SatelliteClass::Gps => &[(45.0, -75.0), (-20.0, 140.0), (0.0, 0.0)],
        SatelliteClass::Communications => &[(0.0, -100.0), (0.0, 50.0), (0.0, 160.0)],
        SatelliteClass::Television => &[(0.0, -75.0), (0.0, -30.0), (0.0, 100.0)],
    };
    coords.get(index).map(|&(lat, lon)| {
        GeoPoint::new(lat, lon).expect("demo catalog coordinates are within range")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointing::look_angles;

    #[test]
    fn test_catalog_has_three_systems() {
        let systems = catalog();
        assert_eq!(systems.len(), 3);
        assert!(systems.iter().all(|s| s.satellites.len() == 3));
        assert!(systems.iter().all(|s| s.frequency_ghz > 0.0 && s.altitude_km > 0.0));
    }

    #[test]
    fn test_gps_system_fixture() {
        let gps = system(SatelliteClass::Gps);
        assert!((gps.frequency_ghz - 1.575).abs() < 1e-9);
        assert_eq!(gps.altitude_km, 20_200.0);
        assert_eq!(gps.satellites[0].norad_id, 4044);
    }

    #[test]
    fn test_demo_position_lookup() {
        let p = demo_position(SatelliteClass::Gps, 0).unwrap();
        assert_eq!(p.latitude_deg(), 45.0);
        assert_eq!(p.longitude_deg(), -75.0);

        // Geostationary demo positions sit on the equator
        for idx in 0..3 {
            let p = demo_position(SatelliteClass::Television, idx).unwrap();
            assert_eq!(p.latitude_deg(), 0.0);
        }
    }

    #[test]
    fn test_demo_position_out_of_range_is_none() {
        assert!(demo_position(SatelliteClass::Gps, 3).is_none());
        assert!(demo_position(SatelliteClass::Communications, 99).is_none());
    }

    #[test]
    fn test_catalog_feeds_look_angles() {
        // An observer in Brazil sees the Sky Brasil demo slot high in the sky
        let observer = GeoPoint::new(-23.55, -46.63).unwrap();
        let system = system(SatelliteClass::Television);
        let sub_point = demo_position(SatelliteClass::Television, 1).unwrap();

        let geo = look_angles(observer, sub_point, system.altitude_km).unwrap();
        assert!(geo.visible, "Sao Paulo should see the 30W slot");
        assert!(geo.elevation_deg > 30.0, "got {}", geo.elevation_deg);
    }
}
