//! Satellite Pointing Library
//!
//! Look angles (azimuth, elevation, slant range) from an observer to a
//! satellite's sub-point via spherical-triangle relations, plus the demo
//! satellite catalog. Satellite positions are fixed demo coordinates: a
//! real orbital-propagation collaborator would slot in behind the same
//! sub-point-in/angles-out interface.

use thiserror::Error;

use link_geometry::GeometryError;

pub mod catalog;
pub mod pointing;

pub use catalog::{catalog, demo_position, system, SatelliteClass, SatelliteInfo, SatelliteSystem};
pub use pointing::{look_angles, SatelliteGeometry};

#[derive(Error, Debug)]
pub enum PointingError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("orbital altitude {0} km must be finite and positive")]
    InvalidAltitude(f64),
}

pub type Result<T> = std::result::Result<T, PointingError>;
