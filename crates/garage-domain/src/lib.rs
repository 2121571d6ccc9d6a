//! Garage Domain Layer
//!
//! Vehicle variants and their tagged record representation.

pub mod model;
pub mod record;

pub use model::{Car, ElectricCar, Motorcycle, Variant, Vehicle, VehicleKind, VehicleSpec};
pub use record::VehicleRecord;
