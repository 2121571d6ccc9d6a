//! Vehicle model types
//!
//! A [`Vehicle`] is exactly one of three variants. Each variant wraps the
//! shared [`VehicleSpec`] plus one field of its own and implements
//! [`Variant`], which covers the per-variant wording and record conversion.

mod car;
mod electric_car;
mod motorcycle;
mod spec;

pub use car::Car;
pub use electric_car::ElectricCar;
pub use motorcycle::Motorcycle;
pub use spec::VehicleSpec;

use garage_types::DecodeError;
use serde::{Deserialize, Serialize};

use crate::record::{self, VehicleRecord};

/// Discriminator stored in the "kind" field of a tagged record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    #[serde(rename = "Auto")]
    Car,
    #[serde(rename = "Elektroauto")]
    ElectricCar,
    #[serde(rename = "Motorrad")]
    Motorcycle,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [
        VehicleKind::Car,
        VehicleKind::ElectricCar,
        VehicleKind::Motorcycle,
    ];

    /// Literal tag written to storage
    pub fn tag(self) -> &'static str {
        match self {
            VehicleKind::Car => "Auto",
            VehicleKind::ElectricCar => "Elektroauto",
            VehicleKind::Motorcycle => "Motorrad",
        }
    }

    /// Case-sensitive lookup of a stored tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Behaviour every vehicle variant provides
pub trait Variant {
    const KIND: VehicleKind;

    fn spec(&self) -> &VehicleSpec;

    /// All current variants keep the shared wording.
    fn describe_acceleration(&self) -> String {
        self.spec().describe_acceleration()
    }

    fn describe(&self) -> String;

    /// Shared record fields plus this variant's own field
    fn to_record(&self) -> VehicleRecord;

    fn from_record(record: VehicleRecord) -> Result<Self, DecodeError>
    where
        Self: Sized;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Vehicle {
    Car(Car),
    ElectricCar(ElectricCar),
    Motorcycle(Motorcycle),
}

impl Vehicle {
    pub fn kind(&self) -> VehicleKind {
        match self {
            Vehicle::Car(_) => Car::KIND,
            Vehicle::ElectricCar(_) => ElectricCar::KIND,
            Vehicle::Motorcycle(_) => Motorcycle::KIND,
        }
    }

    pub fn spec(&self) -> &VehicleSpec {
        match self {
            Vehicle::Car(v) => v.spec(),
            Vehicle::ElectricCar(v) => v.spec(),
            Vehicle::Motorcycle(v) => v.spec(),
        }
    }

    pub fn describe_acceleration(&self) -> String {
        match self {
            Vehicle::Car(v) => v.describe_acceleration(),
            Vehicle::ElectricCar(v) => v.describe_acceleration(),
            Vehicle::Motorcycle(v) => v.describe_acceleration(),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Vehicle::Car(v) => v.describe(),
            Vehicle::ElectricCar(v) => v.describe(),
            Vehicle::Motorcycle(v) => v.describe(),
        }
    }

    pub fn to_record(&self) -> VehicleRecord {
        match self {
            Vehicle::Car(v) => v.to_record(),
            Vehicle::ElectricCar(v) => v.to_record(),
            Vehicle::Motorcycle(v) => v.to_record(),
        }
    }

    /// Decode one stored record.
    ///
    /// Returns `Ok(None)` when "kind" is missing or not a known tag. A known
    /// kind whose fields do not fit the variant is an error.
    pub fn from_record(value: &serde_json::Value) -> Result<Option<Vehicle>, DecodeError> {
        record::decode(value)
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<Car> for Vehicle {
    fn from(car: Car) -> Self {
        Vehicle::Car(car)
    }
}

impl From<ElectricCar> for Vehicle {
    fn from(car: ElectricCar) -> Self {
        Vehicle::ElectricCar(car)
    }
}

impl From<Motorcycle> for Vehicle {
    fn from(bike: Motorcycle) -> Self {
        Vehicle::Motorcycle(bike)
    }
}
