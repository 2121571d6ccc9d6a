//! Tagged record schema used for persistence

use garage_types::DecodeError;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::model::{Car, ElectricCar, Motorcycle, Variant, Vehicle, VehicleKind, VehicleSpec};

pub const KIND_FIELD: &str = "kind";
pub const FUEL_FIELD: &str = "kraftstoff";
pub const ENERGY_SOURCE_FIELD: &str = "energiequelle";

/// On-disk form of a vehicle
///
/// Field names match the stored format. Exactly one of `kraftstoff` and
/// `energiequelle` is set, depending on `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VehicleRecord {
    pub kind: VehicleKind,
    pub marke: String,
    pub modell: String,
    pub baujahr: i32,
    pub geschwindigkeit: i32,
    #[serde(serialize_with = "finite")]
    pub beschleunigung: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kraftstoff: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energiequelle: Option<String>,
}

/// JSON has no representation for NaN or infinity
fn finite<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        return Err(serde::ser::Error::custom(format!(
            "beschleunigung must be a finite number, got {}",
            value
        )));
    }
    serializer.serialize_f64(*value)
}

/// Variant-specific fields left over after the shared ones are taken
pub(crate) struct VariantFields {
    kraftstoff: Option<String>,
    energiequelle: Option<String>,
}

impl VariantFields {
    pub(crate) fn take_fuel(self, kind: VehicleKind) -> Result<String, DecodeError> {
        reject(kind, ENERGY_SOURCE_FIELD, self.energiequelle.as_ref())?;
        require(kind, FUEL_FIELD, self.kraftstoff)
    }

    pub(crate) fn take_energy_source(self, kind: VehicleKind) -> Result<String, DecodeError> {
        reject(kind, FUEL_FIELD, self.kraftstoff.as_ref())?;
        require(kind, ENERGY_SOURCE_FIELD, self.energiequelle)
    }
}

fn require(
    kind: VehicleKind,
    field: &'static str,
    value: Option<String>,
) -> Result<String, DecodeError> {
    value.ok_or(DecodeError::MissingField {
        kind: kind.tag(),
        field,
    })
}

fn reject(
    kind: VehicleKind,
    field: &'static str,
    value: Option<&String>,
) -> Result<(), DecodeError> {
    match value {
        Some(_) => Err(DecodeError::UnexpectedField {
            kind: kind.tag(),
            field,
        }),
        None => Ok(()),
    }
}

impl VehicleRecord {
    pub(crate) fn into_parts(self) -> (VehicleSpec, VariantFields) {
        let spec = VehicleSpec::new(
            self.marke,
            self.modell,
            self.baujahr,
            self.geschwindigkeit,
            self.beschleunigung,
        );
        let fields = VariantFields {
            kraftstoff: self.kraftstoff,
            energiequelle: self.energiequelle,
        };
        (spec, fields)
    }

    /// Build the vehicle this record describes
    pub fn into_vehicle(self) -> Result<Vehicle, DecodeError> {
        match self.kind {
            VehicleKind::Car => Car::from_record(self).map(Vehicle::Car),
            VehicleKind::ElectricCar => ElectricCar::from_record(self).map(Vehicle::ElectricCar),
            VehicleKind::Motorcycle => Motorcycle::from_record(self).map(Vehicle::Motorcycle),
        }
    }
}

/// Known discriminator of a raw record, if any
pub fn discriminator(value: &Value) -> Option<VehicleKind> {
    value
        .get(KIND_FIELD)
        .and_then(Value::as_str)
        .and_then(VehicleKind::from_tag)
}

/// Decode a raw stored record without consuming it.
///
/// Missing or unknown "kind" yields `Ok(None)`.
pub fn decode(value: &Value) -> Result<Option<Vehicle>, DecodeError> {
    if !value.is_object() {
        return Err(DecodeError::NotAnObject);
    }
    if discriminator(value).is_none() {
        return Ok(None);
    }
    let record = VehicleRecord::deserialize(value)?;
    record.into_vehicle().map(Some)
}
