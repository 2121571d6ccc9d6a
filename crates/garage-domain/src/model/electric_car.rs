//! Battery-electric car ("Elektroauto")

use garage_types::DecodeError;

use crate::model::{Variant, VehicleKind, VehicleSpec};
use crate::record::VehicleRecord;

/// Electric car, carrying its energy source instead of a fuel type
#[derive(Debug, Clone, PartialEq)]
pub struct ElectricCar {
    spec: VehicleSpec,
    energy_source: String,
}

impl ElectricCar {
    pub fn new(spec: VehicleSpec, energy_source: impl Into<String>) -> Self {
        Self {
            spec,
            energy_source: energy_source.into(),
        }
    }

    pub fn energy_source(&self) -> &str {
        &self.energy_source
    }
}

impl Variant for ElectricCar {
    const KIND: VehicleKind = VehicleKind::ElectricCar;

    fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    fn describe(&self) -> String {
        format!("{} | Energy: {}", self.spec.describe(), self.energy_source)
    }

    fn to_record(&self) -> VehicleRecord {
        VehicleRecord {
            energiequelle: Some(self.energy_source.clone()),
            ..self.spec.to_record(Self::KIND)
        }
    }

    fn from_record(record: VehicleRecord) -> Result<Self, DecodeError> {
        let (spec, fields) = record.into_parts();
        let energy_source = fields.take_energy_source(Self::KIND)?;
        Ok(Self::new(spec, energy_source))
    }
}
