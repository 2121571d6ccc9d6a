//! Combustion-engine car ("Auto")

use garage_types::DecodeError;

use crate::model::{Variant, VehicleKind, VehicleSpec};
use crate::record::VehicleRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    spec: VehicleSpec,
    fuel: String,
}

impl Car {
    pub fn new(spec: VehicleSpec, fuel: impl Into<String>) -> Self {
        Self {
            spec,
            fuel: fuel.into(),
        }
    }

    pub fn fuel(&self) -> &str {
        &self.fuel
    }
}

impl Variant for Car {
    const KIND: VehicleKind = VehicleKind::Car;

    fn spec(&self) -> &VehicleSpec {
        &self.spec
    }

    fn describe(&self) -> String {
        format!("{} | Fuel: {}", self.spec.describe(), self.fuel)
    }

    fn to_record(&self) -> VehicleRecord {
        VehicleRecord {
            kraftstoff: Some(self.fuel.clone()),
            ..self.spec.to_record(Self::KIND)
        }
    }

    fn from_record(record: VehicleRecord) -> Result<Self, DecodeError> {
        let (spec, fields) = record.into_parts();
        let fuel = fields.take_fuel(Self::KIND)?;
        Ok(Self::new(spec, fuel))
    }
}
