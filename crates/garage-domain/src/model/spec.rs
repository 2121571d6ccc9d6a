//! Attributes shared by every vehicle variant

use crate::model::VehicleKind;
use crate::record::VehicleRecord;

/// Shared vehicle attributes
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSpec {
    brand: String,
    model: String,
    year: i32,
    /// Top speed in km/h
    top_speed: i32,
    /// Seconds from standstill to 100 km/h
    acceleration: f64,
}

impl VehicleSpec {
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        top_speed: i32,
        acceleration: f64,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            year,
            top_speed,
            acceleration,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn top_speed(&self) -> i32 {
        self.top_speed
    }

    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    pub fn describe_acceleration(&self) -> String {
        format!(
            "{} {} accelerates to 100 km/h in {} seconds!",
            self.brand, self.model, self.acceleration
        )
    }

    pub fn describe(&self) -> String {
        format!(
            "{} {} ({}) | {} km/h",
            self.brand, self.model, self.year, self.top_speed
        )
    }

    /// Base record tagged with `kind`, without any variant field set
    pub fn to_record(&self, kind: VehicleKind) -> VehicleRecord {
        VehicleRecord {
            kind,
            marke: self.brand.clone(),
            modell: self.model.clone(),
            baujahr: self.year,
            geschwindigkeit: self.top_speed,
            beschleunigung: self.acceleration,
            kraftstoff: None,
            energiequelle: None,
        }
    }
}
