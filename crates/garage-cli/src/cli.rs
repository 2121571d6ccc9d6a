//! CLI definition using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use garage_domain::{Car, ElectricCar, Motorcycle, Vehicle, VehicleSpec};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for listings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser)]
#[command(name = "garage")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Keep a small registry of cars, electric cars and motorcycles")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vehicle store file. Uses config value if not specified.
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new vehicle
    Add {
        #[command(subcommand)]
        vehicle: AddVehicle,
    },

    /// List all vehicles
    List,

    /// Show how fast each vehicle reaches 100 km/h
    Acceleration,

    /// Show or modify configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the vehicle store file
        #[arg(long)]
        set_store: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum AddVehicle {
    /// Combustion-engine car
    Car {
        #[command(flatten)]
        spec: SpecArgs,

        /// Fuel type (e.g., "Petrol", "Diesel")
        #[arg(long, value_parser = parse_text)]
        fuel: String,
    },

    /// Battery-electric car
    ElectricCar {
        #[command(flatten)]
        spec: SpecArgs,

        /// Energy source (e.g., "Battery")
        #[arg(long, value_parser = parse_text)]
        energy_source: String,
    },

    /// Motorcycle
    Motorcycle {
        #[command(flatten)]
        spec: SpecArgs,

        /// Fuel type
        #[arg(long, value_parser = parse_text)]
        fuel: String,
    },
}

impl AddVehicle {
    pub fn into_vehicle(self) -> Vehicle {
        match self {
            AddVehicle::Car { spec, fuel } => Car::new(spec.into_spec(), fuel).into(),
            AddVehicle::ElectricCar {
                spec,
                energy_source,
            } => ElectricCar::new(spec.into_spec(), energy_source).into(),
            AddVehicle::Motorcycle { spec, fuel } => Motorcycle::new(spec.into_spec(), fuel).into(),
        }
    }
}

/// Attributes every vehicle needs
#[derive(Args)]
pub struct SpecArgs {
    /// Brand (e.g., "Toyota")
    #[arg(long, value_parser = parse_text)]
    pub brand: String,

    /// Model name (e.g., "Yaris")
    #[arg(long, value_parser = parse_text)]
    pub model: String,

    /// Year of manufacture
    #[arg(long)]
    pub year: i32,

    /// Top speed in km/h
    #[arg(long)]
    pub top_speed: i32,

    /// Seconds from 0 to 100 km/h (decimal comma accepted)
    #[arg(long, value_parser = parse_decimal)]
    pub acceleration: f64,
}

impl SpecArgs {
    pub fn into_spec(self) -> VehicleSpec {
        VehicleSpec::new(
            self.brand,
            self.model,
            self.year,
            self.top_speed,
            self.acceleration,
        )
    }
}

/// Trimmed, non-empty text
pub fn parse_text(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("value must not be empty".to_string());
    }
    Ok(trimmed.to_string())
}

/// Finite decimal number, accepting "9,5" as well as "9.5"
pub fn parse_decimal(s: &str) -> Result<f64, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("value must not be empty".to_string());
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("'{}' is not a valid decimal number", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use garage_domain::VehicleKind;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("9.5"), Ok(9.5));
        assert_eq!(parse_decimal(" 9,5 "), Ok(9.5));
        assert_eq!(parse_decimal("10"), Ok(10.0));
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("fast").is_err());
    }

    #[test]
    fn test_parse_decimal_rejects_non_finite() {
        for input in ["inf", "-inf", "infinity", "NaN", "1e999"] {
            assert!(parse_decimal(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(parse_text("  Toyota "), Ok("Toyota".to_string()));
        assert!(parse_text("   ").is_err());
    }

    #[test]
    fn test_add_electric_car() {
        let cli = Cli::try_parse_from([
            "garage",
            "add",
            "electric-car",
            "--brand",
            "Tesla",
            "--model",
            "Model 3",
            "--year",
            "2022",
            "--top-speed",
            "225",
            "--acceleration",
            "4,4",
            "--energy-source",
            "Battery",
        ])
        .unwrap();

        let Commands::Add { vehicle } = cli.command else {
            panic!("expected add command");
        };
        let vehicle = vehicle.into_vehicle();
        assert_eq!(vehicle.kind(), VehicleKind::ElectricCar);
        assert_eq!(
            vehicle.describe(),
            "Tesla Model 3 (2022) | 225 km/h | Energy: Battery"
        );
        assert_eq!(vehicle.spec().acceleration(), 4.4);
    }

    #[test]
    fn test_add_rejects_empty_fuel() {
        let result = Cli::try_parse_from([
            "garage",
            "add",
            "car",
            "--brand",
            "Toyota",
            "--model",
            "Yaris",
            "--year",
            "2020",
            "--top-speed",
            "170",
            "--acceleration",
            "9.5",
            "--fuel",
            " ",
        ]);
        assert!(result.is_err());
    }
}
