//! Ordered vehicle store with whole-collection persistence

use garage_domain::record::KIND_FIELD;
use garage_domain::{Vehicle, VehicleRecord};
use garage_types::{DecodeError, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::storage::{FileStorage, Storage};

/// Shown instead of a listing when the store holds no vehicles
pub const EMPTY_MESSAGE: &str = "No vehicles available.";

/// Rendered view over the collection, one line per vehicle in insertion order
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Empty,
    Entries(Vec<String>),
}

impl Report {
    pub fn is_empty(&self) -> bool {
        matches!(self, Report::Empty)
    }

    pub fn lines(&self) -> &[String] {
        match self {
            Report::Empty => &[],
            Report::Entries(lines) => lines,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Empty => f.write_str(EMPTY_MESSAGE),
            Report::Entries(lines) => {
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "  - {}", line)?;
                }
                Ok(())
            }
        }
    }
}

/// Why a stored record was left out of the collection
#[derive(Debug)]
pub enum SkipReason {
    /// "kind" was missing (`None`) or not a known tag
    UnknownKind(Option<Value>),
    Invalid(DecodeError),
}

#[derive(Debug)]
pub struct SkippedRecord {
    /// Position in the stored record list
    pub index: usize,
    pub reason: SkipReason,
}

impl std::fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            SkipReason::UnknownKind(Some(kind)) => {
                write!(f, "Record {}: unknown kind {}", self.index, kind)
            }
            SkipReason::UnknownKind(None) => write!(f, "Record {}: missing kind", self.index),
            SkipReason::Invalid(e) => write!(f, "Record {}: {}", self.index, e),
        }
    }
}

/// Outcome of [`VehicleStore::load_all`]
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedRecord>,
}

/// Persistent store for vehicles, kept in insertion order
pub struct VehicleStore<S = FileStorage> {
    storage: S,
    vehicles: Vec<Vehicle>,
}

impl VehicleStore<FileStorage> {
    /// Open a store backed by the JSON file at `path`
    pub fn open_file(path: impl Into<std::path::PathBuf>) -> Self {
        Self::open(FileStorage::new(path))
    }
}

impl<S: Storage> VehicleStore<S> {
    /// Create a store and load whatever `storage` already holds
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            vehicles: Vec::new(),
        };
        let report = store.load_all();
        debug!(
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "Vehicle store opened"
        );
        store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Append a vehicle and save the full collection.
    ///
    /// The vehicle stays in memory even when saving fails; the return value
    /// tells whether storage now matches.
    pub fn add(&mut self, vehicle: Vehicle) -> bool {
        self.vehicles.push(vehicle);
        self.save_all()
    }

    pub fn list_all(&self) -> Report {
        self.render(|v| {
            format!(
                "{} | Acceleration: {} s",
                v.describe(),
                v.spec().acceleration()
            )
        })
    }

    pub fn acceleration_report(&self) -> Report {
        self.render(Vehicle::describe_acceleration)
    }

    fn render(&self, line: impl Fn(&Vehicle) -> String) -> Report {
        if self.vehicles.is_empty() {
            Report::Empty
        } else {
            Report::Entries(self.vehicles.iter().map(line).collect())
        }
    }

    /// Tagged records for the whole collection, in order
    pub fn records(&self) -> Vec<VehicleRecord> {
        self.vehicles.iter().map(Vehicle::to_record).collect()
    }

    /// Overwrite storage with the whole collection.
    ///
    /// Failures are logged and reported as `false`, never raised.
    pub fn save_all(&self) -> bool {
        match self.persist() {
            Ok(()) => {
                debug!(count = self.vehicles.len(), "Vehicles saved");
                true
            }
            Err(e) => {
                error!(error = %e, "Failed to save vehicles");
                false
            }
        }
    }

    fn persist(&self) -> Result<()> {
        let bytes = encode(&self.records())?;
        self.storage.store(&bytes)
    }

    /// Replace the collection with what storage holds.
    ///
    /// Missing, empty or unparseable storage leaves the collection empty.
    /// Records that cannot be decoded are skipped one by one.
    pub fn load_all(&mut self) -> LoadReport {
        let mut report = LoadReport::default();
        let mut vehicles = Vec::new();

        for (index, value) in self.read_records().iter().enumerate() {
            match Vehicle::from_record(value) {
                Ok(Some(vehicle)) => vehicles.push(vehicle),
                Ok(None) => {
                    debug!(index, "Skipping record without a known kind");
                    report.skipped.push(SkippedRecord {
                        index,
                        reason: SkipReason::UnknownKind(value.get(KIND_FIELD).cloned()),
                    });
                }
                Err(e) => {
                    warn!(index, error = %e, "Skipping invalid record");
                    report.skipped.push(SkippedRecord {
                        index,
                        reason: SkipReason::Invalid(e),
                    });
                }
            }
        }

        report.loaded = vehicles.len();
        self.vehicles = vehicles;
        report
    }

    fn read_records(&self) -> Vec<Value> {
        let bytes = match self.storage.load() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                debug!("No stored vehicles yet");
                return Vec::new();
            }
            Err(e) => {
                warn!(error = %e, "Vehicle storage unreadable, starting empty");
                return Vec::new();
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Vec::new();
        }

        serde_json::from_slice(&bytes).unwrap_or_else(|e| {
            warn!(error = %e, "Stored vehicles are not a record list, starting empty");
            Vec::new()
        })
    }
}

/// Pretty-printed JSON array with four-space indentation
fn encode(records: &[VehicleRecord]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    records.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use garage_domain::{Car, ElectricCar, Motorcycle, VehicleSpec};
    use garage_types::Error;

    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn load(&self) -> Result<Option<Vec<u8>>> {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )))
        }

        fn store(&self, _bytes: &[u8]) -> Result<()> {
            Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "denied",
            )))
        }
    }

    fn yaris() -> Vehicle {
        Car::new(VehicleSpec::new("Toyota", "Yaris", 2020, 170, 9.5), "Petrol").into()
    }

    fn zoe() -> Vehicle {
        ElectricCar::new(VehicleSpec::new("Renault", "Zoe", 2019, 135, 11.4), "Battery").into()
    }

    fn duke() -> Vehicle {
        Motorcycle::new(VehicleSpec::new("KTM", "390 Duke", 2023, 167, 4.8), "Petrol").into()
    }

    #[test]
    fn test_empty_store_reports() {
        let store = VehicleStore::open(MemoryStorage::new());
        assert!(store.is_empty());
        assert_eq!(store.list_all(), Report::Empty);
        assert_eq!(store.acceleration_report(), Report::Empty);
        assert_eq!(store.list_all().to_string(), EMPTY_MESSAGE);
    }

    #[test]
    fn test_add_persists_whole_collection() {
        let mut store = VehicleStore::open(MemoryStorage::new());
        assert!(store.add(yaris()));
        assert!(store.add(zoe()));

        let saved: Vec<VehicleRecord> =
            serde_json::from_slice(&store.storage().contents().unwrap()).unwrap();
        assert_eq!(saved, store.records());
        assert_eq!(saved.len(), 2);
    }

    #[test]
    fn test_listing_keeps_insertion_order() {
        let mut store = VehicleStore::open(MemoryStorage::new());
        store.add(yaris());
        store.add(zoe());
        store.add(duke());

        let list = store.list_all();
        assert_eq!(
            list.lines(),
            [
                "Toyota Yaris (2020) | 170 km/h | Fuel: Petrol | Acceleration: 9.5 s",
                "Renault Zoe (2019) | 135 km/h | Energy: Battery | Acceleration: 11.4 s",
                "KTM 390 Duke (2023) | 167 km/h | Fuel: Petrol | Acceleration: 4.8 s",
            ]
        );

        let accel = store.acceleration_report();
        assert_eq!(
            accel.lines()[2],
            "KTM 390 Duke accelerates to 100 km/h in 4.8 seconds!"
        );
    }

    #[test]
    fn test_report_display() {
        let mut store = VehicleStore::open(MemoryStorage::new());
        store.add(yaris());
        store.add(duke());
        assert_eq!(
            store.acceleration_report().to_string(),
            "  - Toyota Yaris accelerates to 100 km/h in 9.5 seconds!\n  - KTM 390 Duke accelerates to 100 km/h in 4.8 seconds!"
        );
    }

    #[test]
    fn test_failed_save_keeps_vehicle_in_memory() {
        let mut store = VehicleStore::open(BrokenStorage);
        assert!(store.is_empty());
        assert!(!store.add(yaris()));
        assert_eq!(store.len(), 1);
        assert!(!store.save_all());
    }

    #[test]
    fn test_non_finite_acceleration_is_not_saved() {
        let mut store = VehicleStore::open(MemoryStorage::new());
        assert!(store.add(yaris()));
        let before = store.storage().contents();

        let rocket: Vehicle =
            Car::new(VehicleSpec::new("Acme", "Rocket", 2024, 999, f64::INFINITY), "Petrol").into();
        assert!(!store.add(rocket));
        assert_eq!(store.len(), 2);
        assert_eq!(store.storage().contents(), before);

        let reopened = VehicleStore::open(MemoryStorage::with_contents(before.unwrap()));
        assert_eq!(reopened.vehicles(), [yaris()]);
    }

    #[test]
    fn test_saved_format_uses_four_space_indent() {
        let mut store = VehicleStore::open(MemoryStorage::new());
        store.add(yaris());
        let text = String::from_utf8(store.storage().contents().unwrap()).unwrap();
        assert!(text.starts_with("[\n    {\n        \"kind\": \"Auto\",\n        \"marke\": \"Toyota\","));
    }

    #[test]
    fn test_blank_or_garbage_storage_is_empty() {
        for contents in ["", "  \n", "not json", "{\"kind\": \"Auto\"}", "[{"] {
            let mut store = VehicleStore::open(MemoryStorage::with_contents(contents));
            assert!(store.is_empty(), "contents: {:?}", contents);
            let report = store.load_all();
            assert_eq!(report.loaded, 0);
            assert!(report.skipped.is_empty());
        }
    }

    #[test]
    fn test_per_record_recovery() {
        let contents = r#"[
            {"kind": "Auto", "marke": "Toyota", "modell": "Yaris", "baujahr": 2020,
             "geschwindigkeit": 170, "beschleunigung": 9.5, "kraftstoff": "Petrol"},
            {"kind": "Motorrad", "marke": "KTM", "modell": "390 Duke", "baujahr": 2023,
             "geschwindigkeit": 167, "beschleunigung": 4.8},
            {"marke": "Nobody"},
            17,
            {"kind": "Elektroauto", "marke": "Renault", "modell": "Zoe", "baujahr": 2019,
             "geschwindigkeit": 135, "beschleunigung": 11.4, "energiequelle": "Battery"}
        ]"#;
        let mut store = VehicleStore::open(MemoryStorage::with_contents(contents));
        assert_eq!(store.vehicles(), [yaris(), zoe()]);

        let report = store.load_all();
        assert_eq!(report.loaded, 2);
        let indices: Vec<_> = report.skipped.iter().map(|s| s.index).collect();
        assert_eq!(indices, [1, 2, 3]);
        assert!(matches!(
            report.skipped[0].reason,
            SkipReason::Invalid(DecodeError::MissingField { field: "kraftstoff", .. })
        ));
        assert!(matches!(report.skipped[1].reason, SkipReason::UnknownKind(None)));
        assert_eq!(report.skipped[1].to_string(), "Record 2: missing kind");
        assert!(matches!(
            report.skipped[2].reason,
            SkipReason::Invalid(DecodeError::NotAnObject)
        ));
    }

    #[test]
    fn test_load_replaces_collection() {
        let mut store = VehicleStore::open(MemoryStorage::new());
        store.add(yaris());
        store.vehicles.push(duke());
        assert_eq!(store.len(), 2);

        store.load_all();
        assert_eq!(store.vehicles(), [yaris()]);
    }

    #[test]
    fn test_unreadable_storage_is_empty() {
        let store = VehicleStore::open(BrokenStorage);
        assert!(store.is_empty());
        assert_eq!(store.list_all(), Report::Empty);
    }
}
