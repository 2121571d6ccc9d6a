//! Persistent store for vehicles

pub mod storage;
pub mod vehicles;

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use vehicles::{LoadReport, Report, SkipReason, SkippedRecord, VehicleStore};

/// File name used when no store path is configured
pub const DEFAULT_FILE_NAME: &str = "fahrzeuge.json";
