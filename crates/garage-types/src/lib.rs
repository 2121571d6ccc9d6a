//! Core types for the garage vehicle registry

mod error;

pub use error::*;
