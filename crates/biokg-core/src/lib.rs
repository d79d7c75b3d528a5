//! BioKG Core — error taxonomy and build configuration.

pub mod config;
pub mod error;

pub use config::{BuildConfig, DataPaths};
pub use error::{Error, Result};
