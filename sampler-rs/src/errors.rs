//! Module errors

use thiserror::Error;

/// Represents the different types of errors that can occur while sampling device motion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    /// Http client to connect with the device could not be built.
    #[error("Error building client: {0}")]
    ClientBuild(String),

    /// Device could not be reached.
    #[error("Error fetching data: {0}")]
    FetchData(String),

    /// Received data has an unexpected format.
    #[error("Incorrect data format: {0}")]
    IncorrectDataFormat(String),

    #[error("Device motion data is not available")]
    Unavailable,

    /// Recorded motion could not be loaded.
    #[error("Error loading replay data: {0}")]
    ReplayLoad(String),

    #[error("{0}")]
    Other(String),
}
