use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No path between stations '{origin}' and '{destination}'")]
    NoPath { origin: String, destination: String },
    #[error("Unknown station: {0}")]
    UnknownStation(String),
    #[error("Invalid connection '{origin}' - '{destination}': {reason}")]
    InvalidConnection {
        origin: String,
        destination: String,
        reason: String,
    },
    #[error("Duplicate connection between '{0}' and '{1}'")]
    DuplicateConnection(String, String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Invalid travel conditions: {0}")]
    InvalidConditions(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Configuration error: {0}")]
    ConfigError(#[from] toml::de::Error),
}
