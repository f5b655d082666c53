use thiserror::Error;

/// Problems found while turning user input into a head position and a request list.
///
/// These are raised by the input adapters before the calculator is ever invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("Initial head position is missing")]
    MissingHeadPosition,

    #[error("Initial head position '{0}' is not an integer")]
    NonNumericHeadPosition(String),

    #[error("Request list is missing or empty")]
    MissingRequests,

    #[error("Request #{position} ('{token}') is not an integer")]
    NonNumericRequest { position: usize, token: String },

    #[error("Disk size '{0}' is not an integer")]
    NonNumericDiskSize(String),

    #[error("Disk size must be positive, got {0}")]
    NonPositiveDiskSize(i64),

    #[error("Cylinder {value} lies outside the disk (valid range 0..{disk_size})")]
    OutOfRange { value: i64, disk_size: i64 },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse scenario JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error("Failed to render chart: {0}")]
    RenderError(String),

    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
