//! Error types shared by the cleaning jobs.

use thiserror::Error;

/// Result type alias using PrepError.
pub type PrepResult<T> = Result<T, PrepError>;

/// Primary error type for data-cleaning operations.
#[derive(Debug, Error)]
pub enum PrepError {
    // === Configuration errors ===
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Pattern model '{model}' has no source mapping for scenario '{scenario}'")]
    MissingPatternMapping { model: String, scenario: String },

    // === Source-location errors ===
    #[error("Cannot derive year from source location: {0}")]
    YearFromUri(String),

    #[error("Derived year {year} out of range for source location: {uri}")]
    YearOutOfRange { year: i64, uri: String },

    // === Data errors ===
    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    #[error("Missing variable: {0}")]
    MissingVariable(String),

    #[error("Missing coordinate: {0}")]
    MissingCoordinate(String),

    #[error("Missing attribute: {0}")]
    MissingAttribute(String),

    #[error("Missing historical counterpart: {0}")]
    MissingHistorical(String),

    #[error("Failed to parse coefficient file: {0}")]
    CsvvParse(String),

    #[error("Unknown coefficient file version: {0}")]
    CsvvVersion(String),

    #[error("Covariance matrix is not positive definite")]
    CovarianceNotPositiveDefinite,

    // === Storage errors ===
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Failed to read NetCDF data: {0}")]
    NetCdfError(String),

    #[error("Failed to read/write Zarr data: {0}")]
    ZarrError(String),

    #[error("Failed to read tabular data: {0}")]
    TabularError(String),

    // === Infrastructure errors ===
    #[error("Internal error: {0}")]
    InternalError(String),
}

// Conversion from common error types
impl From<std::io::Error> for PrepError {
    fn from(err: std::io::Error) -> Self {
        PrepError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for PrepError {
    fn from(err: serde_json::Error) -> Self {
        PrepError::InternalError(format!("JSON error: {}", err))
    }
}
