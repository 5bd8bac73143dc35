//! Error types for CSVV parsing.

use thiserror::Error;

/// Errors that can occur while interpreting a CSVV file.
#[derive(Debug, Error)]
pub enum CsvvError {
    #[error("Missing header block (expected '---' ... '...')")]
    MissingHeader,

    #[error("Missing csvv-version attribute")]
    MissingVersion,

    #[error("Unknown version {0}")]
    UnknownVersion(String),

    #[error("Malformed header line: {0}")]
    MalformedHeader(String),

    #[error("Data row before any block keyword: {0}")]
    RowBeforeKeyword(String),

    #[error("Missing block: {0}")]
    MissingBlock(String),

    #[error("Failed to parse number '{value}' in block '{block}'")]
    BadNumber { block: String, value: String },

    #[error("Block '{block}' has ragged rows: {detail}")]
    RaggedBlock { block: String, detail: String },
}

/// Result type for CSVV parsing.
pub type CsvvResult<T> = Result<T, CsvvError>;
