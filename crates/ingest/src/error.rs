use thiserror::Error;

/// Result type for ingest operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors that can occur while reading and classifying source rows
#[derive(Error, Debug)]
pub enum IngestError {
    /// IO error while reading the source file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A required column is missing from the header row
    #[error("Missing required column: '{0}'")]
    MissingColumn(String),

    /// An id cell could not be parsed as an integer
    #[error("Invalid value in column '{column}': '{value}' is not an id")]
    InvalidId { column: String, value: String },

    /// Evaluation cell failed the record model's gating rules
    #[error("Record error: {0}")]
    RecordError(#[from] argeval_record::RecordError),
}
