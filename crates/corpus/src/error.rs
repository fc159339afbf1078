use thiserror::Error;

/// Result type for corpus operations
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Errors that can occur while exporting a corpus
#[derive(Error, Debug)]
pub enum CorpusError {
    /// IO error while writing an export
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
