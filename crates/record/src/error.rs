use thiserror::Error;

/// Result type for record construction and field lookups
pub type Result<T> = std::result::Result<T, RecordError>;

/// Errors that can occur while building or inspecting evaluation records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A required numeric cell could not be parsed as an integer
    #[error("Invalid value for field '{field}': '{value}' is not an integer")]
    InvalidField { field: &'static str, value: String },

    /// A field name outside the fixed evaluation schema
    #[error("Unknown evaluation field: '{0}'")]
    UnknownField(String),
}

impl RecordError {
    /// Create an invalid-field error
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }

    /// Create an unknown-field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }
}
