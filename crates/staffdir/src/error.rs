//! Error types for staffdir.
//!
//! The directory itself reports absence through `bool` and `Option`; this
//! type covers the by-name update path, seed import, configuration and the
//! command-line session.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for staffdir operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Directory Errors ===
    /// No employee is stored under the given identifier.
    #[error("no employee with id {id}")]
    NotFound {
        /// Rendered identifier.
        id: String,
    },

    /// An employee with the given identifier already exists.
    #[error("an employee with id {id} already exists")]
    DuplicateId {
        /// Rendered identifier.
        id: String,
    },

    /// The field name matched none of the updatable fields.
    #[error("unknown field '{field}'")]
    UnknownField {
        /// The field name as supplied.
        field: String,
    },

    /// The value could not be read as the field's type.
    #[error("field '{field}' expects {expected}, got '{value}'")]
    TypeMismatch {
        /// Canonical name of the field.
        field: &'static str,
        /// Human-readable description of the expected type.
        expected: &'static str,
        /// The value as supplied.
        value: String,
    },

    // === Seed Errors ===
    /// Failed to read a seed file.
    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        /// Path to the seed file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Session Errors ===
    /// A shell line could not be parsed into a command.
    #[error("{0}")]
    CommandParse(String),

    // === I/O Errors ===
    /// File system or terminal operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for staffdir operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for the given identifier.
    #[must_use]
    pub fn not_found(id: impl std::fmt::Debug) -> Self {
        Self::NotFound {
            id: render_id(&id),
        }
    }

    /// Create a duplicate-id error for the given identifier.
    #[must_use]
    pub fn duplicate_id(id: impl std::fmt::Debug) -> Self {
        Self::DuplicateId {
            id: render_id(&id),
        }
    }

    /// Create an unknown-field error.
    #[must_use]
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Create a command parse error.
    #[must_use]
    pub fn command_parse(message: impl Into<String>) -> Self {
        Self::CommandParse(message.into())
    }

    /// Check if this error means the identifier was absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a rejected field update.
    #[must_use]
    pub fn is_update_rejected(&self) -> bool {
        matches!(self, Self::UnknownField { .. } | Self::TypeMismatch { .. })
    }
}

/// Render an identifier without the quotes `Debug` puts around strings.
fn render_id(id: &impl std::fmt::Debug) -> String {
    let rendered = format!("{id:?}");
    rendered
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .map_or_else(|| rendered.clone(), str::to_string)
}
