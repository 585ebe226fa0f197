//! Error types for building the pattern registry

use crate::registry::Role;
use thiserror::Error;

/// Errors that can occur while building a [`Registry`](crate::Registry)
///
/// Reading an email never fails; only malformed pattern data does.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A pattern could not be compiled
    #[error("Invalid pattern for {role}: {pattern}")]
    InvalidPattern {
        role: Role,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A declared capture slot does not exist in the compiled pattern
    #[error("Pattern for {role} declares capture `{name}` it does not define: {pattern}")]
    MissingCapture {
        role: Role,
        pattern: String,
        name: String,
    },

    /// The pattern table was written for another table format
    #[error("Unsupported pattern table version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// The pattern table could not be deserialized
    #[error("Failed to read pattern table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
