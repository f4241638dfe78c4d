//! Error types for the Galaxy3D camera
//!
//! This module defines the error types returned by the camera, its
//! parameter-block upload path and the structured constant buffer.

use std::fmt;

/// Result type for Galaxy3D camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D camera errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Named variable not present in a parameter block layout
    FieldNotFound(String),

    /// Invalid resource description (buffer layout, field list, etc.)
    InvalidResource(String),

    /// Write or lookup outside the bounds of a resource
    OutOfBounds(String),

    /// Shared collaborator lock poisoned (pattern generator, etc.)
    LockPoisoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FieldNotFound(name) => write!(f, "Field not found: {}", name),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
            Error::LockPoisoned(what) => write!(f, "Lock poisoned: {}", what),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
