//! Error types for OFF parsing
//!
//! This module provides error handling for reading, validating and writing
//! OFF polyhedron descriptions. All errors carry an error code for
//! categorization and, where possible, the offending line number.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and encoding errors
//! - **E2xxx**: File structure errors (header, counts line)
//! - **E3xxx**: Model content errors (numbers, references, invariants)
//! - **E5xxx**: Output errors
//!
//! ## Common Error Codes
//!
//! - `E1001`: I/O error reading file
//! - `E1002`: Input is not valid UTF-8
//! - `E2001`: First line is not the `OFF` keyword (strict header policy only)
//! - `E2002`: No counts line after the header
//! - `E3001`: Invalid model structure
//! - `E3002`: Numeric parse error
//! - `E3003`: Vertex index out of range
//! - `E5001`: Writing OFF output failed

use std::io;
use thiserror::Error;

/// Result type for OFF operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading or writing OFF files
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the file
    ///
    /// **Error Code**: E1001
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes are not valid UTF-8
    ///
    /// **Error Code**: E1002
    ///
    /// **Suggestions**:
    /// - Re-export the file as plain ASCII or UTF-8 text
    #[error("[E1002] Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// First line is not the `OFF` keyword
    ///
    /// **Error Code**: E2001
    ///
    /// Only raised under [`HeaderPolicy::Strict`](crate::HeaderPolicy::Strict).
    #[error("[E2001] Not an OFF file: {0}")]
    InvalidHeader(String),

    /// No counts line follows the header
    ///
    /// **Error Code**: E2002
    ///
    /// **Common Causes**:
    /// - Empty file, or a file containing only the header and comments
    #[error("[E2002] Missing counts line: expected '<vertices> <faces> [<edges>]' after the header")]
    MissingCounts,

    /// Invalid model structure
    ///
    /// **Error Code**: E3001
    ///
    /// **Common Causes**:
    /// - Colour vectors not parallel to their element vectors
    /// - Non-canonical edges in a hand-built model
    #[error("[E3001] Invalid model: {0}")]
    InvalidModel(String),

    /// Parse error for numeric values
    ///
    /// **Error Code**: E3002
    ///
    /// **Common Causes**:
    /// - Non-numeric text where a coordinate, count or index is expected
    /// - A vertex line with fewer than three coordinates
    ///
    /// **Suggestions**:
    /// - Verify numeric values use proper format (e.g., "1.5" not "1,5")
    #[error("[E3002] Parse error: {0}")]
    ParseError(String),

    /// A face, edge or colour record names a vertex that does not exist
    ///
    /// **Error Code**: E3003
    ///
    /// **Suggestions**:
    /// - Check that vertex ids are 0-based and below the vertex count
    #[error("[E3003] Invalid reference: {0}")]
    InvalidReference(String),

    /// Writing OFF output failed
    ///
    /// **Error Code**: E5001
    #[error("[E5001] Write error: {0}")]
    Write(String),
}

impl Error {
    /// Create a ParseError naming the line, field and offending value
    ///
    /// # Arguments
    /// * `line` - 1-based line number in the normalized text
    /// * `field_name` - The name of the field being parsed (e.g., "vertex x coordinate")
    /// * `value` - The value that failed to parse
    /// * `expected_type` - The expected type (e.g., "floating-point number")
    pub fn parse_error_at(line: usize, field_name: &str, value: &str, expected_type: &str) -> Self {
        Error::ParseError(format!(
            "Line {}: failed to parse '{}': expected {}, got '{}'",
            line, field_name, expected_type, value
        ))
    }

    /// Create an InvalidReference error for an out-of-range vertex id
    pub fn vertex_out_of_range(owner: &str, index: usize, vertex_count: usize) -> Self {
        Error::InvalidReference(format!(
            "{} references vertex {} but the model has {} vertices",
            owner, index, vertex_count
        ))
    }
}
