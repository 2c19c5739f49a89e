//! Error types for hashpath
//!
//! Plain attribute access never fails: a missing key is reported as
//! [`Wrapped::Absent`](crate::Wrapped::Absent). The errors below belong to
//! the strict surfaces only (pointer resolution, required fields, limit
//! configuration and typed extraction).

use thiserror::Error;

/// Errors raised by the strict traversal and extraction APIs
#[derive(Debug, Error)]
pub enum HashpathError {
    /// Pointer path not found in the document
    #[error(
        "Pointer not found: '{pointer}' does not exist.\n\
         \n\
         Reached: '{reached_path}'\n\
         Available keys at this level: {available_keys}"
    )]
    PointerNotFound {
        /// JSON Pointer that was being resolved
        pointer: String,
        /// Path navigated up to and including the failing segment
        reached_path: String,
        /// Keys (or shape summary) available at the failure point
        available_keys: String,
    },

    /// Invalid pointer syntax
    #[error(
        "Invalid JSON Pointer syntax: '{pointer}' - {reason}\n\
         \n\
         JSON Pointers must:\n\
         - Start with '/' (or be empty string for root)\n\
         - Use '~0' to escape '~' and '~1' to escape '/'\n\
         \n\
         See RFC 6901 for details."
    )]
    InvalidPointer {
        /// The invalid pointer string
        pointer: String,
        /// Explanation of why the pointer is invalid
        reason: String,
    },

    /// Pointer string too long
    #[error("Pointer too long: {length} characters (max: {max_length})")]
    PointerTooLong {
        /// The pointer string that exceeded the limit
        pointer: String,
        /// Actual length of the pointer string
        length: usize,
        /// Maximum pointer length allowed
        max_length: usize,
    },

    /// Pointer depth limit exceeded
    #[error("Pointer depth limit exceeded: '{pointer}' has depth {depth} (max: {max_depth})")]
    DepthLimitExceeded {
        /// JSON Pointer being resolved
        pointer: String,
        /// Number of segments in the pointer
        depth: usize,
        /// Maximum depth allowed
        max_depth: usize,
    },

    /// Configured limits exceed the hard maximums
    #[error(
        "Configuration exceeds hard limits: {reason}\n\
         \n\
         Hard limits:\n\
         - max_depth: {max_depth}\n\
         - max_pointer_length: {max_pointer_length}"
    )]
    LimitsExceedHardMaximum {
        /// Which limit was exceeded and by how much
        reason: String,
        /// Hard maximum for pointer depth
        max_depth: usize,
        /// Hard maximum for pointer length
        max_pointer_length: usize,
    },

    /// A required field is missing from a mapping
    #[error("Missing field '{field}'. Available keys: {available_keys}")]
    MissingField {
        /// Field name that was requested
        field: String,
        /// Keys present in the mapping
        available_keys: String,
    },

    /// Value has a different shape than the operation needs
    #[error("Type mismatch for '{field}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Field or path that was requested
        field: String,
        /// Expected shape (e.g. "mapping")
        expected: &'static str,
        /// Shape actually found (e.g. "sequence", "null")
        found: &'static str,
    },

    /// JSON conversion or typed extraction failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, HashpathError>;
