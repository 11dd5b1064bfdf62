// ============================================================================
// mediaprobe-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for Mediaprobe Core
//
// Only parsing can fail. Missing or mistyped fields are never errors; the
// accessors resolve them to `None` instead.
//
// AI-ASSISTANT-INFO: Error types for the mediaprobe core library

use thiserror::Error;

/// Custom error types for mediaprobe
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for mediaprobe operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
