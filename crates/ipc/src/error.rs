//! Error types for IPC operations.

/// Errors that can occur during IPC operations.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("Invalid message JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A `#rrggbb` string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {input:?}: expected #rrggbb")]
pub struct ColorParseError {
    pub input: String,
}
