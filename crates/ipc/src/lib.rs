//! IPC message protocol for Scarab
//!
//! Defines every message exchanged between a control panel (the egui panel in
//! the native build, the host page in the WASM build) and the viewer.

mod commands;
mod error;
mod messages;
mod types;

pub use commands::*;
pub use error::*;
pub use messages::*;
pub use types::*;
