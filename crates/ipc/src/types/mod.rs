//! Type definitions for IPC messages.

mod color;
mod model;
mod panel;
mod shading;
mod snapshot;

pub use color::*;
pub use model::*;
pub use panel::*;
pub use shading::*;
pub use snapshot::*;
