//! Scarab customization core - state, commands and shading model
//!
//! This crate holds everything about the beetle customizer that does not need
//! a GPU:
//! - [`params`] - the carapace and head shading parameter sets
//! - [`shading`] - CPU reference of both fragment programs
//! - [`pattern`] - grayscale pattern masks and the plain fallback
//! - [`heads`] - mutually exclusive head variant visibility
//! - [`roles`] - closed mapping from mesh names to material roles
//! - [`reflection`] - environment snapshot cadence and cube face mapping
//! - [`panel`] - single-select settings panel state
//! - [`state`] - the [`ViewerState`] controller every UI intent goes through

pub mod error;
pub mod heads;
pub mod palette;
pub mod panel;
pub mod params;
pub mod pattern;
pub mod reflection;
pub mod roles;
pub mod shading;
pub mod state;

pub use error::*;
pub use heads::*;
pub use palette::*;
pub use panel::*;
pub use params::*;
pub use pattern::*;
pub use reflection::*;
pub use roles::*;
pub use state::*;
