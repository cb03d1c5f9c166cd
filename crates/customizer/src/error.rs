//! Error types for the customization core.

use scarab_ipc::{HeadVariant, ShadingParam};

use crate::roles::MeshRole;

/// A command that was understood but could not be applied.
///
/// These are diagnostics only: the state is left untouched when one is
/// returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("cannot switch to {0:?}: no head meshes loaded yet")]
    ModelNotLoaded(HeadVariant),

    #[error("head {0:?} not found in loaded model")]
    HeadNotLoaded(HeadVariant),

    #[error("{param:?} must be finite, got {value}")]
    NonFiniteValue { param: ShadingParam, value: f32 },
}

/// The loaded model is missing meshes the viewer depends on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("model is missing expected meshes: {}", format_roles(.0))]
    MissingRoles(Vec<MeshRole>),
}

fn format_roles(roles: &[MeshRole]) -> String {
    roles
        .iter()
        .map(|role| format!("{role:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}
