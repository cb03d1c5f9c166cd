//! Mesh roles: the closed set of named sub-meshes the viewer binds to

use scarab_config::MeshNames;
use scarab_ipc::HeadVariant;
use serde::{Deserialize, Serialize};

use crate::error::BindingError;

/// What a named sub-mesh of the model is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MeshRole {
    Carapace,
    Head(HeadVariant),
    Legs,
}

/// Which material a role is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Carapace,
    Head,
}

impl MeshRole {
    /// Every role the model is expected to provide
    pub const ALL: [MeshRole; 5] = [
        MeshRole::Carapace,
        MeshRole::Head(HeadVariant::A),
        MeshRole::Head(HeadVariant::B),
        MeshRole::Head(HeadVariant::C),
        MeshRole::Legs,
    ];

    /// Exact-match lookup of a node or mesh name
    pub fn from_mesh_name(names: &MeshNames, name: &str) -> Option<Self> {
        if name == names.carapace {
            return Some(MeshRole::Carapace);
        }
        if name == names.legs {
            return Some(MeshRole::Legs);
        }
        HeadVariant::ALL
            .into_iter()
            .zip(names.heads.iter())
            .find(|(_, head_name)| head_name.as_str() == name)
            .map(|(variant, _)| MeshRole::Head(variant))
    }

    pub fn material(self) -> MaterialKind {
        match self {
            MeshRole::Carapace => MaterialKind::Carapace,
            MeshRole::Head(_) | MeshRole::Legs => MaterialKind::Head,
        }
    }
}

/// Roles discovered while walking a freshly spawned model
#[derive(Debug, Clone, Default)]
pub struct RoleInventory {
    found: Vec<MeshRole>,
}

impl RoleInventory {
    pub fn record(&mut self, role: MeshRole) {
        if !self.found.contains(&role) {
            self.found.push(role);
        }
    }

    pub fn contains(&self, role: MeshRole) -> bool {
        self.found.contains(&role)
    }

    /// Head variants present in the model
    pub fn heads(&self) -> impl Iterator<Item = HeadVariant> + '_ {
        self.found.iter().filter_map(|role| match role {
            MeshRole::Head(variant) => Some(*variant),
            _ => None,
        })
    }

    /// Check every expected role was found, listing all missing ones
    pub fn validate(&self) -> Result<(), BindingError> {
        let missing: Vec<MeshRole> = MeshRole::ALL
            .into_iter()
            .filter(|role| !self.contains(*role))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(BindingError::MissingRoles(missing))
        }
    }
}
