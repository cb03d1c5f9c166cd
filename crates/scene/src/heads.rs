//! Head variant visibility
//!
//! [`ViewerState`] decides which variant is shown; this just mirrors that
//! decision onto the tagged scene nodes.

use bevy::prelude::*;
use customizer::ViewerState;
use scarab_ipc::HeadVariant;

/// Tags the scene node of one head variant
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadMesh(pub HeadVariant);

/// Show the active head and hide the rest
pub fn sync_head_visibility(
    state: Res<ViewerState>,
    added: Query<(), Added<HeadMesh>>,
    mut heads: Query<(&HeadMesh, &mut Visibility)>,
) {
    if !state.is_changed() && added.is_empty() {
        return;
    }

    for (head, mut visibility) in heads.iter_mut() {
        let target = if state.heads().is_visible(head.0) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        visibility.set_if_neq(target);
    }
}
