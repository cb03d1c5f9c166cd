//! Applying UI messages to the viewer state

use bevy::prelude::*;
use customizer::{StateChange, ViewerState};
use scarab_ipc::{UiToViewer, ViewerToUi};

use crate::ViewerSet;
use crate::heads::sync_head_visibility;
use crate::messages::{CommandInbox, OutboundUiMessages};

/// State, queues and the command drain. Needs no renderer, so it is the
/// part of the scene that headless tests run.
pub struct CommandPlugin;

impl Plugin for CommandPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerState>()
            .init_resource::<CommandInbox>()
            .init_resource::<OutboundUiMessages>()
            .configure_sets(
                Update,
                (ViewerSet::Input, ViewerSet::Commands, ViewerSet::Sync, ViewerSet::Capture).chain(),
            )
            .add_systems(Startup, announce_initial_state)
            .add_systems(Update, apply_ui_messages.in_set(ViewerSet::Commands))
            .add_systems(Update, sync_head_visibility.in_set(ViewerSet::Sync));
    }
}

fn announce_initial_state(state: Res<ViewerState>, mut outbound: ResMut<OutboundUiMessages>) {
    info!(
        "Starting with base {} and accent {}",
        state.shading.base_color, state.shading.accent_color
    );
    outbound.send(ViewerToUi::Initialize(state.snapshot()));
}

/// Drain the inbox into [`ViewerState`].
///
/// Applies bypass change detection; the state is only flagged changed when
/// something the renderer reads was modified.
fn apply_ui_messages(
    mut inbox: ResMut<CommandInbox>,
    mut state: ResMut<ViewerState>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    if inbox.is_empty() {
        return;
    }

    for msg in inbox.drain() {
        let command = match msg {
            UiToViewer::Ready => {
                outbound.send(ViewerToUi::Initialize(state.snapshot()));
                continue;
            }
            UiToViewer::Command(command) => command,
        };

        match state.bypass_change_detection().apply(&command) {
            Ok(StateChange::Unchanged) => {}
            Ok(StateChange::Shading) => state.set_changed(),
            Ok(StateChange::Pattern(pattern)) => {
                state.set_changed();
                outbound.send(ViewerToUi::PatternChanged { pattern });
            }
            Ok(StateChange::Head(head)) => {
                state.set_changed();
                outbound.send(ViewerToUi::HeadChanged { head });
            }
            Ok(StateChange::Panel(panel)) => {
                outbound.send(ViewerToUi::PanelChanged { panel });
            }
            Err(e) => warn!("Ignoring {:?}: {}", command, e),
        }
    }
}
