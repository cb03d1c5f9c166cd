//! Keyboard and pointer input outside the control panel

use bevy::prelude::*;
use customizer::ViewerState;
use scarab_ipc::ViewerCommand;
use scarab_scene::{CommandInbox, ViewerSet};

use crate::panel::UiFocus;

mod hotkeys;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (hotkeys::handle_hotkeys, close_panel_on_click_outside).in_set(ViewerSet::Input),
        );

        info!("Input plugin initialized");
    }
}

/// A press on the 3D view closes the open panel
fn close_panel_on_click_outside(
    mouse_button: Res<ButtonInput<MouseButton>>,
    focus: Res<UiFocus>,
    state: Res<ViewerState>,
    mut inbox: ResMut<CommandInbox>,
) {
    if focus.pointer || state.panel().open_panel().is_none() {
        return;
    }
    if mouse_button.get_just_pressed().next().is_some() {
        inbox.push_command(ViewerCommand::ClickOutside);
    }
}
