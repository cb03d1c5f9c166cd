//! Hotkey handling
//!
//! - 1 / 2 / 3: Show head A / B / C
//! - P: Cycle the carapace pattern
//! - Escape: Close the open panel

use bevy::prelude::*;
use customizer::ViewerState;
use scarab_ipc::{HeadVariant, ViewerCommand};
use scarab_scene::CommandInbox;

use crate::panel::UiFocus;

/// Command bound to `key`, given the current state
pub fn hotkey_command(key: KeyCode, state: &ViewerState) -> Option<ViewerCommand> {
    let command = match key {
        KeyCode::Digit1 => ViewerCommand::SelectHead(HeadVariant::A),
        KeyCode::Digit2 => ViewerCommand::SelectHead(HeadVariant::B),
        KeyCode::Digit3 => ViewerCommand::SelectHead(HeadVariant::C),
        KeyCode::KeyP => ViewerCommand::SelectPattern(state.shading.pattern.next()),
        KeyCode::Escape => ViewerCommand::ClickOutside,
        _ => return None,
    };
    Some(command)
}

/// Queue commands for hotkeys, unless a text field has the keyboard
pub fn handle_hotkeys(
    key_input: Res<ButtonInput<KeyCode>>,
    focus: Res<UiFocus>,
    state: Res<ViewerState>,
    mut inbox: ResMut<CommandInbox>,
) {
    if focus.keyboard {
        return;
    }

    for key in key_input.get_just_pressed() {
        if let Some(command) = hotkey_command(*key, &state) {
            debug!("Hotkey {:?}: {:?}", key, command);
            inbox.push_command(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scarab_ipc::PatternKind;

    #[test]
    fn test_digit_keys_select_heads() {
        let state = ViewerState::default();
        assert_eq!(
            hotkey_command(KeyCode::Digit2, &state),
            Some(ViewerCommand::SelectHead(HeadVariant::B))
        );
        assert_eq!(hotkey_command(KeyCode::Digit4, &state), None);
    }

    #[test]
    fn test_p_cycles_from_current_pattern() {
        let mut state = ViewerState::default();
        state.shading.pattern = PatternKind::Stripes;
        assert_eq!(
            hotkey_command(KeyCode::KeyP, &state),
            Some(ViewerCommand::SelectPattern(PatternKind::Stripes.next()))
        );
    }

    #[test]
    fn test_escape_closes_panel() {
        assert_eq!(
            hotkey_command(KeyCode::Escape, &ViewerState::default()),
            Some(ViewerCommand::ClickOutside)
        );
    }
}
