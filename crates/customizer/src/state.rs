//! The viewer's application state and its single command handler

use scarab_ipc::{HeadVariant, Panel, PatternKind, ViewerCommand, ViewerSnapshot};
use tracing::debug;

#[cfg(feature = "bevy")]
use bevy::prelude::Resource;

use crate::error::CommandError;
use crate::heads::HeadVariants;
use crate::palette::Palette;
use crate::panel::PanelState;
use crate::params::{HeadShading, ShadingParams};

/// What a command changed, so the renderer only re-uploads what it must
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// The command matched the current state
    Unchanged,
    /// A carapace color or scalar changed
    Shading,
    Pattern(PatternKind),
    Head(HeadVariant),
    /// Panel state changed. Never affects rendering.
    Panel(Option<Panel>),
}

/// Everything the controls can change, owned in one place.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "bevy", derive(Resource))]
pub struct ViewerState {
    pub shading: ShadingParams,
    pub head_shading: HeadShading,
    heads: HeadVariants,
    panel: PanelState,
}

impl ViewerState {
    pub fn new(shading: ShadingParams, head_shading: HeadShading) -> Self {
        Self {
            shading,
            head_shading,
            ..Default::default()
        }
    }

    /// Default parameters with the given starting colors
    pub fn with_palette(palette: Palette) -> Self {
        Self::new(
            ShadingParams {
                base_color: palette.base,
                accent_color: palette.accent,
                ..Default::default()
            },
            HeadShading::default(),
        )
    }

    pub fn heads(&self) -> &HeadVariants {
        &self.heads
    }

    pub fn panel(&self) -> PanelState {
        self.panel
    }

    /// Record the head variants found in the loaded model; shows the first
    pub fn model_loaded(&mut self, heads: impl IntoIterator<Item = HeadVariant>) -> Option<HeadVariant> {
        self.heads.on_model_loaded(heads)
    }

    /// Apply one UI intent.
    ///
    /// On error nothing was mutated; callers log the error and carry on.
    pub fn apply(&mut self, command: &ViewerCommand) -> Result<StateChange, CommandError> {
        let change = match *command {
            ViewerCommand::SetBaseColor(color) => {
                replace(&mut self.shading.base_color, color, StateChange::Shading)
            }
            ViewerCommand::SetAccentColor(color) => {
                replace(&mut self.shading.accent_color, color, StateChange::Shading)
            }
            ViewerCommand::SelectPattern(pattern) => {
                replace(&mut self.shading.pattern, pattern, StateChange::Pattern(pattern))
            }
            ViewerCommand::SelectHead(head) => {
                if self.heads.switch_to(head)? {
                    StateChange::Head(head)
                } else {
                    StateChange::Unchanged
                }
            }
            ViewerCommand::SetShadingParam { param, value } => {
                if !value.is_finite() {
                    return Err(CommandError::NonFiniteValue { param, value });
                }
                if self.shading.set(param, value) {
                    StateChange::Shading
                } else {
                    StateChange::Unchanged
                }
            }
            ViewerCommand::TogglePanel(panel) => StateChange::Panel(self.panel.toggle(panel)),
            ViewerCommand::ClickOutside => {
                if self.panel.close() {
                    StateChange::Panel(None)
                } else {
                    StateChange::Unchanged
                }
            }
        };
        debug!("Applied {:?}: {:?}", command, change);
        Ok(change)
    }

    /// Current state in the shape the UI consumes
    pub fn snapshot(&self) -> ViewerSnapshot {
        let s = &self.shading;
        ViewerSnapshot {
            base_color: s.base_color,
            accent_color: s.accent_color,
            pattern: s.pattern,
            head: self.heads.active(),
            panel: self.panel.open_panel(),
            iridescence_strength: s.iridescence_strength,
            iridescence_shift: s.iridescence_shift,
            shininess: s.shininess,
            specular_strength: s.specular_strength,
            environment_intensity: s.environment_intensity,
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T, change: StateChange) -> StateChange {
    if *slot == value {
        return StateChange::Unchanged;
    }
    *slot = value;
    change
}
