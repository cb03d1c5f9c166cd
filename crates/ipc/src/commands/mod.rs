//! Command types for IPC messages.

use serde::{Deserialize, Serialize};

use crate::types::{HeadVariant, Panel, PatternKind, Rgb, ShadingParam};

/// A single user intent from the control panel.
///
/// Every control maps to exactly one variant, and applying a command whose
/// value already matches the current state changes nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ViewerCommand {
    /// Color shown where the pattern mask is white
    SetBaseColor(Rgb),
    /// Color shown where the pattern mask is black
    SetAccentColor(Rgb),
    SelectPattern(PatternKind),
    SelectHead(HeadVariant),
    SetShadingParam { param: ShadingParam, value: f32 },
    /// Open a panel, or close it if it is already open
    TogglePanel(Panel),
    /// Pointer pressed outside the control UI
    ClickOutside,
}
