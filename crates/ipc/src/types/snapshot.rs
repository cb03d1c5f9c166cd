//! Full viewer state as seen by the control UI.

use serde::{Deserialize, Serialize};

use super::{HeadVariant, Panel, PatternKind, Rgb};

/// Everything a freshly loaded UI needs to render its controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerSnapshot {
    pub base_color: Rgb,
    pub accent_color: Rgb,
    pub pattern: PatternKind,
    /// `None` until the model has loaded
    pub head: Option<HeadVariant>,
    pub panel: Option<Panel>,
    pub iridescence_strength: f32,
    pub iridescence_shift: f32,
    pub shininess: f32,
    pub specular_strength: f32,
    pub environment_intensity: f32,
}
