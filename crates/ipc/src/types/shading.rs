//! Scalar shading parameters exposed as sliders.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A slider-controlled scalar of the carapace material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShadingParam {
    IridescenceStrength,
    IridescenceShift,
    Shininess,
    SpecularStrength,
    EnvironmentIntensity,
}

impl ShadingParam {
    pub const ALL: [ShadingParam; 5] = [
        ShadingParam::IridescenceStrength,
        ShadingParam::IridescenceShift,
        ShadingParam::Shininess,
        ShadingParam::SpecularStrength,
        ShadingParam::EnvironmentIntensity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShadingParam::IridescenceStrength => "Iridescence",
            ShadingParam::IridescenceShift => "Color shift",
            ShadingParam::Shininess => "Shininess",
            ShadingParam::SpecularStrength => "Highlights",
            ShadingParam::EnvironmentIntensity => "Reflections",
        }
    }

    /// Slider bounds. Values are not validated against these beyond the widget.
    pub fn range(self) -> RangeInclusive<f32> {
        match self {
            ShadingParam::IridescenceStrength => 0.0..=3.0,
            ShadingParam::IridescenceShift => 0.0..=1.0,
            ShadingParam::Shininess => 1.0..=200.0,
            ShadingParam::SpecularStrength => 0.0..=2.0,
            ShadingParam::EnvironmentIntensity => 0.0..=1.0,
        }
    }

    /// Slider step size
    pub fn step(self) -> f32 {
        match self {
            ShadingParam::Shininess => 1.0,
            _ => 0.01,
        }
    }
}
