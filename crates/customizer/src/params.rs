//! Shading parameter sets for the carapace and head/leg materials

use scarab_ipc::{PatternKind, Rgb, ShadingParam, srgb_to_linear};
use serde::{Deserialize, Serialize};

/// Share of the environment reflection blended into the carapace color,
/// multiplied by the environment intensity parameter
pub const ENV_BLEND: f32 = 0.3;

/// Gray level of the head and leg surfaces as it appears on screen
/// (sRGB-encoded, about 13/255)
pub const HEAD_BASE_LUMINANCE: f32 = 0.05;

/// Ambient share of the head/leg lighting; the rest is diffuse
pub const HEAD_AMBIENT: f32 = 0.3;

/// Position of the single point light both materials shade against
pub const DEFAULT_LIGHT_POSITION: [f32; 3] = [5.0, 10.0, 5.0];

/// Which color the bright parts of a pattern mask receive.
///
/// The authored look puts the base color on white mask texels and the accent
/// color on black ones, which reads as inverted next to the control labels.
/// Kept as a setting instead of being "fixed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MaskPolarity {
    /// Mask value 1 selects the base color
    #[default]
    BaseOnPattern,
    /// Mask value 1 selects the accent color
    AccentOnPattern,
}

impl MaskPolarity {
    /// Turn a sampled mask value into the base-color weight
    pub fn weight(self, mask: f32) -> f32 {
        match self {
            MaskPolarity::BaseOnPattern => mask,
            MaskPolarity::AccentOnPattern => 1.0 - mask,
        }
    }

    /// Shader flag (0.0 or 1.0)
    pub fn as_flag(self) -> f32 {
        match self {
            MaskPolarity::BaseOnPattern => 0.0,
            MaskPolarity::AccentOnPattern => 1.0,
        }
    }
}

/// Parameters of the carapace material. Mutated only through
/// [`crate::ViewerState::apply`], read every frame by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadingParams {
    pub base_color: Rgb,
    pub accent_color: Rgb,
    pub pattern: PatternKind,
    pub iridescence_strength: f32,
    pub iridescence_shift: f32,
    pub shininess: f32,
    pub specular_strength: f32,
    pub environment_intensity: f32,
    pub light_position: [f32; 3],
    pub mask_polarity: MaskPolarity,
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self {
            base_color: Rgb::from_u32(0x2e7d32),
            accent_color: Rgb::from_u32(0xffb300),
            pattern: PatternKind::Spots,
            iridescence_strength: 1.5,
            iridescence_shift: 0.3,
            shininess: 80.0,
            specular_strength: 0.8,
            environment_intensity: 0.3,
            light_position: DEFAULT_LIGHT_POSITION,
            mask_polarity: MaskPolarity::default(),
        }
    }
}

impl ShadingParams {
    pub fn get(&self, param: ShadingParam) -> f32 {
        match param {
            ShadingParam::IridescenceStrength => self.iridescence_strength,
            ShadingParam::IridescenceShift => self.iridescence_shift,
            ShadingParam::Shininess => self.shininess,
            ShadingParam::SpecularStrength => self.specular_strength,
            ShadingParam::EnvironmentIntensity => self.environment_intensity,
        }
    }

    /// Store a scalar, returning whether the stored value changed
    pub fn set(&mut self, param: ShadingParam, value: f32) -> bool {
        let slot = match param {
            ShadingParam::IridescenceStrength => &mut self.iridescence_strength,
            ShadingParam::IridescenceShift => &mut self.iridescence_shift,
            ShadingParam::Shininess => &mut self.shininess,
            ShadingParam::SpecularStrength => &mut self.specular_strength,
            ShadingParam::EnvironmentIntensity => &mut self.environment_intensity,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        true
    }
}

/// Parameters of the shared head/leg material. Not exposed to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadShading {
    /// sRGB-encoded; see [`HeadShading::linear_base`]
    pub base_luminance: f32,
    pub shininess: f32,
    pub specular_strength: f32,
    pub light_position: [f32; 3],
}

impl Default for HeadShading {
    fn default() -> Self {
        Self {
            base_luminance: HEAD_BASE_LUMINANCE,
            shininess: 60.0,
            specular_strength: 0.5,
            light_position: DEFAULT_LIGHT_POSITION,
        }
    }
}

impl HeadShading {
    /// Base gray in linear light, the value the head shader lights
    pub fn linear_base(&self) -> f32 {
        srgb_to_linear(self.base_luminance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_base_is_near_black_on_screen() {
        let linear = HeadShading::default().linear_base();
        assert!((linear - 0.00395).abs() < 1e-4, "{linear}");
    }

    #[test]
    fn test_set_reports_change() {
        let mut params = ShadingParams::default();
        assert!(!params.set(ShadingParam::Shininess, 80.0));
        assert!(params.set(ShadingParam::Shininess, 12.0));
        assert_eq!(params.get(ShadingParam::Shininess), 12.0);
    }

    #[test]
    fn test_every_param_roundtrips_through_get_set() {
        let mut params = ShadingParams::default();
        for (i, param) in ShadingParam::ALL.into_iter().enumerate() {
            let value = 0.25 + i as f32;
            params.set(param, value);
            assert_eq!(params.get(param), value);
        }
    }

    #[test]
    fn test_mask_polarity_weight() {
        assert_eq!(MaskPolarity::BaseOnPattern.weight(0.8), 0.8);
        assert!((MaskPolarity::AccentOnPattern.weight(0.8) - 0.2).abs() < 1e-6);
        assert_eq!(MaskPolarity::default(), MaskPolarity::BaseOnPattern);
    }
}
