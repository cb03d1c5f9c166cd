//! CPU reference of the carapace and head fragment programs
//!
//! Every function here mirrors a block of `carapace.wgsl` / `head.wgsl` term
//! by term. The GPU never calls into this module; it exists so the color
//! math can be checked without a renderer.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::params::{ENV_BLEND, HEAD_AMBIENT, HeadShading, ShadingParams};

/// Geometry seen by one fragment, all vectors in world space
#[derive(Debug, Clone, Copy)]
pub struct SurfaceSample {
    pub world_position: Vec3,
    /// Surface normal (normalized by the callee)
    pub normal: Vec3,
    pub camera_position: Vec3,
}

impl SurfaceSample {
    pub fn view_dir(&self) -> Vec3 {
        (self.camera_position - self.world_position).normalize_or_zero()
    }

    pub fn light_dir(&self, light_position: [f32; 3]) -> Vec3 {
        (Vec3::from_array(light_position) - self.world_position).normalize_or_zero()
    }
}

/// Blend of accent and base color for a sampled mask value, in linear RGB.
///
/// Written as a weighted sum so the endpoints are exact: weight 1 yields the
/// base color and weight 0 the accent color bit for bit.
pub fn pattern_color(params: &ShadingParams, mask: f32) -> Vec3 {
    let w = params.mask_polarity.weight(mask);
    let base = Vec3::from_array(params.base_color.to_linear());
    let accent = Vec3::from_array(params.accent_color.to_linear());
    accent * (1.0 - w) + base * w
}

/// `(1 - N.V)^2`
pub fn fresnel(normal: Vec3, view_dir: Vec3) -> f32 {
    let f = 1.0 - normal.dot(view_dir);
    f * f
}

/// Thin-film style rainbow tint: three sinusoids 120 degrees apart,
/// phase-shifted by the Fresnel term and scaled by it
pub fn iridescence(strength: f32, shift: f32, normal: Vec3, view_dir: Vec3) -> Vec3 {
    let f = fresnel(normal, view_dir);
    let phase = f * shift * TAU;
    let tint = Vec3::new(
        0.5 + 0.5 * phase.sin(),
        0.5 + 0.5 * (phase + TAU / 3.0).sin(),
        0.5 + 0.5 * (phase + 2.0 * TAU / 3.0).sin(),
    );
    tint * strength * f
}

/// Blinn-Phong specular intensity against one light
pub fn blinn_phong(normal: Vec3, view_dir: Vec3, light_dir: Vec3, shininess: f32, strength: f32) -> f32 {
    let half = (light_dir + view_dir).normalize_or_zero();
    normal.dot(half).max(0.0).powf(shininess) * strength
}

/// Full carapace color for one fragment.
///
/// `environment` is the linear color fetched from the environment snapshot
/// along the reflected view direction.
pub fn carapace_color(params: &ShadingParams, sample: &SurfaceSample, mask: f32, environment: Vec3) -> Vec3 {
    let normal = sample.normal.normalize_or_zero();
    let view_dir = sample.view_dir();

    let mut col = pattern_color(params, mask);
    col = col.lerp(environment, params.environment_intensity * ENV_BLEND);
    col += iridescence(params.iridescence_strength, params.iridescence_shift, normal, view_dir);

    let light_dir = sample.light_dir(params.light_position);
    col += Vec3::splat(blinn_phong(
        normal,
        view_dir,
        light_dir,
        params.shininess,
        params.specular_strength,
    ));
    col
}

/// Full head/leg color for one fragment
pub fn head_color(params: &HeadShading, sample: &SurfaceSample) -> Vec3 {
    let normal = sample.normal.normalize_or_zero();
    let view_dir = sample.view_dir();
    let light_dir = sample.light_dir(params.light_position);

    let diffuse = normal.dot(light_dir).max(0.0);
    let lit = params.linear_base() * (HEAD_AMBIENT + diffuse * (1.0 - HEAD_AMBIENT));
    Vec3::splat(lit + blinn_phong(normal, view_dir, light_dir, params.shininess, params.specular_strength))
}

/// Direction used to fetch the environment snapshot: the view vector
/// mirrored about the normal
pub fn reflection_dir(normal: Vec3, view_dir: Vec3) -> Vec3 {
    let incident = -view_dir;
    incident - 2.0 * normal.dot(incident) * normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use scarab_ipc::Rgb;

    use crate::params::MaskPolarity;

    fn params() -> ShadingParams {
        ShadingParams {
            base_color: Rgb::from_u32(0x3366cc),
            accent_color: Rgb::from_u32(0xcc3311),
            ..Default::default()
        }
    }

    fn sample_facing(normal: Vec3) -> SurfaceSample {
        SurfaceSample {
            world_position: Vec3::ZERO,
            normal,
            camera_position: Vec3::new(0.0, 0.0, 5.0),
        }
    }

    #[test]
    fn test_mask_endpoints_are_exact() {
        let p = params();
        assert_eq!(pattern_color(&p, 1.0).to_array(), p.base_color.to_linear());
        assert_eq!(pattern_color(&p, 0.0).to_array(), p.accent_color.to_linear());
    }

    #[test]
    fn test_mask_polarity_swaps_endpoints() {
        let p = ShadingParams {
            mask_polarity: MaskPolarity::AccentOnPattern,
            ..params()
        };
        assert_eq!(pattern_color(&p, 1.0).to_array(), p.accent_color.to_linear());
        assert_eq!(pattern_color(&p, 0.0).to_array(), p.base_color.to_linear());
    }

    #[test]
    fn test_mask_midpoint_blends() {
        let p = params();
        let mid = pattern_color(&p, 0.5);
        let base = Vec3::from_array(p.base_color.to_linear());
        let accent = Vec3::from_array(p.accent_color.to_linear());
        assert!((mid - (base + accent) * 0.5).length() < 1e-6);
    }

    #[test]
    fn test_iridescence_zero_without_strength() {
        let view = Vec3::Z;
        for angle in [0.0f32, 0.3, 0.9, 1.4, 1.57] {
            let normal = Vec3::new(angle.sin(), 0.0, angle.cos());
            for shift in [0.0, 0.3, 1.0] {
                assert_eq!(iridescence(0.0, shift, normal, view), Vec3::ZERO);
            }
        }
    }

    #[test]
    fn test_iridescence_vanishes_head_on_and_grows_at_grazing() {
        let view = Vec3::Z;
        assert_eq!(iridescence(1.5, 0.3, Vec3::Z, view).length(), 0.0);
        let grazing = iridescence(1.5, 0.3, Vec3::X, view);
        assert!(grazing.length() > 0.5);
    }

    #[test]
    fn test_fresnel_range() {
        assert_eq!(fresnel(Vec3::Z, Vec3::Z), 0.0);
        assert!((fresnel(Vec3::X, Vec3::Z) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_blinn_phong_peak_and_falloff() {
        // Light and view both along the normal: half vector equals the normal
        let peak = blinn_phong(Vec3::Y, Vec3::Y, Vec3::Y, 80.0, 0.8);
        assert!((peak - 0.8).abs() < 1e-6);

        let off = blinn_phong(Vec3::Y, Vec3::X, Vec3::Y, 80.0, 0.8);
        assert!(off < 1e-6);

        let backfacing = blinn_phong(Vec3::Y, -Vec3::Y, -Vec3::Y, 10.0, 1.0);
        assert_eq!(backfacing, 0.0);
    }

    #[test]
    fn test_carapace_without_extra_terms_is_pattern_color() {
        let p = ShadingParams {
            iridescence_strength: 0.0,
            specular_strength: 0.0,
            environment_intensity: 0.0,
            ..params()
        };
        let sample = sample_facing(Vec3::new(0.6, 0.0, 0.8));
        let col = carapace_color(&p, &sample, 1.0, Vec3::ONE);
        assert!((col - pattern_color(&p, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_environment_blend_is_thirty_percent_of_intensity() {
        let p = ShadingParams {
            iridescence_strength: 0.0,
            specular_strength: 0.0,
            environment_intensity: 1.0,
            ..params()
        };
        let sample = sample_facing(Vec3::Z);
        let env = Vec3::new(1.0, 0.0, 0.0);
        let col = carapace_color(&p, &sample, 1.0, env);
        let expected = pattern_color(&p, 1.0).lerp(env, 0.3);
        assert!((col - expected).length() < 1e-6);
    }

    #[test]
    fn test_head_color_is_dark_with_highlight() {
        let params = HeadShading {
            specular_strength: 0.0,
            ..Default::default()
        };
        let base = params.linear_base();
        assert!(base < 0.005);

        // Light direction from origin toward (5, 10, 5); normal facing away gives ambient only
        let shadowed = head_color(&params, &sample_facing(-Vec3::new(5.0, 10.0, 5.0).normalize()));
        assert!((shadowed.x - base * 0.3).abs() < 1e-6);

        let lit = head_color(&params, &sample_facing(Vec3::new(5.0, 10.0, 5.0).normalize()));
        assert!((lit.x - base).abs() < 1e-5);
    }

    #[test]
    fn test_reflection_dir_mirrors_about_normal() {
        let view = Vec3::new(1.0, 1.0, 0.0).normalize();
        let r = reflection_dir(Vec3::Y, view);
        assert!((r - Vec3::new(-1.0, 1.0, 0.0).normalize()).length() < 1e-6);
    }
}
