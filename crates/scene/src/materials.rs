//! Carapace and head/leg materials
//!
//! Both are unlit-by-engine custom materials: the WGSL programs do their own
//! lighting against a single point light, mirroring `customizer::shading`.

use bevy::asset::embedded_asset;
use bevy::prelude::*;
use bevy::render::render_resource::{AsBindGroup, ShaderType};
use bevy::shader::ShaderRef;
use customizer::{ENV_BLEND, HEAD_AMBIENT, HeadShading, ShadingParams, ViewerState};
use scarab_ipc::Rgb;

use crate::ViewerSet;
use crate::assets::ViewerAssets;
use crate::reflection::EnvironmentSnapshot;

/// Uniform block of the carapace shader
#[derive(Clone, Copy, Debug, Default, ShaderType)]
pub struct CarapaceUniform {
    /// Linear RGB, alpha unused
    pub base_color: Vec4,
    pub accent_color: Vec4,
    pub light_position: Vec4,
    pub iridescence_strength: f32,
    pub iridescence_shift: f32,
    pub shininess: f32,
    pub specular_strength: f32,
    pub environment_intensity: f32,
    pub environment_blend: f32,
    /// 1.0 flips which color the bright mask texels get
    pub mask_polarity: f32,
}

impl From<&ShadingParams> for CarapaceUniform {
    fn from(params: &ShadingParams) -> Self {
        Self {
            base_color: linear(params.base_color),
            accent_color: linear(params.accent_color),
            light_position: Vec3::from_array(params.light_position).extend(1.0),
            iridescence_strength: params.iridescence_strength,
            iridescence_shift: params.iridescence_shift,
            shininess: params.shininess,
            specular_strength: params.specular_strength,
            environment_intensity: params.environment_intensity,
            environment_blend: ENV_BLEND,
            mask_polarity: params.mask_polarity.as_flag(),
        }
    }
}

fn linear(color: Rgb) -> Vec4 {
    Vec3::from_array(color.to_linear()).extend(1.0)
}

/// Patterned, reflective, iridescent shell material
#[derive(Asset, AsBindGroup, TypePath, Clone)]
pub struct CarapaceMaterial {
    #[uniform(0)]
    pub params: CarapaceUniform,
    #[texture(1)]
    #[sampler(2)]
    pub mask: Handle<Image>,
    // Environment snapshot faces in `CubeFace::ALL` order; one sampler for all six
    #[texture(3)]
    #[sampler(4)]
    pub env_pos_x: Handle<Image>,
    #[texture(5)]
    pub env_neg_x: Handle<Image>,
    #[texture(6)]
    pub env_pos_y: Handle<Image>,
    #[texture(7)]
    pub env_neg_y: Handle<Image>,
    #[texture(8)]
    pub env_pos_z: Handle<Image>,
    #[texture(9)]
    pub env_neg_z: Handle<Image>,
}

impl Material for CarapaceMaterial {
    fn fragment_shader() -> ShaderRef {
        "embedded://scarab_scene/shaders/carapace.wgsl".into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Opaque
    }
}

/// Uniform block of the head/leg shader
#[derive(Clone, Copy, Debug, Default, ShaderType)]
pub struct HeadUniform {
    pub light_position: Vec4,
    /// Linear light
    pub base_luminance: f32,
    pub ambient: f32,
    pub shininess: f32,
    pub specular_strength: f32,
}

impl From<&HeadShading> for HeadUniform {
    fn from(params: &HeadShading) -> Self {
        Self {
            light_position: Vec3::from_array(params.light_position).extend(1.0),
            base_luminance: params.linear_base(),
            ambient: HEAD_AMBIENT,
            shininess: params.shininess,
            specular_strength: params.specular_strength,
        }
    }
}

/// Matte near-black material with a soft highlight, shared by heads and legs
#[derive(Asset, AsBindGroup, TypePath, Clone, Default)]
pub struct HeadMaterial {
    #[uniform(0)]
    pub params: HeadUniform,
}

impl Material for HeadMaterial {
    fn fragment_shader() -> ShaderRef {
        "embedded://scarab_scene/shaders/head.wgsl".into()
    }
}

/// The single instance of each material, shared by every mesh of its role
#[derive(Resource)]
pub struct ViewerMaterials {
    pub carapace: Handle<CarapaceMaterial>,
    pub head: Handle<HeadMaterial>,
}

pub struct MaterialsPlugin;

impl Plugin for MaterialsPlugin {
    fn build(&self, app: &mut App) {
        embedded_asset!(app, "shaders/carapace.wgsl");
        embedded_asset!(app, "shaders/head.wgsl");

        app.add_plugins(MaterialPlugin::<CarapaceMaterial>::default())
            .add_plugins(MaterialPlugin::<HeadMaterial>::default())
            .add_systems(Startup, create_materials)
            .add_systems(Update, sync_materials.in_set(ViewerSet::Sync));
    }
}

fn create_materials(
    mut commands: Commands,
    state: Res<ViewerState>,
    assets: Res<ViewerAssets>,
    snapshot: Res<EnvironmentSnapshot>,
    mut carapace_materials: ResMut<Assets<CarapaceMaterial>>,
    mut head_materials: ResMut<Assets<HeadMaterial>>,
) {
    let [env_pos_x, env_neg_x, env_pos_y, env_neg_y, env_pos_z, env_neg_z] =
        snapshot.faces.clone();

    let carapace = carapace_materials.add(CarapaceMaterial {
        params: CarapaceUniform::from(&state.shading),
        mask: assets.mask_for(state.shading.pattern),
        env_pos_x,
        env_neg_x,
        env_pos_y,
        env_neg_y,
        env_pos_z,
        env_neg_z,
    });
    let head = head_materials.add(HeadMaterial {
        params: HeadUniform::from(&state.head_shading),
    });

    commands.insert_resource(ViewerMaterials { carapace, head });
}

/// Push parameter and mask changes into the material assets
fn sync_materials(
    state: Res<ViewerState>,
    assets: Res<ViewerAssets>,
    materials: Option<Res<ViewerMaterials>>,
    mut carapace_materials: ResMut<Assets<CarapaceMaterial>>,
    mut head_materials: ResMut<Assets<HeadMaterial>>,
) {
    let Some(materials) = materials else {
        return;
    };
    if !state.is_changed() && !assets.is_changed() {
        return;
    }

    if let Some(mut carapace) = carapace_materials.get_mut(&materials.carapace) {
        carapace.params = CarapaceUniform::from(&state.shading);
        let mask = assets.mask_for(state.shading.pattern);
        if carapace.mask != mask {
            debug!("Binding mask for {:?}", state.shading.pattern);
            carapace.mask = mask;
        }
    }

    if let Some(mut head) = head_materials.get_mut(&materials.head) {
        head.params = HeadUniform::from(&state.head_shading);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use customizer::MaskPolarity;

    #[test]
    fn test_carapace_uniform_from_params() {
        let params = ShadingParams {
            base_color: Rgb::WHITE,
            accent_color: Rgb::BLACK,
            mask_polarity: MaskPolarity::AccentOnPattern,
            ..Default::default()
        };
        let uniform = CarapaceUniform::from(&params);
        assert!((uniform.base_color - Vec4::ONE).length() < 1e-5);
        assert_eq!(uniform.accent_color, Vec4::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(uniform.light_position, Vec4::new(5.0, 10.0, 5.0, 1.0));
        assert_eq!(uniform.environment_blend, ENV_BLEND);
        assert_eq!(uniform.shininess, 80.0);
        assert_eq!(uniform.mask_polarity, 1.0);
    }

    #[test]
    fn test_head_uniform_defaults() {
        let uniform = HeadUniform::from(&HeadShading::default());
        // 0.05 on screen is about 0.004 in linear light
        assert!((uniform.base_luminance - 0.00395).abs() < 1e-4);
        assert_eq!(uniform.ambient, 0.3);
        assert_eq!(uniform.shininess, 60.0);
        assert_eq!(uniform.specular_strength, 0.5);
    }
}
