//! Shared beetle scene for Scarab
//!
//! This crate provides the 3D viewer used by both the native app and the
//! WASM build: asset loading, the custom carapace and head materials, the
//! reflection capture rig, head visibility and the orbit camera. UIs talk to
//! it only through [`CommandInbox`] and [`OutboundUiMessages`].

use bevy::camera::visibility::RenderLayers;
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use scarab_config::ViewerConfig;

mod assets;
mod binding;
mod camera;
mod commands;
mod heads;
mod materials;
mod messages;
mod reflection;
mod stage;

pub use assets::{AssetLoadingPlugin, AssetStatus, ViewerAssets};
pub use binding::{BeetleModel, ModelBound, ModelPlugin};
pub use camera::{CameraControllerPlugin, CameraInputLock, MainCamera, OrbitCamera};
pub use commands::CommandPlugin;
pub use heads::HeadMesh;
pub use materials::{
    CarapaceMaterial, CarapaceUniform, HeadMaterial, HeadUniform, MaterialsPlugin, ViewerMaterials,
};
pub use messages::{CommandInbox, OutboundUiMessages};
pub use reflection::{CaptureCamera, CaptureClock, EnvironmentSnapshot, ReflectionPlugin};
pub use stage::StagePlugin;

/// Render layer of the beetle's meshes. The main camera renders it, the
/// reflection cameras do not.
pub const MODEL_LAYER: usize = 1;

/// Per-frame ordering: camera input, then UI commands, then pushing state
/// into the scene, then the reflection capture decision
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewerSet {
    Input,
    Commands,
    Sync,
    Capture,
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewerConfig>();

        app.add_plugins(CommandPlugin);
        app.add_plugins(AssetLoadingPlugin);
        app.add_plugins(ReflectionPlugin);
        app.add_plugins(MaterialsPlugin);
        app.add_plugins(ModelPlugin);
        app.add_plugins(StagePlugin);
        app.add_plugins(CameraControllerPlugin);

        app.add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands, config: Res<ViewerConfig>) {
    let settings = &config.camera;
    let orbit_camera = OrbitCamera::from_config(settings);
    let camera_position = orbit_camera.calculate_position();

    // The custom materials output linear color that the view target
    // sRGB-encodes as is; tonemapping would shift it away from the
    // CPU reference
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.fov_degrees.to_radians(),
            near: settings.near,
            far: settings.far,
            ..default()
        }),
        Transform::from_translation(camera_position).looking_at(orbit_camera.target, Vec3::Y),
        Tonemapping::None,
        RenderLayers::from_layers(&[0, MODEL_LAYER]),
        MainCamera,
        orbit_camera,
    ));

    info!("Scene initialized");
}
