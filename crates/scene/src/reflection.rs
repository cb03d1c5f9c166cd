//! Environment snapshot capture
//!
//! Six 90 degree cameras render the surroundings into six square images that
//! the carapace shader samples as a cube. The cameras render layer 0 only,
//! so the beetle (on [`MODEL_LAYER`](crate::MODEL_LAYER)) never shows up in
//! its own reflection. They are switched on for capture frames and off
//! otherwise.

use std::f32::consts::FRAC_PI_2;

use bevy::asset::RenderAssetUsages;
use bevy::camera::visibility::RenderLayers;
use bevy::camera::{ClearColorConfig, RenderTarget};
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat, TextureUsages};
use customizer::{CubeFace, ReflectionSchedule};
use scarab_config::ViewerConfig;
use scarab_ipc::Rgb;

use crate::ViewerSet;
use crate::binding::{BeetleModel, ModelBound};

/// Face images of the environment snapshot, in [`CubeFace::ALL`] order
#[derive(Resource, Clone)]
pub struct EnvironmentSnapshot {
    pub faces: [Handle<Image>; 6],
}

/// Marker for the camera rendering one face of the snapshot
#[derive(Component, Debug, Clone, Copy)]
pub struct CaptureCamera(pub CubeFace);

/// Rendered-frame counter driving the capture cadence
#[derive(Resource, Debug)]
pub struct CaptureClock {
    pub frame: u64,
    pub schedule: ReflectionSchedule,
}

pub struct ReflectionPlugin;

impl Plugin for ReflectionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, setup_capture_rig)
            .add_systems(Update, drive_capture.in_set(ViewerSet::Capture));
    }
}

fn setup_capture_rig(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    config: Res<ViewerConfig>,
) {
    let settings = &config.reflection;
    let resolution = settings.resolution.max(1);
    let background = Rgb::from_u32(config.stage.background);

    let faces = CubeFace::ALL.map(|face| {
        let image = create_face_texture(resolution, background, &mut images);
        commands.spawn((
            Camera3d::default(),
            Camera {
                // Before the main camera, which keeps order 0
                order: -1 - face.index() as isize,
                is_active: false,
                clear_color: ClearColorConfig::Custom(Color::srgb_u8(
                    background.r,
                    background.g,
                    background.b,
                )),
                ..default()
            },
            RenderTarget::Image(image.clone().into()),
            Projection::Perspective(PerspectiveProjection {
                fov: FRAC_PI_2,
                aspect_ratio: 1.0,
                near: settings.near,
                far: settings.far,
                ..default()
            }),
            Tonemapping::None,
            Transform::default().looking_to(
                Vec3::from_array(face.forward().to_array()),
                Vec3::from_array(face.up().to_array()),
            ),
            RenderLayers::layer(0),
            CaptureCamera(face),
            Name::new(format!("Capture {:?}", face)),
        ));
        image
    });

    commands.insert_resource(EnvironmentSnapshot { faces });
    commands.insert_resource(CaptureClock {
        frame: 0,
        schedule: ReflectionSchedule::new(settings.interval_frames),
    });

    info!(
        "Reflection capture rig ready ({}x{} per face, every {} frames)",
        resolution, resolution, settings.interval_frames
    );
}

/// A square render target pre-filled with the stage background, so the
/// carapace reflects something sensible before the first capture
fn create_face_texture(size: u32, fill: Rgb, images: &mut Assets<Image>) -> Handle<Image> {
    let mut image = Image::new_fill(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[fill.r, fill.g, fill.b, u8::MAX],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    );

    image.texture_descriptor.usage =
        TextureUsages::TEXTURE_BINDING | TextureUsages::COPY_DST | TextureUsages::RENDER_ATTACHMENT;

    images.add(image)
}

/// Turn the rig on for capture frames, centered on the model
fn drive_capture(
    mut clock: ResMut<CaptureClock>,
    model: Query<&GlobalTransform, (With<BeetleModel>, With<ModelBound>)>,
    mut cameras: Query<(&mut Camera, &mut Transform), With<CaptureCamera>>,
) {
    let frame = clock.frame;
    clock.frame = clock.frame.wrapping_add(1);

    // Nothing to capture until the model is bound
    let center = model.single().ok().map(GlobalTransform::translation);
    let capture = center.is_some() && clock.schedule.is_capture_frame(frame);

    if capture {
        trace!("Capturing environment on frame {}", frame);
    }

    for (mut camera, mut transform) in cameras.iter_mut() {
        if camera.is_active != capture {
            camera.is_active = capture;
        }
        if let (true, Some(center)) = (capture, center) {
            transform.translation = center;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture_app(interval_frames: u32) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(CaptureClock {
            frame: 0,
            schedule: ReflectionSchedule::new(interval_frames),
        });
        app.add_systems(Update, drive_capture);
        for face in CubeFace::ALL {
            app.world_mut().spawn((
                Camera {
                    is_active: false,
                    ..default()
                },
                Transform::default(),
                CaptureCamera(face),
            ));
        }
        app
    }

    fn active_cameras(app: &mut App) -> usize {
        let world = app.world_mut();
        let mut query = world.query::<(&Camera, &CaptureCamera)>();
        query.iter(world).filter(|(c, _)| c.is_active).count()
    }

    #[test]
    fn test_no_capture_before_model_is_bound() {
        let mut app = capture_app(30);
        app.update();
        assert_eq!(active_cameras(&mut app), 0);
    }

    #[test]
    fn test_capture_follows_schedule_once_bound() {
        let mut app = capture_app(3);
        app.world_mut().spawn((
            BeetleModel,
            ModelBound,
            GlobalTransform::from_translation(Vec3::new(1.0, 2.0, 3.0)),
        ));

        let mut active_frames = Vec::new();
        for frame in 0..7 {
            app.update();
            if active_cameras(&mut app) == 6 {
                active_frames.push(frame);
            } else {
                assert_eq!(active_cameras(&mut app), 0);
            }
        }
        assert_eq!(active_frames, vec![0, 3, 6]);

        let world = app.world_mut();
        let mut query = world.query::<(&Transform, &CaptureCamera)>();
        for (transform, _) in query.iter(world) {
            assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
        }
    }
}
