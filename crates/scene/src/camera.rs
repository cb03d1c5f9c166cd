//! Orbit camera controller
//!
//! Controls:
//! - Left mouse drag: Orbit around target
//! - Right mouse drag: Pan
//! - Scroll wheel: Dolly (zoom)
//!
//! Input accumulates into pending motion that is released over a few frames,
//! giving the damped feel of a classic orbit control.

use bevy::input::mouse::{MouseButton, MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use scarab_config::CameraConfig;

use crate::ViewerSet;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Set by the UI layer while the pointer belongs to the control panel
#[derive(Resource, Default)]
pub struct CameraInputLock {
    pub locked: bool,
}

/// Camera orbit controller state
#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    /// Point the camera orbits around
    pub target: Vec3,
    /// Distance from target
    pub distance: f32,
    /// Horizontal angle (yaw) in radians
    pub yaw: f32,
    /// Vertical angle (pitch) in radians
    pub pitch: f32,
    /// Orbit sensitivity (radians per pixel)
    pub orbit_sensitivity: f32,
    /// Pan sensitivity (units per pixel, scaled by distance)
    pub pan_sensitivity: f32,
    /// Fraction of the distance covered per scroll line
    pub zoom_sensitivity: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Share of pending motion released per 60 Hz frame; 1.0 disables damping
    pub damping_factor: f32,
    pending_orbit: Vec2,
    pending_pan: Vec3,
    pending_zoom: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl OrbitCamera {
    /// Orbit state that reproduces the configured eye position
    pub fn from_config(config: &CameraConfig) -> Self {
        let target = Vec3::from_array(config.target);
        let offset = Vec3::from_array(config.position) - target;
        let distance = offset.length().max(f32::EPSILON);

        Self {
            target,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            orbit_sensitivity: 0.005,
            pan_sensitivity: 0.002,
            zoom_sensitivity: 0.05,
            min_distance: 0.5,
            max_distance: 200.0,
            damping_factor: config.damping_factor,
            pending_orbit: Vec2::ZERO,
            pending_pan: Vec3::ZERO,
            pending_zoom: 0.0,
        }
    }

    /// Calculate camera position from orbit parameters
    pub fn calculate_position(&self) -> Vec3 {
        // Pitch is angle from horizontal, yaw is angle around Y from +Z
        let horizontal_distance = self.distance * self.pitch.cos();
        let y = self.distance * self.pitch.sin();
        let x = horizontal_distance * self.yaw.sin();
        let z = horizontal_distance * self.yaw.cos();

        self.target + Vec3::new(x, y, z)
    }

    pub fn orbit(&mut self, delta: Vec2) {
        self.pending_orbit -= delta * self.orbit_sensitivity;
    }

    /// Pan in the camera's local XY plane
    pub fn pan(&mut self, delta: Vec2, rotation: Quat) {
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        // Scale pan by distance so it feels consistent at different zoom levels
        let pan_scale = self.pan_sensitivity * self.distance;
        // Negative to feel like dragging the scene
        self.pending_pan += (-right * delta.x + up * delta.y) * pan_scale;
    }

    /// Positive lines zoom in
    pub fn zoom(&mut self, lines: f32) {
        self.pending_zoom += lines;
    }

    /// Release part of the pending motion for a frame of `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        let damping = self.damping_factor.clamp(0.0, 1.0);
        let retention = (1.0 - damping).powf(dt * 60.0);
        let release = 1.0 - retention;

        let orbit = self.pending_orbit * release;
        self.yaw += orbit.x;
        // Clamp pitch to prevent flipping (just below straight up/down)
        self.pitch = (self.pitch + orbit.y).clamp(-1.5, 1.5);
        self.pending_orbit *= retention;

        self.target += self.pending_pan * release;
        self.pending_pan *= retention;

        let zoom = self.pending_zoom * release;
        self.distance = (self.distance * (1.0 - self.zoom_sensitivity).powf(zoom))
            .clamp(self.min_distance, self.max_distance);
        self.pending_zoom *= retention;
    }
}

/// Plugin for orbit camera controls
pub struct CameraControllerPlugin;

impl Plugin for CameraControllerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraInputLock>();
        // orbit and pan both read MouseMotion, so they run sequentially
        app.add_systems(
            Update,
            (
                camera_orbit_system,
                camera_pan_system.after(camera_orbit_system),
                camera_zoom_system,
                update_camera_transform
                    .after(camera_orbit_system)
                    .after(camera_pan_system)
                    .after(camera_zoom_system),
            )
                .in_set(ViewerSet::Input),
        );
    }
}

/// Handle orbit (left mouse drag)
fn camera_orbit_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    lock: Res<CameraInputLock>,
    mut motion_events: MessageReader<MouseMotion>,
    mut camera_query: Query<&mut OrbitCamera>,
) {
    if lock.locked || !mouse_button.pressed(MouseButton::Left) {
        motion_events.clear();
        return;
    }

    let delta: Vec2 = motion_events.read().map(|event| event.delta).sum();
    if delta == Vec2::ZERO {
        return;
    }

    for mut orbit in camera_query.iter_mut() {
        orbit.orbit(delta);
    }
}

/// Handle pan (right mouse drag)
fn camera_pan_system(
    mouse_button: Res<ButtonInput<MouseButton>>,
    lock: Res<CameraInputLock>,
    mut motion_events: MessageReader<MouseMotion>,
    mut camera_query: Query<(&mut OrbitCamera, &Transform)>,
) {
    if lock.locked || !mouse_button.pressed(MouseButton::Right) {
        motion_events.clear();
        return;
    }

    let delta: Vec2 = motion_events.read().map(|event| event.delta).sum();
    if delta == Vec2::ZERO {
        return;
    }

    for (mut orbit, transform) in camera_query.iter_mut() {
        orbit.pan(delta, transform.rotation);
    }
}

/// Handle zoom (scroll wheel)
fn camera_zoom_system(
    lock: Res<CameraInputLock>,
    mut scroll_events: MessageReader<MouseWheel>,
    mut camera_query: Query<&mut OrbitCamera>,
) {
    if lock.locked {
        scroll_events.clear();
        return;
    }

    let lines: f32 = scroll_events
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => event.y,
            // Browsers report pixels; roughly 100 per notch
            MouseScrollUnit::Pixel => event.y / 100.0,
        })
        .sum();

    if lines == 0.0 {
        return;
    }

    for mut orbit in camera_query.iter_mut() {
        orbit.zoom(lines);
    }
}

/// Update camera transform from orbit state
fn update_camera_transform(
    time: Res<Time>,
    mut camera_query: Query<(&mut OrbitCamera, &mut Transform), With<MainCamera>>,
) {
    let dt = time.delta_secs();
    for (mut orbit, mut transform) in camera_query.iter_mut() {
        orbit.advance(dt);
        let position = orbit.calculate_position();
        *transform = Transform::from_translation(position).looking_at(orbit.target, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_reproduces_position() {
        let config = CameraConfig::default();
        let orbit = OrbitCamera::from_config(&config);
        let position = orbit.calculate_position();
        assert!((position - Vec3::from_array(config.position)).length() < 1e-4);
    }

    #[test]
    fn test_damping_releases_motion_gradually() {
        let mut orbit = OrbitCamera::default();
        let start_yaw = orbit.yaw;
        orbit.orbit(Vec2::new(-100.0, 0.0));

        orbit.advance(1.0 / 60.0);
        let first = orbit.yaw - start_yaw;
        assert!((first - 0.5 * 0.05).abs() < 1e-5);

        for _ in 0..600 {
            orbit.advance(1.0 / 60.0);
        }
        assert!((orbit.yaw - start_yaw - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut orbit = OrbitCamera {
            damping_factor: 1.0,
            ..Default::default()
        };
        orbit.zoom(1000.0);
        orbit.advance(1.0 / 60.0);
        assert_eq!(orbit.distance, orbit.min_distance);

        orbit.zoom(-1000.0);
        orbit.advance(1.0 / 60.0);
        assert_eq!(orbit.distance, orbit.max_distance);
    }

    #[test]
    fn test_pitch_stays_below_vertical() {
        let mut orbit = OrbitCamera {
            damping_factor: 1.0,
            ..Default::default()
        };
        orbit.orbit(Vec2::new(0.0, -10_000.0));
        orbit.advance(1.0 / 60.0);
        assert_eq!(orbit.pitch, 1.5);
    }
}
