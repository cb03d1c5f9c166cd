//! Scarab - interactive beetle customizer, native desktop build

use std::time::{SystemTime, UNIX_EPOCH};

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;
use customizer::{Palette, ViewerState};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use scarab_config::DisplayConfig;
use scarab_scene::{OutboundUiMessages, ScenePlugin};

mod input;
mod panel;

/// Seed of this launch's starting palette
#[derive(Resource)]
struct PaletteSeed(u64);

fn main() {
    // Display configuration - single source of truth for window size
    let display_config = DisplayConfig::default();

    let window_config = Window {
        title: "Scarab".into(),
        resolution: WindowResolution::new(display_config.width, display_config.height),
        present_mode: bevy::window::PresentMode::AutoVsync,
        ..default()
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    let palette = Palette::random(&mut SmallRng::seed_from_u64(seed));

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(window_config),
                ..default()
            })
            .set(bevy::log::LogPlugin {
                level: bevy::log::Level::INFO,
                ..default()
            }),
    );

    app.insert_resource(PaletteSeed(seed))
        .insert_resource(display_config)
        .insert_resource(ViewerState::with_palette(palette));

    app.add_plugins(EguiPlugin::default())
        .add_plugins(ScenePlugin)
        .add_plugins(panel::PanelPlugin)
        .add_plugins(input::InputPlugin)
        .add_systems(Startup, report_palette_seed)
        .add_systems(Last, drain_outbound_messages)
        .run();
}

fn report_palette_seed(seed: Res<PaletteSeed>) {
    info!("Palette seed {}", seed.0);
}

/// The egui panel reads `ViewerState` directly; outbound messages only
/// matter to the browser build, so they are logged and dropped here
fn drain_outbound_messages(mut outbound: ResMut<OutboundUiMessages>) {
    for msg in outbound.drain() {
        debug!("Viewer -> UI: {:?}", msg);
    }
}
