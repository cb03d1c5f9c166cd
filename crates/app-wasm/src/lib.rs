//! Scarab Bevy WASM Build
//!
//! Compiles the viewer to WebAssembly. The scene renders into the page's
//! `#scarab-canvas` element; the page's own HTML controls drive it through
//! the CustomEvent bridge.

use bevy::prelude::*;
use customizer::{Palette, ViewerState};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use scarab_scene::{CommandInbox, OutboundUiMessages, ScenePlugin, ViewerSet};
use wasm_bindgen::prelude::*;

mod bridge;

/// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    // Initialize the bridge for IPC with the page
    if let Err(e) = bridge::init_bridge() {
        web_sys::console::error_2(&"Scarab bridge unavailable:".into(), &e);
    }

    // Math.random is enough for a starting palette
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let palette = Palette::random(&mut SmallRng::seed_from_u64(seed));

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        canvas: Some("#scarab-canvas".to_string()),
                        fit_canvas_to_parent: true,
                        prevent_default_event_handling: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    ..default()
                }),
        )
        .insert_resource(ViewerState::with_palette(palette))
        .add_plugins(ScenePlugin)
        .add_plugins(BrowserBridgePlugin)
        .run();
}

/// Plugin moving messages between the bridge queues and the scene
pub struct BrowserBridgePlugin;

impl Plugin for BrowserBridgePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, receive_ui_messages.in_set(ViewerSet::Input))
            .add_systems(Last, send_ui_messages);
    }
}

/// Move page messages into the scene's inbox
fn receive_ui_messages(mut inbox: ResMut<CommandInbox>) {
    while let Some(msg) = bridge::poll_ui_message() {
        debug!("UI -> viewer: {:?}", msg);
        inbox.push(msg);
    }
}

/// Deliver everything the scene queued for the page this frame
fn send_ui_messages(mut outbound: ResMut<OutboundUiMessages>) {
    for msg in outbound.drain() {
        if let Err(e) = bridge::send_to_ui(&msg) {
            error!("Failed to deliver {:?}: {:?}", msg, e);
        }
    }
}
