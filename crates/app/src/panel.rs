//! The egui control panel
//!
//! A row of badges opens one settings panel at a time. Every widget only
//! queues a `ViewerCommand`; the panel never writes `ViewerState` itself.

use bevy::ecs::query::QuerySingleError;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};
use customizer::ViewerState;
use scarab_ipc::{HeadVariant, Panel, PatternKind, Rgb, ShadingParam, ViewerCommand};
use scarab_scene::{CameraInputLock, CommandInbox};

/// Whether egui owns the pointer or keyboard this frame
#[derive(Resource, Default)]
pub struct UiFocus {
    pub pointer: bool,
    pub keyboard: bool,
}

pub struct PanelPlugin;

impl Plugin for PanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFocus>()
            .add_systems(EguiPrimaryContextPass, control_panel_wrapper);
    }
}

/// Wrapper for control_panel that handles Result
fn control_panel_wrapper(
    contexts: EguiContexts,
    state: Res<ViewerState>,
    inbox: ResMut<CommandInbox>,
    focus: ResMut<UiFocus>,
    lock: ResMut<CameraInputLock>,
) {
    if let Err(e) = control_panel(contexts, state, inbox, focus, lock) {
        error!("Control panel unavailable: {:?}", e);
    }
}

fn control_panel(
    mut contexts: EguiContexts,
    state: Res<ViewerState>,
    mut inbox: ResMut<CommandInbox>,
    mut focus: ResMut<UiFocus>,
    mut lock: ResMut<CameraInputLock>,
) -> Result<(), QuerySingleError> {
    let ctx = contexts.ctx_mut()?;
    let mut commands = Vec::new();

    egui::TopBottomPanel::bottom("panel_badges")
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for panel in Panel::ALL {
                    if ui
                        .selectable_label(state.panel().is_open(panel), panel.title())
                        .clicked()
                    {
                        commands.push(ViewerCommand::TogglePanel(panel));
                    }
                }
            });
        });

    if let Some(panel) = state.panel().open_panel() {
        egui::Window::new(panel.title())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::LEFT_BOTTOM, [12.0, -48.0])
            .show(ctx, |ui| match panel {
                Panel::Colors => colors_section(ui, &state, &mut commands),
                Panel::Pattern => pattern_section(ui, &state, &mut commands),
                Panel::Head => head_section(ui, &state, &mut commands),
                Panel::Finish => finish_section(ui, &state, &mut commands),
            });
    }

    focus.pointer = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
    focus.keyboard = ctx.wants_keyboard_input();
    lock.locked = focus.pointer;

    for command in commands {
        inbox.push_command(command);
    }
    Ok(())
}

fn colors_section(ui: &mut egui::Ui, state: &ViewerState, commands: &mut Vec<ViewerCommand>) {
    if let Some(color) = color_row(ui, "Base", state.shading.base_color) {
        commands.push(ViewerCommand::SetBaseColor(color));
    }
    if let Some(color) = color_row(ui, "Accent", state.shading.accent_color) {
        commands.push(ViewerCommand::SetAccentColor(color));
    }
}

/// Label, picker button and hex value. Returns the new color if edited.
fn color_row(ui: &mut egui::Ui, label: &str, color: Rgb) -> Option<Rgb> {
    let mut srgb = [color.r, color.g, color.b];
    let changed = ui
        .horizontal(|ui| {
            ui.label(label);
            let response = ui.color_edit_button_srgb(&mut srgb);
            ui.monospace(color.to_string());
            response.changed()
        })
        .inner;
    changed.then(|| Rgb::new(srgb[0], srgb[1], srgb[2]))
}

fn pattern_section(ui: &mut egui::Ui, state: &ViewerState, commands: &mut Vec<ViewerCommand>) {
    ui.horizontal(|ui| {
        for pattern in PatternKind::ALL {
            if ui
                .selectable_label(state.shading.pattern == pattern, pattern.label())
                .clicked()
            {
                commands.push(ViewerCommand::SelectPattern(pattern));
            }
        }
    });
}

fn head_section(ui: &mut egui::Ui, state: &ViewerState, commands: &mut Vec<ViewerCommand>) {
    let heads = state.heads();
    if !heads.is_loaded() {
        ui.label("Model loading...");
    }
    ui.horizontal(|ui| {
        for head in HeadVariant::ALL {
            ui.add_enabled_ui(heads.loaded().contains(&head), |ui| {
                if ui
                    .selectable_label(heads.is_visible(head), head.label())
                    .clicked()
                {
                    commands.push(ViewerCommand::SelectHead(head));
                }
            });
        }
    });
}

fn finish_section(ui: &mut egui::Ui, state: &ViewerState, commands: &mut Vec<ViewerCommand>) {
    for param in ShadingParam::ALL {
        let mut value = state.shading.get(param);
        let slider = egui::Slider::new(&mut value, param.range())
            .step_by(param.step() as f64)
            .text(param.label());
        if ui.add(slider).changed() {
            commands.push(ViewerCommand::SetShadingParam { param, value });
        }
    }
}
