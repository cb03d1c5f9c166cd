//! Background and ground grid
//!
//! The grid is the only thing the reflection cameras see besides the
//! background, so it is what shows up in the carapace.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::PrimitiveTopology;
use scarab_config::{StageConfig, ViewerConfig};

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_stage);
    }
}

fn setup_stage(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<ViewerConfig>,
) {
    let stage = &config.stage;
    commands.insert_resource(ClearColor(hex_color(stage.background)));

    commands.spawn((
        Mesh3d(meshes.add(grid_mesh(stage))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        })),
        Transform::from_xyz(0.0, stage.grid_height, 0.0),
        Name::new("Grid"),
    ));
}

pub(crate) fn hex_color(packed: u32) -> Color {
    let [_, r, g, b] = packed.to_be_bytes();
    Color::srgb_u8(r, g, b)
}

/// Square line grid on the XZ plane, centered on the origin, with the two
/// center lines in their own color
pub fn grid_mesh(stage: &StageConfig) -> Mesh {
    let divisions = stage.grid_divisions.max(1);
    let half = stage.grid_size / 2.0;
    let step = stage.grid_size / divisions as f32;
    let center = hex_color(stage.grid_center_color).to_linear().to_f32_array();
    let line = hex_color(stage.grid_color).to_linear().to_f32_array();

    let mut positions = Vec::new();
    let mut colors = Vec::new();
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let color = if i * 2 == divisions { center } else { line };
        positions.extend([[-half, 0.0, k], [half, 0.0, k], [k, 0.0, -half], [k, 0.0, half]]);
        colors.extend([color; 4]);
    }

    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD)
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_line_count() {
        let stage = StageConfig::default();
        let mesh = grid_mesh(&stage);
        // Two lines per division boundary, two vertices per line
        assert_eq!(mesh.count_vertices(), 4 * (stage.grid_divisions as usize + 1));
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color(0xf0f0f0), Color::srgb_u8(0xf0, 0xf0, 0xf0));
    }
}
