//! Spawning the beetle and binding materials to its named meshes

use bevy::camera::visibility::RenderLayers;
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use customizer::{MaterialKind, MeshRole, RoleInventory, ViewerState};
use scarab_config::ViewerConfig;
use scarab_ipc::ViewerToUi;

use crate::MODEL_LAYER;
use crate::assets::ViewerAssets;
use crate::heads::HeadMesh;
use crate::materials::ViewerMaterials;
use crate::messages::OutboundUiMessages;

/// Marker for the model's scene root
#[derive(Component, Debug, Default)]
pub struct BeetleModel;

/// Added to the model root once its meshes have materials
#[derive(Component, Debug, Default)]
pub struct ModelBound;

pub struct ModelPlugin;

impl Plugin for ModelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_model);
    }
}

fn spawn_model(mut commands: Commands, assets: Res<ViewerAssets>) {
    commands
        .spawn((
            SceneRoot(assets.model.clone()),
            BeetleModel,
            Name::new("Beetle"),
        ))
        .observe(bind_model);
}

/// Walk the freshly spawned scene, give every role its material, move the
/// whole model onto [`MODEL_LAYER`], then hand the discovered head variants
/// to [`ViewerState`]
fn bind_model(
    ready: On<SceneInstanceReady>,
    mut commands: Commands,
    config: Res<ViewerConfig>,
    materials: Res<ViewerMaterials>,
    children: Query<&Children>,
    names: Query<&Name>,
    meshes: Query<(), With<Mesh3d>>,
    mut state: ResMut<ViewerState>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    let root = ready.entity;
    let mut inventory = RoleInventory::default();

    for entity in children.iter_descendants(root) {
        let Ok(name) = names.get(entity) else {
            continue;
        };
        let Some(role) = MeshRole::from_mesh_name(&config.meshes, name.as_str()) else {
            continue;
        };
        // A glTF node and its single primitive can share a name; the node wins
        if inventory.contains(role) {
            continue;
        }
        inventory.record(role);

        if let MeshRole::Head(variant) = role {
            commands.entity(entity).insert(HeadMesh(variant));
        }

        let targets = std::iter::once(entity).chain(children.iter_descendants(entity));
        for mesh_entity in targets.filter(|e| meshes.contains(*e)) {
            let mut mesh = commands.entity(mesh_entity);
            mesh.remove::<MeshMaterial3d<StandardMaterial>>();
            match role.material() {
                MaterialKind::Carapace => {
                    mesh.insert(MeshMaterial3d(materials.carapace.clone()));
                }
                MaterialKind::Head => {
                    mesh.insert(MeshMaterial3d(materials.head.clone()));
                }
            }
        }
    }

    // Unnamed parts too, or the capture cameras would see them
    for mesh_entity in children.iter_descendants(root).filter(|e| meshes.contains(*e)) {
        commands
            .entity(mesh_entity)
            .insert(RenderLayers::layer(MODEL_LAYER));
    }

    if let Err(e) = inventory.validate() {
        error!("{}", e);
        outbound.send(ViewerToUi::Error {
            code: "missing_meshes".to_string(),
            message: e.to_string(),
        });
    }

    let shown = state.model_loaded(inventory.heads());
    outbound.send(ViewerToUi::ModelLoaded {
        heads: state.heads().loaded().to_vec(),
    });
    if let Some(head) = shown {
        outbound.send(ViewerToUi::HeadChanged { head });
    }

    commands.entity(root).insert(ModelBound);
    info!("Beetle model bound");
}

#[cfg(test)]
mod tests {
    use bevy::scene::SceneSpawner;
    use scarab_ipc::HeadVariant;

    use super::*;
    use crate::materials::{CarapaceMaterial, HeadMaterial};

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ViewerConfig>()
            .init_resource::<ViewerState>()
            .init_resource::<OutboundUiMessages>()
            .insert_resource(ViewerMaterials {
                carapace: Handle::default(),
                head: Handle::default(),
            });
        app
    }

    /// A model root with one named node per part, each holding a mesh
    fn spawn_model_with(app: &mut App, parts: &[&str]) -> (Entity, Vec<(Entity, Entity)>) {
        let world = app.world_mut();
        let root = world.spawn((BeetleModel, Name::new("Beetle"))).id();
        let nodes = parts
            .iter()
            .map(|part| {
                let mesh = world.spawn(Mesh3d::default()).id();
                let node = world.spawn(Name::new(part.to_string())).add_child(mesh).id();
                world.entity_mut(root).add_child(node);
                (node, mesh)
            })
            .collect();
        world.entity_mut(root).observe(bind_model);
        (root, nodes)
    }

    fn scene_ready(app: &mut App, root: Entity) {
        let instance_id = SceneSpawner::default().spawn(Handle::<Scene>::default());
        app.world_mut().trigger(SceneInstanceReady {
            entity: root,
            instance_id,
        });
        app.update();
    }

    fn take_outbound(app: &mut App) -> Vec<ViewerToUi> {
        app.world_mut().resource_mut::<OutboundUiMessages>().drain()
    }

    #[test]
    fn test_complete_model_binds_every_role() {
        let mut app = test_app();
        let (root, nodes) = spawn_model_with(
            &mut app,
            &["Carapace", "Head_A", "Head_B", "Head_C", "Legs", "Eyes"],
        );
        scene_ready(&mut app, root);

        let world = app.world();
        let (_, carapace_mesh) = nodes[0];
        assert!(world.get::<MeshMaterial3d<CarapaceMaterial>>(carapace_mesh).is_some());
        assert!(world.get::<MeshMaterial3d<HeadMaterial>>(carapace_mesh).is_none());
        for &(_, mesh) in &nodes[1..5] {
            assert!(world.get::<MeshMaterial3d<HeadMaterial>>(mesh).is_some());
        }
        for (i, variant) in HeadVariant::ALL.into_iter().enumerate() {
            let (node, _) = nodes[1 + i];
            assert_eq!(world.get::<HeadMesh>(node).map(|h| h.0), Some(variant));
        }

        // Eyes have no role and keep their material
        let (_, eyes_mesh) = nodes[5];
        assert!(world.get::<MeshMaterial3d<HeadMaterial>>(eyes_mesh).is_none());
        assert!(world.get::<MeshMaterial3d<CarapaceMaterial>>(eyes_mesh).is_none());

        assert!(world.get::<ModelBound>(root).is_some());
        assert_eq!(
            world.resource::<ViewerState>().heads().active(),
            Some(HeadVariant::A)
        );
        assert_eq!(
            take_outbound(&mut app),
            vec![
                ViewerToUi::ModelLoaded {
                    heads: HeadVariant::ALL.to_vec()
                },
                ViewerToUi::HeadChanged {
                    head: HeadVariant::A
                },
            ]
        );
    }

    #[test]
    fn test_every_model_mesh_is_hidden_from_capture() {
        let mut app = test_app();
        let (root, nodes) = spawn_model_with(
            &mut app,
            &["Carapace", "Head_A", "Head_B", "Head_C", "Legs", "Eyes", "Antenna"],
        );
        scene_ready(&mut app, root);

        let model_layer = RenderLayers::layer(MODEL_LAYER);
        for (node, mesh) in nodes {
            assert_eq!(app.world().get::<RenderLayers>(mesh), Some(&model_layer));
            assert!(app.world().get::<RenderLayers>(node).is_none());
        }
    }

    #[test]
    fn test_missing_roles_are_reported() {
        let mut app = test_app();
        let (root, _) = spawn_model_with(&mut app, &["Carapace", "Head_B"]);
        scene_ready(&mut app, root);

        let messages = take_outbound(&mut app);
        let ViewerToUi::Error { code, message } = &messages[0] else {
            panic!("expected an error, got {:?}", messages[0]);
        };
        assert_eq!(code, "missing_meshes");
        assert!(message.contains("Legs"), "{message}");
        assert_eq!(
            messages[1..],
            [
                ViewerToUi::ModelLoaded {
                    heads: vec![HeadVariant::B]
                },
                ViewerToUi::HeadChanged {
                    head: HeadVariant::B
                },
            ]
        );
        assert!(app.world().get::<ModelBound>(root).is_some());
    }
}
