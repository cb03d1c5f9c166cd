//! Model and pattern mask loading
//!
//! Every asset gets exactly one load attempt. The first time a handle
//! settles, its outcome is logged once; a failed asset simply stays absent.

use bevy::asset::{LoadState, RenderAssetUsages, UntypedAssetId};
use bevy::image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use customizer::PatternMask;
use scarab_config::{AssetPaths, ViewerConfig};
use scarab_ipc::{PatternKind, ViewerToUi};

use crate::messages::OutboundUiMessages;

/// How far an asset has come
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Pending,
    Ready,
    Failed,
}

#[derive(Debug)]
struct TrackedAsset {
    path: String,
    id: UntypedAssetId,
    status: AssetStatus,
}

/// Handles for everything the viewer loads
#[derive(Resource)]
pub struct ViewerAssets {
    pub model: Handle<Scene>,
    /// Generated 1x1 white mask, available without loading
    pub plain_mask: Handle<Image>,
    pub spots_mask: Handle<Image>,
    pub stripes_mask: Handle<Image>,
    tracked: Vec<TrackedAsset>,
}

impl ViewerAssets {
    fn new(
        model: Handle<Scene>,
        plain_mask: Handle<Image>,
        spots_mask: Handle<Image>,
        stripes_mask: Handle<Image>,
        paths: &AssetPaths,
    ) -> Self {
        let tracked = [
            (&paths.model, model.id().untyped()),
            (&paths.spots_mask, spots_mask.id().untyped()),
            (&paths.stripes_mask, stripes_mask.id().untyped()),
        ]
        .into_iter()
        .map(|(path, id)| TrackedAsset {
            path: path.clone(),
            id,
            status: AssetStatus::Pending,
        })
        .collect();

        Self {
            model,
            plain_mask,
            spots_mask,
            stripes_mask,
            tracked,
        }
    }

    /// Load status of a tracked asset
    pub fn status(&self, id: impl Into<UntypedAssetId>) -> AssetStatus {
        let id = id.into();
        self.tracked
            .iter()
            .find(|asset| asset.id == id)
            .map_or(AssetStatus::Ready, |asset| asset.status)
    }

    /// Mask texture to bind for `pattern`. A pattern whose image is not
    /// ready draws with the plain mask.
    pub fn mask_for(&self, pattern: PatternKind) -> Handle<Image> {
        let handle = match pattern {
            PatternKind::Plain => return self.plain_mask.clone(),
            PatternKind::Spots => &self.spots_mask,
            PatternKind::Stripes => &self.stripes_mask,
        };
        if self.status(handle.id()) == AssetStatus::Ready {
            handle.clone()
        } else {
            self.plain_mask.clone()
        }
    }

    /// Settle every pending asset whose load finished. Each failure is
    /// logged and reported once.
    fn record_load_states(
        &mut self,
        load_state: impl Fn(UntypedAssetId) -> Option<LoadState>,
        outbound: &mut OutboundUiMessages,
    ) {
        for asset in self.tracked.iter_mut() {
            if asset.status != AssetStatus::Pending {
                continue;
            }
            match load_state(asset.id) {
                Some(LoadState::Loaded) => {
                    info!("Loaded {}", asset.path);
                    asset.status = AssetStatus::Ready;
                }
                Some(LoadState::Failed(err)) => {
                    error!("LoadFailure: {}: {}", asset.path, err);
                    outbound.send(ViewerToUi::Error {
                        code: "load_failed".to_string(),
                        message: format!("{}: {}", asset.path, err),
                    });
                    asset.status = AssetStatus::Failed;
                }
                _ => {}
            }
        }
    }

    fn is_settled(&self) -> bool {
        self.tracked
            .iter()
            .all(|asset| asset.status != AssetStatus::Pending)
    }
}

/// Plugin that starts every load at startup and reports outcomes
pub struct AssetLoadingPlugin;

impl Plugin for AssetLoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, start_loading)
            .add_systems(Update, track_load_states);
    }
}

fn start_loading(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    config: Res<ViewerConfig>,
) {
    let paths = &config.assets;

    let model = asset_server.load(GltfAssetLabel::Scene(0).from_asset(paths.model.clone()));
    let spots_mask = load_mask(&asset_server, &paths.spots_mask);
    let stripes_mask = load_mask(&asset_server, &paths.stripes_mask);
    let plain_mask = images.add(plain_mask_image());

    info!("Loading model {} and pattern masks", paths.model);

    commands.insert_resource(ViewerAssets::new(
        model,
        plain_mask,
        spots_mask,
        stripes_mask,
        paths,
    ));
}

/// Masks are data, not color: linear, clamped at the edges
fn load_mask(asset_server: &AssetServer, path: &str) -> Handle<Image> {
    asset_server.load_with_settings(path.to_string(), |settings: &mut ImageLoaderSettings| {
        settings.is_srgb = false;
        settings.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
            address_mode_u: ImageAddressMode::ClampToEdge,
            address_mode_v: ImageAddressMode::ClampToEdge,
            address_mode_w: ImageAddressMode::ClampToEdge,
            ..ImageSamplerDescriptor::linear()
        });
    })
}

fn plain_mask_image() -> Image {
    let mask = PatternMask::plain();
    Image::new(
        Extent3d {
            width: mask.width(),
            height: mask.height(),
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        mask.to_rgba8(),
        TextureFormat::Rgba8Unorm,
        RenderAssetUsages::RENDER_WORLD,
    )
}

/// Log each asset's outcome once
fn track_load_states(
    asset_server: Res<AssetServer>,
    assets: Option<ResMut<ViewerAssets>>,
    mut outbound: ResMut<OutboundUiMessages>,
) {
    let Some(mut assets) = assets else {
        return;
    };
    if assets.is_settled() {
        return;
    }
    assets.record_load_states(|id| asset_server.get_load_state(id), &mut outbound);
}
