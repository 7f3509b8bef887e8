pub mod schema;
pub mod loader;

use bevy::prelude::*;
use schema::{ItemList, Tuning};

use crate::core::resources::GameConfig;
use crate::core::states::AppState;

// --------------------------- 资源 ---------------------------
#[derive(Resource, Default)]
pub struct ItemAssets {
    pub items: Option<Handle<ItemList>>,
    pub tuning: Option<Handle<Tuning>>,
}

/// 载入完成后的手感常量快照，游戏内系统直接读它
#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveTuning(pub Tuning);

// --------------------------- 插件 ---------------------------
pub struct DataPlugin;
impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app
            // 注册资产类型 & Loader
            .init_asset::<ItemList>()
            .init_asset::<Tuning>()
            .register_asset_loader(loader::RonItemLoader::default())
            .register_asset_loader(loader::TomlTuningLoader::default())
            // 注册资源
            .init_resource::<ItemAssets>()
            .init_resource::<ActiveTuning>()
            // Loading 流程
            .add_systems(OnEnter(AppState::Loading), start_loading)
            .add_systems(Update, check_loaded.run_if(in_state(AppState::Loading)));
    }
}

// --------------------------- 系统 ---------------------------
fn start_loading(
    mut item_assets: ResMut<ItemAssets>,
    config: Res<GameConfig>,
    asset_server: Res<AssetServer>,
) {
    item_assets.items = Some(asset_server.load(config.items_path.clone()));
    item_assets.tuning = Some(asset_server.load(config.tuning_path.clone()));
}

fn check_loaded(
    mut commands: Commands,
    mut next: ResMut<NextState<AppState>>,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
    tunings: Res<Assets<Tuning>>,
) {
    let Some(list) = item_assets.items.as_ref().and_then(|h| lists.get(h)) else {
        return;
    };
    let Some(tuning) = item_assets.tuning.as_ref().and_then(|h| tunings.get(h)) else {
        return;
    };

    if let Err(e) = tuning.validate() {
        warn!("tuning.toml 数值异常: {e:#}");
    }

    commands.insert_resource(ActiveTuning(tuning.clone()));
    println!("✔ Items loaded: {}", list.items.len());
    next.set(AppState::InGame);
}
