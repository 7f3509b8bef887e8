use bevy::prelude::*;

/// 全局配置：数据文件在 assets 下的相对路径
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub items_path: String,
    pub tuning_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            items_path: "data/items.ron".into(),
            tuning_path: "data/tuning.toml".into(),
        }
    }
}
