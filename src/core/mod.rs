use bevy::prelude::*;

pub mod states;
pub mod events;
pub mod resources;

/// 每帧固定执行顺序：输入 → 移动 → 战斗 → 装备 → 界面
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Locomotion,
    Combat,
    Inventory,
    Interface,
}

/// 核心插件：注册全局资源 / 事件 / 状态
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        use states::AppState;

        app.init_state::<AppState>()
            .add_event::<events::LogEvent>()
            .init_resource::<resources::GameConfig>()
            // 帧内没有抢占，时序全靠这条链
            .configure_sets(
                Update,
                (
                    GameSet::Input,
                    GameSet::Locomotion,
                    GameSet::Combat,
                    GameSet::Inventory,
                    GameSet::Interface,
                )
                    .chain(),
            );
    }
}
