pub mod components;
pub mod systems;

use crate::core::{states::AppState, GameSet};
use bevy::prelude::*;
use systems::*;

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<components::CameraRig>()
            .init_resource::<components::WorldGeometry>()
            // 在游戏开始时生成玩家
            .add_systems(OnEnter(AppState::InGame), spawn_player)
            // 组内顺序即原每帧调用顺序
            .add_systems(
                Update,
                (
                    clear_triggers,
                    toggle_combat,
                    update_move_flags,
                    integrate,
                    apply_movement,
                    head_clearance,
                )
                    .chain()
                    .in_set(GameSet::Locomotion)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
