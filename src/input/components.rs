use bevy::prelude::*;

/// 本帧输入快照：轴是持续量，sprint 是按住，其余都是当帧边沿
#[derive(Resource, Debug, Clone, Default)]
pub struct InputSnapshot {
    pub horizontal: f32,
    pub vertical: f32,
    pub sprint: bool,
    pub jump: bool,
    pub combat_toggle: bool,
    pub attack: bool,
    pub equip: bool,
    pub store: bool,
}

impl InputSnapshot {
    /// 是否有水平移动输入
    pub fn moving(&self) -> bool {
        self.horizontal != 0.0 || self.vertical != 0.0
    }
}
