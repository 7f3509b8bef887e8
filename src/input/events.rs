use bevy::prelude::*;

/// CLI 注入的一帧输入，和键盘边沿合并进快照
#[derive(Event, Debug, Clone)]
pub enum InjectInput {
    Move { h: f32, v: f32 },
    Sprint,
    Jump,
    CombatToggle,
    Attack,
    Equip,
    Store,
}
