use super::{components::InputSnapshot, events::InjectInput};
use bevy::prelude::*;

/// WASD → [-1,1] 轴
pub fn axes(w: bool, s: bool, a: bool, d: bool) -> (f32, f32) {
    let h = (d as i8 - a as i8) as f32;
    let v = (w as i8 - s as i8) as f32;
    (h, v)
}

/// 每帧一次，把键鼠状态和 CLI 注入合并成快照
pub fn read_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut inject: EventReader<InjectInput>,
    mut snap: ResMut<InputSnapshot>,
) {
    let (h, v) = axes(
        keys.pressed(KeyCode::KeyW),
        keys.pressed(KeyCode::KeyS),
        keys.pressed(KeyCode::KeyA),
        keys.pressed(KeyCode::KeyD),
    );

    *snap = InputSnapshot {
        horizontal: h,
        vertical: v,
        sprint: keys.pressed(KeyCode::ShiftLeft),
        jump: keys.just_pressed(KeyCode::Space),
        combat_toggle: keys.just_pressed(KeyCode::KeyF),
        attack: mouse.just_pressed(MouseButton::Left),
        equip: keys.just_pressed(KeyCode::KeyG),
        store: keys.just_pressed(KeyCode::KeyK),
    };

    for ev in inject.read() {
        match *ev {
            InjectInput::Move { h, v } => {
                snap.horizontal = h.clamp(-1.0, 1.0);
                snap.vertical = v.clamp(-1.0, 1.0);
            }
            InjectInput::Sprint => snap.sprint = true,
            InjectInput::Jump => snap.jump = true,
            InjectInput::CombatToggle => snap.combat_toggle = true,
            InjectInput::Attack => snap.attack = true,
            InjectInput::Equip => snap.equip = true,
            InjectInput::Store => snap.store = true,
        }
    }
}
