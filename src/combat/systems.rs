use super::components::ComboState;
use crate::character::components::{Animator, CharacterState, Player};
use crate::data::ActiveTuning;
use crate::input::components::InputSnapshot;
use bevy::prelude::*;

/// 连击主循环：姿态同步 → 扣窗口 → 处理本帧点击
pub fn drive_combo(
    snap: Res<InputSnapshot>,
    tuning: Res<ActiveTuning>,
    time: Res<Time>,
    mut query: Query<(&CharacterState, &mut ComboState, Option<&mut Animator>), With<Player>>,
) {
    let Ok((st, mut combo, mut animator)) = query.single_mut() else {
        return;
    };
    let t = &tuning.0.combo;

    // 进出战斗姿态都无条件清空连击动画标志
    if combo.sync_combat(st.combat) {
        if let Some(animator) = animator.as_mut() {
            animator.combo_step = 0;
        }
    }

    combo.tick(time.delta_secs());

    if snap.attack {
        if let Some(step) = combo.strike(st.combat, t) {
            match animator.as_mut() {
                Some(animator) => {
                    animator.combo_step = step as i32;
                    animator.trigger("Punch");
                }
                None => warn_once!("玩家没有 Animator，连击不发动画指令"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::systems::{clear_triggers, toggle_combat};
    use std::time::Duration;

    fn frame(app: &mut App, f: impl Fn(&mut InputSnapshot)) {
        {
            let mut snap = app.world_mut().resource_mut::<InputSnapshot>();
            *snap = InputSnapshot::default();
            f(&mut snap);
        }
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(0.1));
        app.update();
    }

    #[test]
    fn punch_gated_by_combat_mode() {
        let mut app = App::new();
        app.init_resource::<InputSnapshot>()
            .init_resource::<ActiveTuning>()
            .init_resource::<Time>()
            .add_systems(
                Update,
                (clear_triggers, toggle_combat, drive_combo).chain(),
            );
        let player = app
            .world_mut()
            .spawn((
                Player,
                CharacterState::default(),
                ComboState::default(),
                Animator::default(),
            ))
            .id();

        // 非战斗姿态：点击既不进段也不发脉冲
        frame(&mut app, |s| s.attack = true);
        let anim = app.world().get::<Animator>(player).unwrap();
        assert_eq!(anim.combo_step, 0);
        assert!(!anim.triggered("Punch"));
        assert_eq!(app.world().get::<ComboState>(player).unwrap().step, 0);

        // 切进战斗姿态后点击进第 1 段
        frame(&mut app, |s| s.combat_toggle = true);
        frame(&mut app, |s| s.attack = true);
        let anim = app.world().get::<Animator>(player).unwrap();
        assert_eq!(anim.combo_step, 1);
        assert!(anim.triggered("Punch"));

        // 退出战斗姿态：连击动画标志无条件清空
        frame(&mut app, |s| s.combat_toggle = true);
        let anim = app.world().get::<Animator>(player).unwrap();
        assert_eq!(anim.combo_step, 0);
        assert!(!anim.triggered("Punch"));
        assert_eq!(app.world().get::<ComboState>(player).unwrap().step, 0);
    }
}
