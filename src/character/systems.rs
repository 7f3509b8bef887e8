use super::components::*;
use crate::combat::components::ComboState;
use crate::data::schema::MoveTuning;
use crate::data::ActiveTuning;
use crate::input::components::InputSnapshot;
use crate::inventory::components::Gear;
use bevy::prelude::*;

/// Unity 风格 SmoothStep：两端夹紧的三次缓动插值
pub fn smooth_step(from: f32, to: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let v = t * t * (3.0 - 2.0 * t);
    from + (to - from) * v
}

/// 垂直位移：跳跃上升段从满力缓动衰减到 30%，
/// 重力每帧无条件扣除，落没落地由 mover 判定
pub fn vertical_step(st: &mut CharacterState, m: &MoveTuning, dt: f32) -> f32 {
    let mut dy = 0.0;
    if st.airborne {
        dy = smooth_step(
            m.jump_force,
            m.jump_force * 0.3,
            st.jump_elapsed / m.jump_time,
        ) * dt;
        st.jump_elapsed += dt;
        if st.jump_elapsed >= m.jump_time {
            st.airborne = false;
            st.jump_elapsed = 0.0;
        }
    }
    dy - m.gravity * dt
}

/// 相机系水平位移。输入为零时返回 None，调用方不更新朝向
pub fn horizontal_step(rig: &CameraRig, h: f32, v: f32, speed: f32, dt: f32) -> Option<Vec3> {
    if h == 0.0 && v == 0.0 {
        return None;
    }
    let fwd = Vec3::new(rig.forward.x, 0.0, rig.forward.z).normalize_or_zero();
    let right = Vec3::new(rig.right.x, 0.0, rig.right.z).normalize_or_zero();
    let dir = (fwd * v + right * h).normalize_or_zero();
    Some(dir * speed * dt)
}

/// 帧首清掉上一帧的触发脉冲
pub fn clear_triggers(mut query: Query<&mut Animator>) {
    for mut animator in &mut query {
        animator.clear_triggers();
    }
}

/// F 键切换战斗姿态。战斗标志只在这里写
pub fn toggle_combat(
    snap: Res<InputSnapshot>,
    mut query: Query<(&mut CharacterState, Option<&mut Animator>), With<Player>>,
) {
    if !snap.combat_toggle {
        return;
    }
    let Ok((mut st, animator)) = query.single_mut() else {
        return;
    };
    st.combat = !st.combat;
    if let Some(mut animator) = animator {
        animator.is_combat = st.combat;
    }
}

/// 移动/冲刺标志与对应动画布尔量。战斗姿态压制冲刺
pub fn update_move_flags(
    snap: Res<InputSnapshot>,
    mut query: Query<(&mut CharacterState, Option<&mut Animator>), With<Player>>,
) {
    let Ok((mut st, animator)) = query.single_mut() else {
        return;
    };
    let moving = snap.moving();
    st.sprinting = moving && snap.sprint && !st.combat;

    match animator {
        Some(mut animator) => {
            animator.run = moving && !st.combat;
            animator.sprint = st.sprinting;
            animator.air = !st.grounded;
        }
        None => warn_once!("玩家没有 Animator，动画参数不会更新"),
    }
}

/// 积分出本帧位移与目标朝向
pub fn integrate(
    snap: Res<InputSnapshot>,
    rig: Res<CameraRig>,
    tuning: Res<ActiveTuning>,
    time: Res<Time>,
    mut query: Query<(&mut CharacterState, &mut Transform, Option<&mut Animator>), With<Player>>,
) {
    let Ok((mut st, mut tf, mut animator)) = query.single_mut() else {
        return;
    };
    let dt = time.delta_secs();
    let m = &tuning.0.movement;

    if snap.jump && st.try_jump() {
        // 跳跃请求交叉淡入，由骨骼侧消费
        if let Some(animator) = animator.as_mut() {
            animator.trigger("Jump");
        }
    }

    let dy = vertical_step(&mut st, m, dt);
    let speed = m.speed + if st.sprinting { m.sprint_bonus } else { 0.0 };

    let mut velocity = Vec3::Y * dy;
    if let Some(step) = horizontal_step(&rig, snap.horizontal, snap.vertical, speed, dt) {
        velocity += step;
        let heading = Quat::from_rotation_y(step.x.atan2(step.z));
        // 视觉平滑：固定权重插值而不是直接扭头
        tf.rotation = tf.rotation.slerp(heading, m.rotate_blend);
    }
    st.velocity = velocity;
}

/// mover 替身：套用位移并贴地。grounded 只由它写
pub fn apply_movement(
    geo: Res<WorldGeometry>,
    mut query: Query<(&mut CharacterState, &mut Transform), With<Player>>,
) {
    let Ok((mut st, mut tf)) = query.single_mut() else {
        return;
    };
    tf.translation += st.velocity;
    if tf.translation.y <= geo.ground_height {
        tf.translation.y = geo.ground_height;
        st.grounded = true;
    } else {
        st.grounded = false;
    }
}

/// 从身体中心向上的短探测，命中则强制结束上升段
pub fn head_clearance(
    geo: Res<WorldGeometry>,
    tuning: Res<ActiveTuning>,
    mut query: Query<(&mut CharacterState, &Transform), With<Player>>,
) {
    let Ok((mut st, tf)) = query.single_mut() else {
        return;
    };
    let center = tf.translation + Vec3::Y * st.half_height;
    let dist = st.half_height * tuning.0.movement.head_probe;
    if st.airborne && geo.probe_up(center, dist) {
        st.block_head();
    }
}

/// 生成玩家与手部挂点
pub fn spawn_player(mut commands: Commands) {
    let player = commands
        .spawn((
            Player,
            CharacterState::default(),
            ComboState::default(),
            Gear::default(),
            Animator::default(),
            Transform::default(),
        ))
        .id();

    commands.spawn((
        HandAnchor,
        Transform::from_xyz(0.35, 1.4, 0.0),
        ChildOf(player),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> MoveTuning {
        MoveTuning::default()
    }

    #[test]
    fn smooth_step_clamps_both_ends() {
        assert_eq!(smooth_step(18.0, 5.4, -1.0), 18.0);
        assert_eq!(smooth_step(18.0, 5.4, 0.0), 18.0);
        assert_eq!(smooth_step(18.0, 5.4, 1.0), 5.4);
        assert_eq!(smooth_step(18.0, 5.4, 2.0), 5.4);
        let mid = smooth_step(18.0, 5.4, 0.5);
        assert!(mid < 18.0 && mid > 5.4);
    }

    #[test]
    fn camera_relative_mapping() {
        let rig = CameraRig::default();
        // W → 相机前方 (+Z)
        let step = horizontal_step(&rig, 0.0, 1.0, 5.0, 1.0).unwrap();
        assert!(step.z > 4.9 && step.x.abs() < 1e-4);
        // A → 相机左方 (-X)
        let step = horizontal_step(&rig, -1.0, 0.0, 5.0, 1.0).unwrap();
        assert!(step.x < -4.9 && step.z.abs() < 1e-4);
        // 无输入不产生位移
        assert!(horizontal_step(&rig, 0.0, 0.0, 5.0, 1.0).is_none());
    }

    #[test]
    fn diagonal_is_normalized() {
        let rig = CameraRig::default();
        let step = horizontal_step(&rig, 1.0, 1.0, 5.0, 1.0).unwrap();
        assert!((step.length() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn tilted_camera_is_flattened() {
        let rig = CameraRig {
            forward: Vec3::new(0.0, -0.5, 0.5),
            right: Vec3::X,
        };
        let step = horizontal_step(&rig, 0.0, 1.0, 5.0, 1.0).unwrap();
        assert_eq!(step.y, 0.0);
        assert!(step.z > 4.9);
    }

    #[test]
    fn gravity_applies_every_frame_even_on_ground() {
        let m = tuning();
        let mut st = CharacterState::default();
        let dy = vertical_step(&mut st, &m, 0.1);
        assert!((dy - (-m.gravity * 0.1)).abs() < 1e-5);
    }

    #[test]
    fn jump_arc_runs_once_and_expires() {
        let m = tuning();
        let mut st = CharacterState::default();
        assert!(st.try_jump());
        assert_eq!(st.jump_elapsed, 0.0);

        let dt = 0.1;
        let mut frames = 0;
        // 起跳初段净位移向上
        let dy = vertical_step(&mut st, &m, dt);
        assert!(dy > 0.0);
        frames += 1;

        while st.airborne {
            vertical_step(&mut st, &m, dt);
            frames += 1;
            assert!(frames < 1000, "jump must terminate");
        }
        // 0.85s / 0.1s → 第 9 帧越过时长
        assert_eq!(frames, 9);
        assert_eq!(st.jump_elapsed, 0.0);
        // 结束后只剩重力
        let dy = vertical_step(&mut st, &m, dt);
        assert!(dy < 0.0);
    }

    #[test]
    fn head_block_resets_ascent() {
        let mut st = CharacterState::default();
        assert!(st.try_jump());
        st.jump_elapsed = 0.3;
        st.block_head();
        assert!(!st.airborne);
        assert_eq!(st.jump_elapsed, 0.0);
    }
}
