use bevy::prelude::*;

/// 玩家标记组件
#[derive(Component)]
pub struct Player;

/// 手部挂点标记（玩家的子实体，装备的父节点）
#[derive(Component)]
pub struct HandAnchor;

/// 角色运动状态。每帧只有移动系统写它，其余系统按帧序只读
#[derive(Component, Debug, Clone)]
pub struct CharacterState {
    /// 本帧世界位移（已含 dt）
    pub velocity: Vec3,
    pub grounded: bool,
    pub airborne: bool,
    /// 离地后累计的跳跃时间（秒）
    pub jump_elapsed: f32,
    /// 战斗姿态：压制冲刺和跳跃，放行连击
    pub combat: bool,
    pub sprinting: bool,
    pub half_height: f32,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            grounded: true,
            airborne: false,
            jump_elapsed: 0.0,
            combat: false,
            sprinting: false,
            half_height: 1.0,
        }
    }
}

impl CharacterState {
    /// 起跳。战斗姿态或脚不沾地时忽略：
    /// 空中按跳不会重置 jump_elapsed，重新落地后才放行
    pub fn try_jump(&mut self) -> bool {
        if self.combat || !self.grounded {
            return false;
        }
        self.airborne = true;
        self.jump_elapsed = 0.0;
        true
    }

    /// 头顶被挡：立刻终止上升段
    pub fn block_head(&mut self) {
        self.airborne = false;
        self.jump_elapsed = 0.0;
    }
}

/// 动画参数槽：外部骨骼系统按帧读取。
/// 挂在玩家上；缺失时移动照常，只是不发参数
#[derive(Component, Debug, Default)]
pub struct Animator {
    pub run: bool,
    pub sprint: bool,
    pub air: bool,
    pub is_combat: bool,
    pub combo_step: i32,
    triggers: Vec<&'static str>,
}

impl Animator {
    /// 发出一个单帧触发脉冲
    pub fn trigger(&mut self, name: &'static str) {
        self.triggers.push(name);
    }

    pub fn triggered(&self, name: &str) -> bool {
        self.triggers.iter().any(|t| *t == name)
    }

    /// 帧首清掉上一帧的脉冲
    pub fn clear_triggers(&mut self) {
        self.triggers.clear();
    }
}

/// 相机基向量，由相机协作方每帧提供
#[derive(Resource, Debug, Clone)]
pub struct CameraRig {
    pub forward: Vec3,
    pub right: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            forward: Vec3::Z,
            right: Vec3::X,
        }
    }
}

/// 水平天花板板块，头顶探测的目标
#[derive(Debug, Clone)]
pub struct Ceiling {
    pub center: Vec3,
    /// x/z 方向的半宽
    pub half_extent: Vec2,
}

/// 碰撞求解方的替身：一块地面加若干天花板
#[derive(Resource, Debug, Clone)]
pub struct WorldGeometry {
    pub ground_height: f32,
    pub ceilings: Vec<Ceiling>,
}

impl Default for WorldGeometry {
    fn default() -> Self {
        Self {
            ground_height: 0.0,
            ceilings: Vec::new(),
        }
    }
}

impl WorldGeometry {
    /// 从 origin 垂直向上探 dist，命中任一天花板即 true
    pub fn probe_up(&self, origin: Vec3, dist: f32) -> bool {
        self.ceilings.iter().any(|c| {
            c.center.y > origin.y
                && c.center.y <= origin.y + dist
                && (origin.x - c.center.x).abs() <= c.half_extent.x
                && (origin.z - c.center.z).abs() <= c.half_extent.y
        })
    }
}
