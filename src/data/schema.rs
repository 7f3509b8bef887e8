use bevy::asset::Asset;
use bevy::reflect::TypePath;
use serde::Deserialize;

/// 可拾取物品的静态条目
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemEntry {
    pub id: String,
    pub name: String,
    /// 出生点（世界坐标）
    #[serde(default)]
    pub pos: [f32; 3],
}

#[derive(Asset, TypePath, Deserialize, Debug)]
pub struct ItemList {
    pub items: Vec<ItemEntry>,
}

/// 移动手感参数
#[derive(Debug, Clone, Deserialize)]
pub struct MoveTuning {
    pub speed: f32,
    pub sprint_bonus: f32,
    pub jump_force: f32,
    pub jump_time: f32,
    pub gravity: f32,
    /// 朝向插值的每帧混合权重
    pub rotate_blend: f32,
    /// 头顶探测 = 半身高 × 此系数
    pub head_probe: f32,
}

impl Default for MoveTuning {
    fn default() -> Self {
        Self {
            speed: 5.0,
            sprint_bonus: 3.5,
            jump_force: 18.0,
            jump_time: 0.85,
            gravity: 9.8,
            rotate_blend: 0.15,
            head_probe: 1.1,
        }
    }
}

/// 连击参数
#[derive(Debug, Clone, Deserialize)]
pub struct ComboTuning {
    /// 追击窗口（秒）
    pub window: f32,
    pub max_step: u8,
}

impl Default for ComboTuning {
    fn default() -> Self {
        Self {
            window: 2.5,
            max_step: 3,
        }
    }
}

/// 拾取 / 手部挂点参数
#[derive(Debug, Clone, Deserialize)]
pub struct GearTuning {
    pub pickup_range: f32,
    pub hand_offset: [f32; 3],
    /// 手中物品绕 Z 的固定滚转角（度）
    pub hand_roll_deg: f32,
}

impl Default for GearTuning {
    fn default() -> Self {
        Self {
            pickup_range: 2.0,
            hand_offset: [-0.12, 0.2, 0.0],
            hand_roll_deg: 45.0,
        }
    }
}

/// 弹窗时间线参数
#[derive(Debug, Clone, Deserialize)]
pub struct PopupTuning {
    /// 透明度上升速率（每秒）
    pub fade_in_rate: f32,
    pub hold_time: f32,
    /// 下降速率，刻意比上升慢
    pub fade_out_rate: f32,
}

impl Default for PopupTuning {
    fn default() -> Self {
        Self {
            fade_in_rate: 3.0,
            hold_time: 2.0,
            fade_out_rate: 2.0,
        }
    }
}

/// 全部手感常量，tuning.toml 的顶层结构
#[derive(Asset, TypePath, Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Tuning {
    pub movement: MoveTuning,
    pub combo: ComboTuning,
    pub gear: GearTuning,
    pub popup: PopupTuning,
}

impl Tuning {
    /// 载入后做一次健全性检查，失败只告警不终止
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.movement.jump_time > 0.0, "movement.jump_time 必须为正");
        anyhow::ensure!(self.movement.speed > 0.0, "movement.speed 必须为正");
        anyhow::ensure!(self.combo.window > 0.0, "combo.window 必须为正");
        anyhow::ensure!(self.combo.max_step >= 1, "combo.max_step 至少为 1");
        anyhow::ensure!(self.gear.pickup_range > 0.0, "gear.pickup_range 必须为正");
        anyhow::ensure!(
            self.popup.fade_in_rate > 0.0 && self.popup.fade_out_rate > 0.0,
            "popup 淡入淡出速率必须为正"
        );
        Ok(())
    }
}
