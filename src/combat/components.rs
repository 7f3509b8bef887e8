use crate::data::schema::ComboTuning;
use bevy::prelude::*;

/// 连击状态机：Idle(0) → 1 → 2 → 3，靠滚动窗口续段。
/// 不变式：step > 0 时 window 必为正；窗口归零的那一帧两者一起清
#[derive(Component, Debug, Clone)]
pub struct ComboState {
    pub step: u8,
    /// 剩余追击窗口（秒）
    pub window: f32,
    /// 出拳冷却闸门
    pub can_punch: bool,
    prev_combat: bool,
}

impl Default for ComboState {
    fn default() -> Self {
        Self {
            step: 0,
            window: 0.0,
            can_punch: true,
            prev_combat: false,
        }
    }
}

impl ComboState {
    /// 每帧扣窗口；到 0 即截断并把 step 归位
    pub fn tick(&mut self, dt: f32) {
        if self.window > 0.0 {
            self.window -= dt;
            if self.window <= 0.0 {
                self.window = 0.0;
                self.step = 0;
            }
        }
    }

    /// 一次合格点击。非战斗姿态或冷却中无效；
    /// 窗口内续段（封顶 max_step），窗口外从 1 重来
    pub fn strike(&mut self, combat: bool, t: &ComboTuning) -> Option<u8> {
        if !combat || !self.can_punch {
            return None;
        }
        self.step = if self.window > 0.0 {
            (self.step + 1).min(t.max_step)
        } else {
            1
        };
        self.window = t.window;
        Some(self.step)
    }

    /// 战斗姿态切换（进或出）都整体清空。返回是否发生了切换
    pub fn sync_combat(&mut self, combat: bool) -> bool {
        if combat == self.prev_combat {
            return false;
        }
        self.prev_combat = combat;
        self.step = 0;
        self.window = 0.0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t() -> ComboTuning {
        ComboTuning::default()
    }

    #[test]
    fn three_strikes_then_clamp() {
        let mut c = ComboState::default();
        assert_eq!(c.strike(true, &t()), Some(1));
        c.tick(0.5);
        assert_eq!(c.strike(true, &t()), Some(2));
        c.tick(0.5);
        assert_eq!(c.strike(true, &t()), Some(3));
        c.tick(0.5);
        // 第四击窗口内封顶在 3
        assert_eq!(c.strike(true, &t()), Some(3));
    }

    #[test]
    fn no_combat_no_combo() {
        let mut c = ComboState::default();
        assert_eq!(c.strike(false, &t()), None);
        assert_eq!(c.step, 0);
        assert_eq!(c.window, 0.0);
    }

    #[test]
    fn window_expiry_resets_step() {
        let mut c = ComboState::default();
        c.strike(true, &t());
        c.strike(true, &t());
        assert_eq!(c.step, 2);
        c.tick(3.0);
        assert_eq!(c.step, 0);
        assert_eq!(c.window, 0.0);
        // 过窗后重新从 1 起
        assert_eq!(c.strike(true, &t()), Some(1));
    }

    #[test]
    fn step_implies_open_window() {
        let mut c = ComboState::default();
        c.strike(true, &t());
        for _ in 0..100 {
            c.tick(0.1);
            if c.step > 0 {
                assert!(c.window > 0.0);
            }
        }
        assert_eq!(c.step, 0);
    }

    #[test]
    fn combat_toggle_clears_combo() {
        let mut c = ComboState::default();
        assert!(c.sync_combat(true));
        c.strike(true, &t());
        c.strike(true, &t());
        // 退出战斗姿态
        assert!(c.sync_combat(false));
        assert_eq!(c.step, 0);
        assert_eq!(c.window, 0.0);
        // 同值不算切换
        assert!(!c.sync_combat(false));
    }

    #[test]
    fn cooldown_gate_blocks_strike() {
        let mut c = ComboState::default();
        c.can_punch = false;
        assert_eq!(c.strike(true, &t()), None);
    }
}
