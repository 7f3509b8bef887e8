use crate::data::schema::PopupTuning;
use bevy::prelude::*;

/// 弹窗时间线阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupPhase {
    #[default]
    Idle,
    FadingIn,
    Holding,
    FadingOut,
}

/// 通知弹窗：同一时刻至多一条在播。
/// 只管文字和透明度时间线，画出来是表现层的事
#[derive(Resource, Debug, Default)]
pub struct Popup {
    pub message: String,
    /// [0,1]
    pub alpha: f32,
    pub phase: PopupPhase,
    hold_left: f32,
}

impl Popup {
    pub fn visible(&self) -> bool {
        self.phase != PopupPhase::Idle
    }

    /// 顶掉在播的时间线从头淡入。
    /// 透明度从被打断处继续，不许瞬间跳回 0
    pub fn show(&mut self, message: impl Into<String>, t: &PopupTuning) {
        self.message = message.into();
        self.phase = PopupPhase::FadingIn;
        self.hold_left = t.hold_time;
    }

    /// 每帧推进一步
    pub fn advance(&mut self, dt: f32, t: &PopupTuning) {
        match self.phase {
            PopupPhase::Idle => {}
            PopupPhase::FadingIn => {
                self.alpha += t.fade_in_rate * dt;
                if self.alpha >= 1.0 {
                    self.alpha = 1.0;
                    self.phase = PopupPhase::Holding;
                }
            }
            PopupPhase::Holding => {
                self.hold_left -= dt;
                if self.hold_left <= 0.0 {
                    self.phase = PopupPhase::FadingOut;
                }
            }
            PopupPhase::FadingOut => {
                self.alpha -= t.fade_out_rate * dt;
                if self.alpha <= 0.0 {
                    self.alpha = 0.0;
                    self.phase = PopupPhase::Idle;
                }
            }
        }
    }
}

/// 近旁可拾取时的按键提示
#[derive(Resource, Debug, Default)]
pub struct InteractionPrompt {
    pub visible: bool,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t() -> PopupTuning {
        PopupTuning::default()
    }

    #[test]
    fn full_timeline() {
        let mut p = Popup::default();
        assert!(!p.visible());

        p.show("AXE STORED", &t());
        assert_eq!(p.phase, PopupPhase::FadingIn);

        // 淡入 3.0/s → 0.4s 到满
        for _ in 0..4 {
            p.advance(0.1, &t());
        }
        assert_eq!(p.alpha, 1.0);
        assert_eq!(p.phase, PopupPhase::Holding);

        // 停留 2s
        for _ in 0..20 {
            assert_eq!(p.phase, PopupPhase::Holding);
            p.advance(0.1, &t());
        }
        assert_eq!(p.phase, PopupPhase::FadingOut);

        // 淡出 2.0/s → 0.5s 归零
        for _ in 0..5 {
            p.advance(0.1, &t());
        }
        assert_eq!(p.alpha, 0.0);
        assert_eq!(p.phase, PopupPhase::Idle);
        assert!(!p.visible());
    }

    #[test]
    fn show_restarts_without_alpha_snap() {
        let mut p = Popup::default();
        p.show("X", &t());
        p.advance(0.1, &t());
        let mid = p.alpha;
        assert!(mid > 0.0 && mid < 1.0);

        // 淡入中途被顶掉：换文字、回淡入段，但透明度不回零
        p.show("Y", &t());
        assert_eq!(p.message, "Y");
        assert_eq!(p.phase, PopupPhase::FadingIn);
        assert_eq!(p.alpha, mid);

        p.advance(0.1, &t());
        assert!(p.alpha > mid);
    }

    #[test]
    fn show_during_fadeout_reuses_remaining_alpha() {
        let mut p = Popup::default();
        p.show("X", &t());
        while p.phase != PopupPhase::FadingOut {
            p.advance(0.1, &t());
        }
        p.advance(0.1, &t());
        let mid = p.alpha;
        assert!(mid < 1.0);

        p.show("Y", &t());
        assert_eq!(p.alpha, mid);
        assert_eq!(p.phase, PopupPhase::FadingIn);
        // 重新爬满后还要完整停留一轮
        while p.phase != PopupPhase::Holding {
            p.advance(0.1, &t());
        }
        let mut frames = 0;
        while p.phase == PopupPhase::Holding {
            p.advance(0.1, &t());
            frames += 1;
        }
        assert_eq!(frames, 20);
    }
}
