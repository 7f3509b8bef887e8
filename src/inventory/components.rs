use bevy::prelude::*;
use std::collections::VecDeque;

/// 可拾取物品（世界里的实体）
#[derive(Component, Debug, Clone)]
pub struct Pickup {
    pub id: String,
    pub name: String,
}

/// 物品刚体/碰撞体替身。核心只向它下开关命令，
/// 真正的物理表示在协作方手里
#[derive(Component, Debug, Clone)]
pub struct ItemPhysics {
    pub kinematic: bool,
    pub gravity: bool,
    pub collider: bool,
}

impl Default for ItemPhysics {
    fn default() -> Self {
        Self {
            kinematic: false,
            gravity: true,
            collider: true,
        }
    }
}

/// 已收纳的物品（原 SetActive(false) 的对应物）
#[derive(Component)]
pub struct Stowed;

/// 收纳切换的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StowAction {
    Stow(Entity),
    Retrieve(Entity),
    Nothing,
}

/// 单手装备状态：手上至多一件，其余按先进先出排队
#[derive(Component, Debug, Default)]
pub struct Gear {
    /// 近旁物品。每帧由邻近查询重算，绝不跨帧缓存
    pub nearby: Option<Entity>,
    pub equipped: Option<Entity>,
    pub backlog: VecDeque<Entity>,
}

impl Gear {
    /// 拾取前提：近旁有货且手是空的（手上有货必须先收纳）
    pub fn can_equip(&self) -> bool {
        self.nearby.is_some() && self.equipped.is_none()
    }

    /// K 键的状态转移：手上有→收纳到队尾；手空且队非空→取队首；
    /// 两头都空是定义好的无操作
    pub fn toggle(&mut self) -> StowAction {
        if let Some(held) = self.equipped.take() {
            self.backlog.push_back(held);
            StowAction::Stow(held)
        } else if let Some(front) = self.backlog.pop_front() {
            self.equipped = Some(front);
            StowAction::Retrieve(front)
        } else {
            StowAction::Nothing
        }
    }

    /// 剔除被外部销毁的引用，不报错不崩溃
    pub fn prune(&mut self, alive: impl Fn(Entity) -> bool) {
        if let Some(e) = self.equipped {
            if !alive(e) {
                self.equipped = None;
            }
        }
        if let Some(e) = self.nearby {
            if !alive(e) {
                self.nearby = None;
            }
        }
        self.backlog.retain(|e| alive(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(i: u32) -> Entity {
        Entity::from_raw(i)
    }

    #[test]
    fn backlog_is_fifo() {
        let mut gear = Gear::default();
        gear.equipped = Some(e(1));
        assert_eq!(gear.toggle(), StowAction::Stow(e(1)));
        gear.equipped = Some(e(2));
        assert_eq!(gear.toggle(), StowAction::Stow(e(2)));

        // 先存的先取
        assert_eq!(gear.toggle(), StowAction::Retrieve(e(1)));
        assert_eq!(gear.equipped, Some(e(1)));
        gear.equipped = None;
        assert_eq!(gear.toggle(), StowAction::Retrieve(e(2)));
    }

    #[test]
    fn toggle_with_nothing_is_noop() {
        let mut gear = Gear::default();
        assert_eq!(gear.toggle(), StowAction::Nothing);
        assert_eq!(gear.equipped, None);
        assert!(gear.backlog.is_empty());
    }

    #[test]
    fn equipped_never_sits_in_backlog() {
        let mut gear = Gear::default();
        gear.equipped = Some(e(1));
        gear.toggle();
        gear.toggle();
        // e(1) 回到手上，不得同时留在队里
        assert_eq!(gear.equipped, Some(e(1)));
        assert!(!gear.backlog.contains(&e(1)));
    }

    #[test]
    fn equip_blocked_while_holding() {
        let mut gear = Gear::default();
        gear.nearby = Some(e(2));
        assert!(gear.can_equip());
        gear.equipped = Some(e(1));
        assert!(!gear.can_equip());
    }

    #[test]
    fn prune_drops_dead_references() {
        let mut gear = Gear {
            nearby: Some(e(1)),
            equipped: Some(e(2)),
            backlog: VecDeque::from([e(3), e(4)]),
        };
        gear.prune(|en| en == e(3));
        assert_eq!(gear.nearby, None);
        assert_eq!(gear.equipped, None);
        assert_eq!(gear.backlog, VecDeque::from([e(3)]));
    }
}
