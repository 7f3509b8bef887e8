use super::components::*;
use crate::character::components::{HandAnchor, Player};
use crate::core::events::LogEvent;
use crate::data::schema::GearTuning;
use crate::data::{schema::ItemList, ActiveTuning, ItemAssets};
use crate::input::components::InputSnapshot;
use crate::interface::events::ShowPopup;
use bevy::prelude::*;

/// 按物品表往世界里生成拾取物
pub fn spawn_items(
    mut commands: Commands,
    item_assets: Res<ItemAssets>,
    lists: Res<Assets<ItemList>>,
) {
    let Some(list) = item_assets.items.as_ref().and_then(|h| lists.get(h)) else {
        warn!("物品表尚未载入，世界里不生成拾取物");
        return;
    };
    for entry in &list.items {
        commands.spawn((
            Pickup {
                id: entry.id.clone(),
                name: entry.name.clone(),
            },
            ItemPhysics::default(),
            Transform::from_translation(Vec3::from_array(entry.pos)),
        ));
    }
    info!("生成拾取物 {} 件", list.items.len());
}

/// 每帧重算近旁物品：取范围内最近、碰撞体还开着的那件
pub fn refresh_proximity(
    tuning: Res<ActiveTuning>,
    mut player: Query<(&Transform, &mut Gear), With<Player>>,
    items: Query<(Entity, &Transform, &ItemPhysics), (With<Pickup>, Without<Stowed>, Without<Player>)>,
) {
    let Ok((pt, mut gear)) = player.single_mut() else {
        return;
    };
    let range = tuning.0.gear.pickup_range;
    let mut best: Option<(Entity, f32)> = None;
    for (entity, tf, phys) in &items {
        if !phys.collider {
            continue;
        }
        let d = tf.translation.distance_squared(pt.translation);
        if d <= range * range && best.is_none_or(|(_, bd)| d < bd) {
            best = Some((entity, d));
        }
    }
    gear.nearby = best.map(|(e, _)| e);
}

/// 共用的上手流程：关物理、挂到手点、摆好固定姿态
fn attach_to_hand(
    commands: &mut Commands,
    item: Entity,
    hand: Option<Entity>,
    phys: &mut ItemPhysics,
    tf: &mut Transform,
    t: &GearTuning,
) {
    phys.kinematic = true;
    phys.gravity = false;
    phys.collider = false;
    match hand {
        Some(hand) => {
            commands.entity(item).insert(ChildOf(hand));
        }
        None => warn_once!("没有 HandAnchor，装备只改状态不挂节点"),
    }
    *tf = Transform::from_translation(Vec3::from_array(t.hand_offset))
        .with_rotation(Quat::from_rotation_z(t.hand_roll_deg.to_radians()));
}

/// G 键拾取。手上有货时不自动收纳，明确拒绝
pub fn handle_equip(
    snap: Res<InputSnapshot>,
    tuning: Res<ActiveTuning>,
    mut commands: Commands,
    mut ev_popup: EventWriter<ShowPopup>,
    mut ev_log: EventWriter<LogEvent>,
    mut player: Query<&mut Gear, With<Player>>,
    hand: Query<Entity, With<HandAnchor>>,
    mut items: Query<(&Pickup, &mut ItemPhysics, &mut Transform), Without<Player>>,
) {
    if !snap.equip {
        return;
    }
    let Ok(mut gear) = player.single_mut() else {
        return;
    };
    let Some(target) = gear.nearby else {
        return;
    };
    if gear.equipped.is_some() {
        ev_log.write(LogEvent("手上已有装备，先按 K 收纳".into()));
        return;
    }
    // 物品可能刚被外部销毁：拿不到就当本帧没看见
    let Ok((pickup, mut phys, mut tf)) = items.get_mut(target) else {
        return;
    };
    gear.equipped = Some(target);
    let name = pickup.name.to_uppercase();
    attach_to_hand(
        &mut commands,
        target,
        hand.single().ok(),
        &mut phys,
        &mut tf,
        &tuning.0.gear,
    );
    ev_popup.write(ShowPopup(format!("{name} ACQUIRED")));
}

/// K 键收纳/取出。队列先进先出
pub fn handle_store_toggle(
    snap: Res<InputSnapshot>,
    tuning: Res<ActiveTuning>,
    mut commands: Commands,
    mut ev_popup: EventWriter<ShowPopup>,
    mut player: Query<&mut Gear, With<Player>>,
    hand: Query<Entity, With<HandAnchor>>,
    mut items: Query<(&Pickup, &mut ItemPhysics, &mut Transform), Without<Player>>,
) {
    if !snap.store {
        return;
    }
    let Ok(mut gear) = player.single_mut() else {
        return;
    };
    // 先剔掉被外部销毁的引用，剩下的才参与转移
    gear.prune(|e| items.contains(e));

    match gear.toggle() {
        StowAction::Stow(item) => {
            commands.entity(item).remove::<ChildOf>().insert(Stowed);
            if let Ok((pickup, mut phys, _)) = items.get_mut(item) {
                phys.kinematic = true;
                phys.gravity = false;
                phys.collider = false;
                ev_popup.write(ShowPopup(format!("{} STORED", pickup.name.to_uppercase())));
            }
        }
        StowAction::Retrieve(item) => {
            commands.entity(item).remove::<Stowed>();
            let Ok((pickup, mut phys, mut tf)) = items.get_mut(item) else {
                gear.equipped = None;
                return;
            };
            let name = pickup.name.to_uppercase();
            attach_to_hand(
                &mut commands,
                item,
                hand.single().ok(),
                &mut phys,
                &mut tf,
                &tuning.0.gear,
            );
            ev_popup.write(ShowPopup(format!("{name} EQUIPPED")));
        }
        StowAction::Nothing => {}
    }
}
