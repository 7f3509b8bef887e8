use super::{components::*, events::ShowPopup};
use crate::character::components::Player;
use crate::data::ActiveTuning;
use crate::inventory::components::Gear;
use bevy::prelude::*;

/// 收本帧的弹窗请求。后到的顶掉先到的
pub fn show_popups(
    mut ev_show: EventReader<ShowPopup>,
    tuning: Res<ActiveTuning>,
    mut popup: ResMut<Popup>,
) {
    for ShowPopup(message) in ev_show.read() {
        popup.show(message.clone(), &tuning.0.popup);
    }
}

/// 推进弹窗时间线
pub fn drive_popup(time: Res<Time>, tuning: Res<ActiveTuning>, mut popup: ResMut<Popup>) {
    popup.advance(time.delta_secs(), &tuning.0.popup);
}

/// 交互提示跟着近旁物品走
pub fn update_prompt(
    player: Query<&Gear, With<Player>>,
    mut prompt: ResMut<InteractionPrompt>,
) {
    let nearby = player.single().map(|g| g.nearby.is_some()).unwrap_or(false);
    if nearby {
        prompt.visible = true;
        prompt.text = "Press G to Equip\nPress K to Store".into();
    } else {
        prompt.visible = false;
        prompt.text.clear();
    }
}
