use bevy::prelude::*;

mod character;
mod combat;
mod core;
mod data;
mod input;
mod interface;
mod inventory;

use crate::character::CharacterPlugin;
use crate::combat::CombatPlugin;
use crate::core::{states, CorePlugin};
use crate::input::InputPlugin;
use crate::interface::debug_cli::DebugCliPlugin;
use crate::interface::InterfacePlugin;
use crate::inventory::InventoryPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                visible: false,
                ..default()
            }), // 不露窗口，全靠 CLI 驱动
            ..default()
        }))
        .add_plugins(CorePlugin)
        .add_plugins(data::DataPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(CharacterPlugin)
        .add_plugins(CombatPlugin)
        .add_plugins(InventoryPlugin)
        .add_plugins(InterfacePlugin)
        .add_plugins(DebugCliPlugin)
        .add_systems(Update, forward_log_event) // 简单打印
        .add_systems(Startup, |mut next: ResMut<NextState<states::AppState>>| {
            next.set(states::AppState::Loading);
        })
        .run();
}

fn forward_log_event(mut reader: EventReader<crate::core::events::LogEvent>) {
    for e in reader.read() {
        println!("> {}", e.0);
    }
}
