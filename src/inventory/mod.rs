pub mod components;
mod systems;

use crate::core::{states::AppState, GameSet};
use bevy::prelude::*;
use systems::*;

pub struct InventoryPlugin;
impl Plugin for InventoryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), spawn_items)
            .add_systems(
                Update,
                (refresh_proximity, handle_equip, handle_store_toggle)
                    .chain()
                    .in_set(GameSet::Inventory)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
