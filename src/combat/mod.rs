pub mod components;
mod systems;

use crate::core::{states::AppState, GameSet};
use bevy::prelude::*;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            systems::drive_combo
                .in_set(GameSet::Combat)
                .run_if(in_state(AppState::InGame)),
        );
    }
}
