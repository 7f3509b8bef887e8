pub mod components;
pub mod events;
mod systems;

use crate::core::{states::AppState, GameSet};
use bevy::prelude::*;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<components::InputSnapshot>()
            .add_event::<events::InjectInput>()
            .add_systems(
                Update,
                systems::read_input
                    .in_set(GameSet::Input)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
