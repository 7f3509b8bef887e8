pub mod components;
pub mod debug_cli;
pub mod events;
mod systems;

use crate::core::{states::AppState, GameSet};
use bevy::prelude::*;

pub struct InterfacePlugin;
impl Plugin for InterfacePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<components::Popup>()
            .init_resource::<components::InteractionPrompt>()
            .add_event::<events::ShowPopup>()
            .add_systems(
                Update,
                (
                    systems::update_prompt,
                    systems::show_popups,
                    systems::drive_popup,
                )
                    .chain()
                    .in_set(GameSet::Interface)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
