//! Abilities domain: the single equip slot, cooldowns and use actions that
//! reconfigure the movement state machine.

mod controller;
mod events;
mod resources;
mod systems;
mod types;

pub use events::AbilityEquippedEvent;
pub use resources::{AbilityInput, AbilityTuning};
pub use types::{AbilityKind, AbilityState, Cooldowns, GlideHold};

use bevy::prelude::*;

use crate::abilities::systems::{
    apply_ability_input, apply_ability_marker, publish_slot_changes, read_ability_input,
    tick_ability_timers,
};

pub struct AbilitiesPlugin;

impl Plugin for AbilitiesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AbilityTuning>()
            .init_resource::<AbilityInput>()
            .add_message::<AbilityEquippedEvent>()
            .add_systems(
                Update,
                (
                    read_ability_input,
                    apply_ability_input,
                    tick_ability_timers,
                    publish_slot_changes,
                    apply_ability_marker,
                )
                    .chain(),
            );
    }
}
