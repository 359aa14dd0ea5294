//! Respawn domain: checkpoints, fall death and the full-state reset hook.

mod components;
mod events;
mod resources;
mod systems;

pub use components::{Checkpoint, RespawnPoint};
pub use events::{PlayerRespawnedEvent, RespawnRequest};
pub use resources::RespawnTuning;
pub use systems::{checkpoint_reached, reset_character};

use bevy::prelude::*;

use crate::respawn::systems::{activate_checkpoints, detect_fall_death, handle_respawn_requests};

pub struct RespawnPlugin;

impl Plugin for RespawnPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RespawnTuning>()
            .add_message::<RespawnRequest>()
            .add_message::<PlayerRespawnedEvent>()
            .add_systems(
                Update,
                (
                    activate_checkpoints,
                    detect_fall_death,
                    handle_respawn_requests,
                )
                    .chain(),
            );
    }
}
