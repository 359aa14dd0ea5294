//! Movement domain: the character's movement state machine and the systems
//! that feed it input and physics queries.

mod bootstrap;
mod components;
mod controller;
mod dev;
mod events;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    GameLayer, Ground, JumpKind, JumpRequest, MovementState, Player, StepReport, SurfaceContacts,
    SurfaceProbe, Wall, WallSide,
};
pub(crate) use controller::tick_countdown;
pub use events::JumpedEvent;
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    latch_input, probe_surfaces, read_input, step_movement, sync_body_shape,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<JumpedEvent>()
            .add_systems(OnEnter(GameState::Run), (spawn_test_room, spawn_player))
            .add_systems(Update, (read_input, latch_input).chain())
            .add_systems(
                FixedUpdate,
                (probe_surfaces, step_movement, sync_body_shape).chain(),
            );
    }
}
