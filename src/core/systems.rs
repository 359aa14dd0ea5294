//! Core domain: boot flow and camera setup.

use bevy::prelude::*;

use crate::core::state::GameState;

/// Leave `Boot` once content has been published on entering it.
pub(crate) fn transition_to_run(mut game_state: ResMut<NextState<GameState>>) {
    info!("Boot complete, entering run");
    game_state.set(GameState::Run);
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
