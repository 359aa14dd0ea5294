//! Respawn domain: checkpoint activation, fall detection and the reset hook.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::abilities::AbilityState;
use crate::movement::{MovementState, Player};
use crate::respawn::{Checkpoint, PlayerRespawnedEvent, RespawnPoint, RespawnRequest, RespawnTuning};

/// Return a character to the "grounded, no ability, zero cooldowns"
/// baseline. A running dash or glide hold is cancelled with its cleanup.
pub fn reset_character(movement: &mut MovementState, abilities: &mut AbilityState) {
    abilities.reset(movement);
    movement.reset_to_baseline();
}

pub fn checkpoint_reached(player: Vec2, checkpoint: Vec2, radius: f32) -> bool {
    player.distance_squared(checkpoint) <= radius * radius
}

pub(crate) fn activate_checkpoints(
    tuning: Res<RespawnTuning>,
    mut players: Query<(&Transform, &mut RespawnPoint), With<Player>>,
    mut checkpoints: Query<(&Transform, &mut Checkpoint)>,
) {
    for (player_transform, mut respawn_point) in &mut players {
        let player_pos = player_transform.translation.truncate();

        for (checkpoint_transform, mut checkpoint) in &mut checkpoints {
            if checkpoint.activated {
                continue;
            }

            let checkpoint_pos = checkpoint_transform.translation.truncate();
            if checkpoint_reached(player_pos, checkpoint_pos, tuning.checkpoint_radius) {
                checkpoint.activated = true;
                respawn_point.0 = checkpoint_pos;
                info!("Checkpoint reached at {}", checkpoint_pos);
            }
        }
    }
}

pub(crate) fn detect_fall_death(
    tuning: Res<RespawnTuning>,
    players: Query<(Entity, &Transform), With<Player>>,
    mut requests: MessageWriter<RespawnRequest>,
) {
    for (entity, transform) in &players {
        if transform.translation.y < tuning.fall_death_y {
            requests.write(RespawnRequest { entity });
        }
    }
}

pub(crate) fn handle_respawn_requests(
    mut requests: MessageReader<RespawnRequest>,
    mut respawned: MessageWriter<PlayerRespawnedEvent>,
    mut players: Query<
        (
            &RespawnPoint,
            &mut MovementState,
            &mut AbilityState,
            &mut Transform,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for request in requests.read() {
        let Ok((respawn_point, mut movement, mut abilities, mut transform, mut velocity)) =
            players.get_mut(request.entity)
        else {
            continue;
        };

        reset_character(&mut movement, &mut abilities);
        transform.translation.x = respawn_point.0.x;
        transform.translation.y = respawn_point.0.y;
        transform.scale.y = 1.0;
        velocity.0 = Vec2::ZERO;

        info!("Respawned at {}", respawn_point.0);
        respawned.write(PlayerRespawnedEvent {
            entity: request.entity,
            position: respawn_point.0,
        });
    }
}
