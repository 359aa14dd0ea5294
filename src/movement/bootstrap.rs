//! Movement domain: player spawning with its controller, slot and physics body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::abilities::{AbilityKind, AbilityState, AbilityTuning};
use crate::movement::{GameLayer, MovementState, Player, SurfaceContacts};
use crate::respawn::{RespawnPoint, RespawnTuning};

/// The player only ever touches level geometry.
pub(crate) fn player_collision_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall])
}

/// Spawn the controlled character. Runs on entering `GameState::Run`.
pub(crate) fn spawn_player(
    mut commands: Commands,
    existing_player: Query<Entity, With<Player>>,
    respawn_tuning: Res<RespawnTuning>,
    ability_tuning: Res<AbilityTuning>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let spawn = respawn_tuning.spawn_position();
    info!("Spawning player at {}", spawn);

    commands.spawn((
        // Identity & controller state
        (
            Player,
            MovementState::default(),
            AbilityState::default(),
            SurfaceContacts::default(),
            RespawnPoint(spawn),
        ),
        // Rendering
        Sprite {
            color: ability_tuning.palette.color_for(AbilityKind::None),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(spawn.x, spawn.y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Gravity is integrated by the state machine
            Friction::new(0.0),
            player_collision_layers(),
        ),
    ));
}
