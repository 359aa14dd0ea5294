//! Respawn domain: reset requests and notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Ask for a full character reset at its respawn point
#[derive(Debug)]
pub struct RespawnRequest {
    pub entity: Entity,
}

impl Message for RespawnRequest {}

/// Event fired after a character has been reset and moved
#[derive(Debug)]
pub struct PlayerRespawnedEvent {
    pub entity: Entity,
    pub position: Vec2,
}

impl Message for PlayerRespawnedEvent {}
