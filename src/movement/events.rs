//! Movement domain: locomotion events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::JumpKind;

/// Event fired whenever the state machine performs a jump of any kind
#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
    pub kind: JumpKind,
}

impl Message for JumpedEvent {}
