//! Abilities domain: slot change notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::abilities::AbilityKind;

/// Event fired on every successful equip or unequip, carrying the new slot
/// content (`AbilityKind::None` after an unequip).
#[derive(Debug)]
pub struct AbilityEquippedEvent {
    pub entity: Entity,
    pub kind: AbilityKind,
}

impl Message for AbilityEquippedEvent {}
