//! Abilities domain: input sampling, frame timers and slot publishing.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::abilities::{AbilityEquippedEvent, AbilityInput, AbilityKind, AbilityState, AbilityTuning};
use crate::movement::{MovementState, MovementTuning, Player};

const EQUIP_BINDINGS: [(KeyCode, AbilityKind); 4] = [
    (KeyCode::Digit1, AbilityKind::DoubleJump),
    (KeyCode::Digit2, AbilityKind::Dash),
    (KeyCode::Digit3, AbilityKind::WallJump),
    (KeyCode::Digit4, AbilityKind::Glide),
];

pub(crate) fn read_ability_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<AbilityInput>,
) {
    input.equip = EQUIP_BINDINGS
        .iter()
        .find(|(key, _)| keyboard.just_pressed(*key))
        .map(|(_, kind)| *kind);
    input.use_pressed = keyboard.just_pressed(KeyCode::KeyE) || keyboard.just_pressed(KeyCode::KeyJ);
    input.use_released =
        keyboard.just_released(KeyCode::KeyE) || keyboard.just_released(KeyCode::KeyJ);
}

pub(crate) fn apply_ability_input(
    input: Res<AbilityInput>,
    tuning: Res<AbilityTuning>,
    movement_tuning: Res<MovementTuning>,
    mut query: Query<(&mut AbilityState, &mut MovementState), With<Player>>,
) {
    for (mut abilities, mut movement) in &mut query {
        if let Some(kind) = input.equip {
            abilities.try_equip(kind, &mut movement);
        }
        if input.use_pressed {
            abilities.on_use_pressed(&mut movement, &movement_tuning, &tuning);
        }
        if input.use_released {
            abilities.on_use_released(&mut movement);
        }
    }
}

pub(crate) fn tick_ability_timers(
    time: Res<Time>,
    real_time: Res<Time<Real>>,
    mut query: Query<(&mut AbilityState, &mut MovementState), With<Player>>,
) {
    let dt = time.delta_secs();
    let real_dt = real_time.delta_secs();

    for (mut abilities, mut movement) in &mut query {
        abilities.tick_cooldowns(dt);
        abilities.tick_glide_hold(real_dt, &mut movement);
    }
}

pub(crate) fn publish_slot_changes(
    mut query: Query<(Entity, &mut AbilityState)>,
    mut events: MessageWriter<AbilityEquippedEvent>,
) {
    for (entity, mut abilities) in &mut query {
        for kind in abilities.drain_announcements() {
            events.write(AbilityEquippedEvent { entity, kind });
        }
    }
}

/// Tint the character by its equipped ability. Entities without a sprite are
/// skipped.
pub(crate) fn apply_ability_marker(
    mut events: MessageReader<AbilityEquippedEvent>,
    tuning: Res<AbilityTuning>,
    mut sprites: Query<&mut Sprite>,
) {
    for event in events.read() {
        if let Ok(mut sprite) = sprites.get_mut(event.entity) {
            sprite.color = tuning.palette.color_for(event.kind);
        }
    }
}
