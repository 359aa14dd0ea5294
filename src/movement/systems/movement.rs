//! Movement domain: fixed-step systems driving the state machine.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::abilities::{AbilityState, AbilityTuning};
use crate::movement::{JumpedEvent, MovementState, MovementTuning, Player, SurfaceContacts};

pub(crate) fn step_movement(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    ability_tuning: Res<AbilityTuning>,
    mut jumped: MessageWriter<JumpedEvent>,
    mut query: Query<
        (
            Entity,
            &mut MovementState,
            &mut AbilityState,
            Option<&SurfaceContacts>,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut state, mut abilities, contacts, mut velocity) in &mut query {
        // Pick up what the solver did to the body last step; a dash pins it.
        if !state.dashing {
            state.velocity = velocity.0;
        }

        let report = state.physics_step(&contacts, abilities.equipped(), &tuning, dt);
        abilities.on_movement_report(&report, &mut state, &ability_tuning);

        if let Some(kind) = report.jumped {
            jumped.write(JumpedEvent { entity, kind });
        }

        velocity.0 = state.velocity;
    }
}

/// Squash the body while dashing and restore it afterwards.
pub(crate) fn sync_body_shape(
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut Transform), With<Player>>,
) {
    for (state, mut transform) in &mut query {
        let scale_y = state.body_scale(&tuning);
        if transform.scale.y != scale_y {
            transform.scale.y = scale_y;
        }
    }
}
