//! Movement domain: tests for the per-tick state machine.

use avian2d::prelude::LayerMask;
use bevy::prelude::Vec2;

use super::bootstrap::player_collision_layers;
use super::{
    GameLayer, JumpKind, JumpRequest, MovementInput, MovementState, MovementTuning,
    SurfaceContacts, SurfaceProbe, WallSide, tick_countdown,
};
use crate::abilities::AbilityKind;

const DT: f32 = 1.0 / 60.0;

const GROUND: SurfaceContacts = SurfaceContacts {
    grounded: true,
    wall_left: false,
    wall_right: false,
};

const AIR: SurfaceContacts = SurfaceContacts {
    grounded: false,
    wall_left: false,
    wall_right: false,
};

const LEFT_WALL: SurfaceContacts = SurfaceContacts {
    grounded: false,
    wall_left: true,
    wall_right: false,
};

fn grounded_state(tuning: &MovementTuning) -> MovementState {
    let mut state = MovementState::default();
    state.physics_step(&GROUND, AbilityKind::None, tuning, DT);
    state
}

fn airborne_state(tuning: &MovementTuning, velocity_y: f32) -> MovementState {
    let mut state = MovementState::default();
    state.physics_step(&AIR, AbilityKind::None, tuning, DT);
    state.velocity.y = velocity_y;
    state
}

fn press_jump(state: &mut MovementState) {
    state.latch_input(&MovementInput {
        axis_x: 0.0,
        jump_just_pressed: true,
        jump_held: true,
    });
}

// -----------------------------------------------------------------------------
// Surface probe tests
// -----------------------------------------------------------------------------

#[test]
fn test_single_wall_requires_exactly_one_side() {
    assert_eq!(LEFT_WALL.single_wall(), Some(WallSide::Left));
    let both = SurfaceContacts {
        wall_left: true,
        wall_right: true,
        ..AIR
    };
    assert_eq!(both.single_wall(), None);
    assert_eq!(AIR.single_wall(), None);
}

#[test]
fn test_missing_probe_reads_as_airborne() {
    let tuning = MovementTuning::default();
    let mut state = MovementState {
        grounded: true,
        ..Default::default()
    };

    let missing: Option<&SurfaceContacts> = None;
    assert!(!missing.is_grounded());
    assert!(!missing.is_touching_any_wall());

    state.physics_step(&missing, AbilityKind::None, &tuning, DT);
    assert!(!state.grounded);
}

// -----------------------------------------------------------------------------
// Landing and gravity tests
// -----------------------------------------------------------------------------

#[test]
fn test_landing_resets_jumps_and_gravity() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -300.0);
    state.jumps_remaining = 0;
    state.gravity_scale = 1.4;

    let report = state.physics_step(&GROUND, AbilityKind::None, &tuning, DT);

    assert!(report.landed);
    assert!(state.grounded);
    assert_eq!(state.jumps_remaining, 1);
    assert_eq!(state.gravity_scale, 1.0);
    assert_eq!(state.velocity.y, 0.0);
}

#[test]
fn test_staying_grounded_is_not_a_landing() {
    let tuning = MovementTuning::default();
    let mut state = grounded_state(&tuning);
    let report = state.physics_step(&GROUND, AbilityKind::None, &tuning, DT);
    assert!(!report.landed);
}

#[test]
fn test_fall_gravity_builds_progressively() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -10.0);

    let mut previous = state.gravity_scale;
    for _ in 0..30 {
        state.physics_step(&AIR, AbilityKind::None, &tuning, DT);
        assert!(state.gravity_scale > previous);
        assert!(state.gravity_scale <= tuning.fall_gravity_multiplier);
        previous = state.gravity_scale;
    }
}

#[test]
fn test_rising_uses_normal_gravity() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, 500.0);
    state.gravity_scale = 1.3;

    state.physics_step(&AIR, AbilityKind::None, &tuning, DT);

    assert_eq!(state.gravity_scale, 1.0);
    assert!(state.velocity.y < 500.0);
}

// -----------------------------------------------------------------------------
// Horizontal movement tests
// -----------------------------------------------------------------------------

#[test]
fn test_ground_control_reaches_target_speed() {
    let tuning = MovementTuning::default();
    let mut state = grounded_state(&tuning);
    state.latch_input(&MovementInput {
        axis_x: 1.0,
        ..Default::default()
    });

    state.physics_step(&GROUND, AbilityKind::None, &tuning, DT);

    assert_eq!(state.velocity.x, tuning.move_speed);
    assert_eq!(state.last_horizontal_direction, 1.0);
}

#[test]
fn test_air_control_is_reduced() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, 0.0);
    state.latch_input(&MovementInput {
        axis_x: -1.0,
        ..Default::default()
    });

    state.physics_step(&AIR, AbilityKind::None, &tuning, DT);

    let expected = -tuning.move_speed * tuning.air_smoothing;
    assert!((state.velocity.x - expected).abs() < 0.001);
    assert_eq!(state.last_horizontal_direction, -1.0);
}

#[test]
fn test_neutral_input_keeps_last_direction() {
    let mut state = MovementState::default();
    state.latch_input(&MovementInput {
        axis_x: -1.0,
        ..Default::default()
    });
    state.latch_input(&MovementInput::default());
    assert_eq!(state.last_horizontal_direction, -1.0);
}

// -----------------------------------------------------------------------------
// Jump resolution tests
// -----------------------------------------------------------------------------

#[test]
fn test_jump_request_waits_for_physics_tick() {
    let tuning = MovementTuning::default();
    let mut state = grounded_state(&tuning);

    press_jump(&mut state);
    assert_eq!(state.jump_request, Some(JumpRequest::Normal));
    assert_eq!(state.velocity.y, 0.0);

    let report = state.physics_step(&GROUND, AbilityKind::None, &tuning, DT);
    assert_eq!(report.jumped, Some(JumpKind::Ground));
    assert_eq!(state.velocity.y, tuning.jump_velocity);
    assert!(state.jump_request.is_none());
}

#[test]
fn test_ground_jump_without_double_jump_leaves_no_air_jumps() {
    let tuning = MovementTuning::default();
    let mut state = grounded_state(&tuning);

    press_jump(&mut state);
    state.physics_step(&GROUND, AbilityKind::None, &tuning, DT);

    assert_eq!(state.jumps_remaining, 0);
}

#[test]
fn test_ground_jump_with_double_jump_keeps_one_air_jump() {
    let tuning = MovementTuning::default();
    let mut state = grounded_state(&tuning);

    press_jump(&mut state);
    state.physics_step(&GROUND, AbilityKind::DoubleJump, &tuning, DT);

    assert_eq!(state.jumps_remaining, 1);
}

#[test]
fn test_double_jump_consumes_air_jump() {
    let tuning = MovementTuning::default();
    let mut state = grounded_state(&tuning);

    press_jump(&mut state);
    state.physics_step(&GROUND, AbilityKind::DoubleJump, &tuning, DT);
    for _ in 0..10 {
        state.physics_step(&AIR, AbilityKind::DoubleJump, &tuning, DT);
    }

    press_jump(&mut state);
    let report = state.physics_step(&AIR, AbilityKind::DoubleJump, &tuning, DT);

    assert_eq!(report.jumped, Some(JumpKind::Double));
    assert!(report.double_jump_consumed);
    assert_eq!(state.jumps_remaining, 0);
    assert!(state.velocity.y > 0.0);
}

#[test]
fn test_air_jump_rejected_without_double_jump() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -50.0);
    state.jumps_remaining = 1;

    press_jump(&mut state);
    let report = state.physics_step(&AIR, AbilityKind::None, &tuning, DT);

    assert_eq!(report.jumped, None);
    assert!(state.velocity.y < 0.0);
    assert_eq!(state.jumps_remaining, 1);
}

#[test]
fn test_jump_against_wall_without_grip_is_blocked() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -50.0);
    state.jumps_remaining = 1;

    press_jump(&mut state);
    let report = state.physics_step(&LEFT_WALL, AbilityKind::DoubleJump, &tuning, DT);

    assert_eq!(report.jumped, None);
    assert_eq!(state.jumps_remaining, 1);
    assert!(state.velocity.y < 0.0);
}

#[test]
fn test_wall_jump_launches_away_and_locks_movement() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -50.0);
    state.enable_wall_grip(true);
    state.jumps_remaining = 1;

    press_jump(&mut state);
    let report = state.physics_step(&LEFT_WALL, AbilityKind::WallJump, &tuning, DT);

    assert_eq!(report.jumped, Some(JumpKind::Wall));
    assert_eq!(state.velocity, tuning.wall_jump_velocity(1.0));
    assert!(state.velocity.x > 0.0);
    assert!(!state.wall_grip_enabled);
    assert!(!state.wall_sliding);
    assert_eq!(state.jumps_remaining, 0);
    assert_eq!(state.movement_lock_timer, tuning.movement_lock_time);
}

#[test]
fn test_movement_lock_ignores_horizontal_input() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -50.0);
    state.enable_wall_grip(true);

    press_jump(&mut state);
    state.physics_step(&LEFT_WALL, AbilityKind::WallJump, &tuning, DT);
    let launch_vx = state.velocity.x;

    // Steer back toward the wall during the lock
    state.latch_input(&MovementInput {
        axis_x: -1.0,
        ..Default::default()
    });

    let lock_ticks = (tuning.movement_lock_time / DT).round() as usize;
    for tick in 1..lock_ticks {
        state.physics_step(&AIR, AbilityKind::None, &tuning, DT);
        assert_eq!(state.velocity.x, launch_vx, "input leaked at tick {tick}");
    }

    state.physics_step(&AIR, AbilityKind::None, &tuning, DT);
    assert_eq!(state.movement_lock_timer, 0.0);
    assert!(state.velocity.x < launch_vx);
}

#[test]
fn test_wall_jump_needs_a_single_wall_side() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -50.0);
    state.enable_wall_grip(true);
    let both = SurfaceContacts {
        wall_left: true,
        wall_right: true,
        ..AIR
    };

    press_jump(&mut state);
    let report = state.physics_step(&both, AbilityKind::WallJump, &tuning, DT);

    assert_ne!(report.jumped, Some(JumpKind::Wall));
    assert!(state.wall_grip_enabled);
}

#[test]
fn test_forced_air_jump_ignores_jump_count() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -200.0);
    state.jumps_remaining = 0;

    state.request_forced_air_jump();
    let report = state.physics_step(&AIR, AbilityKind::None, &tuning, DT);

    assert_eq!(report.jumped, Some(JumpKind::ForcedAir));
    assert_eq!(state.velocity.y, tuning.jump_velocity);
}

#[test]
fn test_forced_air_jump_rejected_on_ground() {
    let tuning = MovementTuning::default();
    let mut state = grounded_state(&tuning);

    state.request_forced_air_jump();
    let report = state.physics_step(&GROUND, AbilityKind::None, &tuning, DT);

    assert_eq!(report.jumped, None);
    assert_eq!(state.velocity.y, 0.0);
}

// -----------------------------------------------------------------------------
// Wall slide tests
// -----------------------------------------------------------------------------

#[test]
fn test_wall_slide_clamps_fall_speed() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -800.0);
    state.enable_wall_grip(true);

    state.physics_step(&LEFT_WALL, AbilityKind::WallJump, &tuning, DT);

    assert!(state.wall_sliding);
    assert_eq!(state.velocity.y, -tuning.wall_slide_speed);
}

#[test]
fn test_no_wall_slide_without_grip() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -800.0);

    state.physics_step(&LEFT_WALL, AbilityKind::None, &tuning, DT);

    assert!(!state.wall_sliding);
    assert!(state.velocity.y < -800.0);
}

#[test]
fn test_no_wall_slide_while_rising() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, 400.0);
    state.enable_wall_grip(true);

    state.physics_step(&LEFT_WALL, AbilityKind::WallJump, &tuning, DT);

    assert!(!state.wall_sliding);
}

#[test]
fn test_disabling_grip_stops_wall_slide() {
    let mut state = MovementState {
        wall_grip_enabled: true,
        wall_sliding: true,
        ..Default::default()
    };
    state.enable_wall_grip(false);
    assert!(!state.wall_sliding);
}

// -----------------------------------------------------------------------------
// Glide tests
// -----------------------------------------------------------------------------

#[test]
fn test_forced_glide_clamps_fall_speed() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -600.0);
    state.set_forced_glide(true);

    state.physics_step(&AIR, AbilityKind::Glide, &tuning, DT);

    assert!(state.gliding);
    assert_eq!(state.gravity_scale, tuning.glide_gravity_scale);
    assert_eq!(state.velocity.y, -tuning.glide_max_fall_speed);
}

#[test]
fn test_holding_jump_glides_only_with_glide_equipped() {
    let tuning = MovementTuning::default();
    let held = MovementInput {
        jump_held: true,
        ..Default::default()
    };

    let mut without = airborne_state(&tuning, -300.0);
    without.latch_input(&held);
    without.physics_step(&AIR, AbilityKind::None, &tuning, DT);
    assert!(!without.gliding);

    let mut with = airborne_state(&tuning, -300.0);
    with.latch_input(&held);
    with.physics_step(&AIR, AbilityKind::Glide, &tuning, DT);
    assert!(with.gliding);
}

#[test]
fn test_glide_expires_once_after_max_time() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -100.0);
    state.set_forced_glide(true);

    let ticks = (tuning.max_glide_time / DT).ceil() as usize + 5;
    let mut expirations = 0;
    for _ in 0..ticks {
        let report = state.physics_step(&AIR, AbilityKind::Glide, &tuning, DT);
        if report.glide_expired {
            expirations += 1;
        }
    }

    assert_eq!(expirations, 1);
    assert!(!state.gliding);
    assert!(!state.forced_glide);
}

#[test]
fn test_glide_timer_resets_when_not_gliding() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -100.0);
    state.set_forced_glide(true);
    state.physics_step(&AIR, AbilityKind::Glide, &tuning, DT);
    assert!(state.glide_timer > 0.0);

    state.set_forced_glide(false);
    state.physics_step(&AIR, AbilityKind::Glide, &tuning, DT);
    assert_eq!(state.glide_timer, 0.0);
}

// -----------------------------------------------------------------------------
// Dash tests
// -----------------------------------------------------------------------------

#[test]
fn test_dash_pins_velocity_until_timer_runs_out() {
    let tuning = MovementTuning::default();
    let mut state = grounded_state(&tuning);
    state.latch_input(&MovementInput {
        axis_x: -1.0,
        ..Default::default()
    });
    state.latch_input(&MovementInput::default());

    assert!(state.start_dash(tuning.dash_speed, tuning.dash_duration));
    assert_eq!(state.velocity.x, -tuning.dash_speed);
    assert_eq!(state.body_scale(&tuning), tuning.dash_shape_scale);

    let ticks = (tuning.dash_duration / DT).round() as usize;
    for tick in 1..=ticks {
        let report = state.physics_step(&GROUND, AbilityKind::None, &tuning, DT);
        if tick < ticks {
            assert!(state.dashing, "dash ended early at tick {tick}");
            assert!(!report.dash_ended);
            assert_eq!(state.velocity.x, -tuning.dash_speed);
        } else {
            assert!(report.dash_ended, "dash still running after {ticks} ticks");
        }
    }

    assert!(!state.dashing);
    assert_eq!(state.dash_timer, 0.0);
    assert_eq!(state.body_scale(&tuning), 1.0);

    state.physics_step(&GROUND, AbilityKind::None, &tuning, DT);
    assert_eq!(state.velocity.x, 0.0);
}

#[test]
fn test_second_dash_is_refused_while_dashing() {
    let tuning = MovementTuning::default();
    let mut state = grounded_state(&tuning);
    assert!(state.start_dash(tuning.dash_speed, tuning.dash_duration));
    assert!(!state.start_dash(tuning.dash_speed * 2.0, tuning.dash_duration));
    assert_eq!(state.velocity.x, tuning.dash_speed);
}

#[test]
fn test_jump_press_ignored_while_dashing() {
    let tuning = MovementTuning::default();
    let mut state = grounded_state(&tuning);
    state.start_dash(tuning.dash_speed, tuning.dash_duration);

    press_jump(&mut state);

    assert!(state.jump_request.is_none());
}

#[test]
fn test_dash_takes_priority_over_wall_slide() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -400.0);
    state.enable_wall_grip(true);
    state.start_dash(tuning.dash_speed, tuning.dash_duration);

    state.physics_step(&LEFT_WALL, AbilityKind::WallJump, &tuning, DT);

    assert!(state.dashing);
    assert!(!state.wall_sliding);
    assert_eq!(state.velocity, Vec2::new(tuning.dash_speed, -400.0));
}

#[test]
fn test_countdown_finishes_on_the_whole_tick() {
    let mut timer = 0.15;
    let mut ticks = 0;
    while !tick_countdown(&mut timer, DT) {
        ticks += 1;
        assert!(ticks < 20);
    }
    assert_eq!(ticks + 1, 9);
    assert_eq!(timer, 0.0);
}

// -----------------------------------------------------------------------------
// Capability hooks and baseline
// -----------------------------------------------------------------------------

#[test]
fn test_grant_air_jump_only_when_airborne() {
    let tuning = MovementTuning::default();

    let mut grounded = grounded_state(&tuning);
    grounded.clear_air_jumps();
    grounded.grant_air_jump();
    assert_eq!(grounded.jumps_remaining, 0);

    let mut airborne = airborne_state(&tuning, 0.0);
    airborne.clear_air_jumps();
    airborne.grant_air_jump();
    assert_eq!(airborne.jumps_remaining, 1);
}

#[test]
fn test_reset_to_baseline() {
    let tuning = MovementTuning::default();
    let mut state = airborne_state(&tuning, -300.0);
    state.start_dash(tuning.dash_speed, tuning.dash_duration);
    state.set_forced_glide(true);
    state.enable_wall_grip(true);
    state.movement_lock_timer = 0.1;
    state.jumps_remaining = 0;

    state.reset_to_baseline();

    assert!(state.grounded);
    assert!(!state.dashing);
    assert!(!state.forced_glide);
    assert!(!state.wall_grip_enabled);
    assert_eq!(state.jumps_remaining, 1);
    assert_eq!(state.velocity, Vec2::ZERO);
    assert_eq!(state.movement_lock_timer, 0.0);
    assert_eq!(state.gravity_scale, 1.0);
}

#[test]
fn test_single_jump_height() {
    let tuning = MovementTuning {
        jump_velocity: 600.0,
        gravity: 1800.0,
        ..Default::default()
    };
    assert!((tuning.single_jump_height() - 100.0).abs() < 0.001);
}

#[test]
fn test_player_collides_only_with_level_geometry() {
    let layers = player_collision_layers();
    assert_eq!(layers.memberships, LayerMask::from(GameLayer::Player));
    assert_eq!(
        layers.filters,
        LayerMask::from([GameLayer::Ground, GameLayer::Wall])
    );
}
