//! Validation for tuning values loaded from content files.

use super::data::ControllerConfigDef;

/// A validation error naming the offending field and why it was rejected.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} = {} {}",
            self.section, self.field, self.value, self.reason
        )
    }
}

/// Helper macro for checking that each listed field holds a value the
/// predicate accepts
macro_rules! check_fields {
    ($errors:expr, $section:expr, $def:expr, $reason:expr, |$v:ident| $accept:expr, [$($field:ident),+ $(,)?]) => {
        $(
            let $v = $def.$field as f64;
            if !($accept) {
                $errors.push(ValidationError {
                    section: $section,
                    field: stringify!($field),
                    value: $v,
                    reason: $reason,
                });
            }
        )+
    };
}

/// Validate every section of the controller config.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_config(config: &ControllerConfigDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let movement = &config.movement;
    check_fields!(
        errors,
        "movement",
        movement,
        "must be positive",
        |v| v > 0.0,
        [
            move_speed,
            jump_velocity,
            gravity,
            fall_gravity_blend,
            wall_jump_impulse,
            wall_jump_horizontal_ratio,
            wall_jump_vertical_ratio,
            movement_lock_time,
            wall_slide_speed,
            glide_gravity_scale,
            glide_max_fall_speed,
            max_glide_time,
            dash_speed,
            dash_duration,
            ground_probe_distance,
            wall_probe_distance,
            fixed_hz,
        ]
    );
    check_fields!(
        errors,
        "movement",
        movement,
        "must be in (0, 1]",
        |v| v > 0.0 && v <= 1.0,
        [ground_smoothing, air_smoothing, dash_shape_scale]
    );
    check_fields!(
        errors,
        "movement",
        movement,
        "must be at least 1",
        |v| v >= 1.0,
        [fall_gravity_multiplier]
    );
    if movement.air_smoothing > movement.ground_smoothing {
        errors.push(ValidationError {
            section: "movement",
            field: "air_smoothing",
            value: movement.air_smoothing as f64,
            reason: "must not exceed ground_smoothing",
        });
    }

    let abilities = &config.abilities;
    check_fields!(
        errors,
        "abilities",
        abilities,
        "must not be negative",
        |v| v >= 0.0,
        [
            double_jump_cooldown,
            dash_cooldown,
            wall_jump_cooldown,
            glide_cooldown,
        ]
    );
    check_fields!(
        errors,
        "abilities",
        abilities,
        "must be positive",
        |v| v > 0.0,
        [glide_hold_duration]
    );

    let respawn = &config.respawn;
    check_fields!(
        errors,
        "respawn",
        respawn,
        "must be positive",
        |v| v > 0.0,
        [checkpoint_radius]
    );

    errors
}
