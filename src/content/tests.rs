//! Content domain: tests for config parsing and validation.

use std::path::Path;

use super::loader::check_schema;
use super::{
    CONTROLLER_SCHEMA_VERSION, ControllerConfigDef, parse_single, resolve_config, validate_config,
};
use crate::abilities::AbilityKind;

const SHIPPED_CONFIG: &str = include_str!("../../assets/data/controller.ron");

fn parse(contents: &str) -> ControllerConfigDef {
    parse_single(contents, "test.ron").expect("config should parse")
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_config_parses_and_validates() {
    let config = parse(SHIPPED_CONFIG);

    assert_eq!(config.schema_version, CONTROLLER_SCHEMA_VERSION);
    assert!(check_schema(&config, "controller.ron").is_ok());

    let errors = validate_config(&config);
    assert!(errors.is_empty(), "shipped config invalid: {:?}", errors);
}

#[test]
fn test_shipped_config_matches_defaults() {
    let shipped = parse(SHIPPED_CONFIG);
    let defaults = ControllerConfigDef::default();

    assert_eq!(shipped.movement.move_speed, defaults.movement.move_speed);
    assert_eq!(shipped.movement.jump_velocity, defaults.movement.jump_velocity);
    assert_eq!(shipped.movement.fixed_hz, defaults.movement.fixed_hz);
    assert_eq!(shipped.abilities.glide_cooldown, defaults.abilities.glide_cooldown);
    assert_eq!(
        shipped.abilities.palette.color_for(AbilityKind::Dash),
        defaults.abilities.palette.color_for(AbilityKind::Dash)
    );
    assert_eq!(
        shipped.respawn.spawn_position(),
        defaults.respawn.spawn_position()
    );
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let config = parse(
        r#"(
            schema_version: 1,
            movement: (move_speed: 400.0),
        )"#,
    );

    assert_eq!(config.movement.move_speed, 400.0);
    assert_eq!(config.movement.gravity, 1800.0);
    assert_eq!(config.abilities.dash_cooldown, 3.0);
    assert_eq!(config.respawn.checkpoint_radius, 32.0);
}

#[test]
fn test_malformed_ron_reports_file() {
    let result = parse_single::<ControllerConfigDef>("(movement: (move_speed: ", "broken.ron");

    let err = result.expect_err("truncated config should fail");
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().contains("broken.ron"));
}

#[test]
fn test_wrong_schema_version_rejected() {
    let config = parse("(schema_version: 7)");

    let err = check_schema(&config, "controller.ron").expect_err("schema 7 is unsupported");
    assert!(err.message.contains("schema_version 7"));
}

#[test]
fn test_missing_directory_falls_back_to_defaults() {
    let config = resolve_config(Path::new("does/not/exist"));
    assert_eq!(
        config.movement.move_speed,
        ControllerConfigDef::default().movement.move_speed
    );
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_defaults_are_valid() {
    assert!(validate_config(&ControllerConfigDef::default()).is_empty());
}

#[test]
fn test_non_positive_values_rejected() {
    let mut config = ControllerConfigDef::default();
    config.movement.gravity = 0.0;
    config.movement.dash_duration = -0.1;

    let errors = validate_config(&config);

    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["gravity", "dash_duration"]);
    assert_eq!(errors[0].to_string(), "movement.gravity = 0 must be positive");
}

#[test]
fn test_smoothing_out_of_range_rejected() {
    let mut config = ControllerConfigDef::default();
    config.movement.ground_smoothing = 1.5;

    let errors = validate_config(&config);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "ground_smoothing");
}

#[test]
fn test_air_control_cannot_exceed_ground_control() {
    let mut config = ControllerConfigDef::default();
    config.movement.ground_smoothing = 0.2;
    config.movement.air_smoothing = 0.5;

    let errors = validate_config(&config);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "air_smoothing");
}

#[test]
fn test_fall_multiplier_below_one_rejected() {
    let mut config = ControllerConfigDef::default();
    config.movement.fall_gravity_multiplier = 0.8;

    let errors = validate_config(&config);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "fall_gravity_multiplier");
}

#[test]
fn test_zero_cooldown_allowed_but_negative_rejected() {
    let mut config = ControllerConfigDef::default();
    config.abilities.dash_cooldown = 0.0;
    assert!(validate_config(&config).is_empty());

    config.abilities.glide_cooldown = -1.0;
    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].section, "abilities");
    assert_eq!(errors[0].field, "glide_cooldown");
}

#[test]
fn test_invalid_respawn_radius_rejected() {
    let mut config = ControllerConfigDef::default();
    config.respawn.checkpoint_radius = 0.0;

    let errors = validate_config(&config);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].section, "respawn");
}
