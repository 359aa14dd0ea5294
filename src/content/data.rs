//! Data definitions for the controller configuration file.
//!
//! `assets/data/controller.ron` maps one section onto each tuning resource.
//! Missing sections and fields fall back to the resource defaults.

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityTuning;
use crate::movement::MovementTuning;
use crate::respawn::RespawnTuning;

pub const CONTROLLER_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ControllerConfigDef {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub abilities: AbilityTuning,
    pub respawn: RespawnTuning,
}

impl Default for ControllerConfigDef {
    fn default() -> Self {
        Self {
            schema_version: CONTROLLER_SCHEMA_VERSION,
            movement: MovementTuning::default(),
            abilities: AbilityTuning::default(),
            respawn: RespawnTuning::default(),
        }
    }
}
