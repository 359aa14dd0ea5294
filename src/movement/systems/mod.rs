//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::probe_surfaces;
pub(crate) use input::{latch_input, read_input};
pub(crate) use movement::{step_movement, sync_body_shape};
