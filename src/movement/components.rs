//! Movement domain: components, physics layers and the surface probe seam.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    /// Horizontal sign pointing away from this wall.
    pub fn away_direction(self) -> f32 {
        match self {
            WallSide::Left => 1.0,
            WallSide::Right => -1.0,
        }
    }
}

/// Point-in-time overlap answers supplied by the physics engine.
///
/// Implementations must be side-effect free; the state machine may ask the
/// same question several times within one tick.
pub trait SurfaceProbe {
    fn is_grounded(&self) -> bool;
    fn is_touching_wall(&self, side: WallSide) -> bool;

    fn is_touching_any_wall(&self) -> bool {
        self.is_touching_wall(WallSide::Left) || self.is_touching_wall(WallSide::Right)
    }

    /// The wall being touched, if exactly one side is in contact.
    fn single_wall(&self) -> Option<WallSide> {
        match (
            self.is_touching_wall(WallSide::Left),
            self.is_touching_wall(WallSide::Right),
        ) {
            (true, false) => Some(WallSide::Left),
            (false, true) => Some(WallSide::Right),
            _ => None,
        }
    }
}

/// Snapshot of ground/wall contacts, refreshed every fixed tick by the
/// spatial-query system.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceContacts {
    pub grounded: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

impl SurfaceProbe for SurfaceContacts {
    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn is_touching_wall(&self, side: WallSide) -> bool {
        match side {
            WallSide::Left => self.wall_left,
            WallSide::Right => self.wall_right,
        }
    }
}

// A missing adapter reads as airborne with no walls around.
impl<P: SurfaceProbe> SurfaceProbe for Option<&P> {
    fn is_grounded(&self) -> bool {
        self.is_some_and(|probe| probe.is_grounded())
    }

    fn is_touching_wall(&self, side: WallSide) -> bool {
        self.is_some_and(|probe| probe.is_touching_wall(side))
    }
}

/// A jump press waiting for the next physics tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpRequest {
    /// Regular jump button press, resolved by priority.
    Normal,
    /// Extra air jump granted by the double-jump ability's use action.
    ForcedAir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Wall,
    Ground,
    Double,
    ForcedAir,
}

/// Movement State Machine data for one character.
///
/// Flags are not mutually exclusive; each physics tick resolves them with
/// the priority Dashing > WallSliding > Gliding > normal movement.
#[derive(Component, Debug, Clone)]
pub struct MovementState {
    /// Authoritative velocity, written once per physics tick.
    pub velocity: Vec2,
    pub grounded: bool,
    pub wall_sliding: bool,
    pub gliding: bool,
    pub dashing: bool,
    /// Extra airborne jumps available.
    pub jumps_remaining: u8,
    pub wall_grip_enabled: bool,
    /// Glide driven by the ability hold rather than by fall conditions.
    pub forced_glide: bool,
    pub dash_timer: f32,
    pub dash_velocity: Vec2,
    pub glide_timer: f32,
    pub movement_lock_timer: f32,
    /// Sign of the last nonzero horizontal input (+1 or -1).
    pub last_horizontal_direction: f32,
    pub gravity_scale: f32,
    pub move_axis: f32,
    pub jump_held: bool,
    pub jump_request: Option<JumpRequest>,
}

impl Default for MovementState {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            grounded: false,
            wall_sliding: false,
            gliding: false,
            dashing: false,
            jumps_remaining: 1,
            wall_grip_enabled: false,
            forced_glide: false,
            dash_timer: 0.0,
            dash_velocity: Vec2::ZERO,
            glide_timer: 0.0,
            movement_lock_timer: 0.0,
            last_horizontal_direction: 1.0,
            gravity_scale: 1.0,
            move_axis: 0.0,
            jump_held: false,
            jump_request: None,
        }
    }
}

/// What happened during one physics tick, for collaborators to react to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub landed: bool,
    pub jumped: Option<JumpKind>,
    pub double_jump_consumed: bool,
    pub glide_expired: bool,
    pub dash_ended: bool,
}
