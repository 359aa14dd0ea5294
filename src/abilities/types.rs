//! Abilities domain: ability kinds, cooldown table and the slot component.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AbilityKind {
    #[default]
    None,
    DoubleJump,
    Dash,
    WallJump,
    Glide,
}

impl AbilityKind {
    /// Every kind that can occupy the slot.
    pub const EQUIPPABLE: [AbilityKind; 4] = [
        AbilityKind::DoubleJump,
        AbilityKind::Dash,
        AbilityKind::WallJump,
        AbilityKind::Glide,
    ];

    fn cooldown_index(self) -> Option<usize> {
        match self {
            AbilityKind::None => None,
            AbilityKind::DoubleJump => Some(0),
            AbilityKind::Dash => Some(1),
            AbilityKind::WallJump => Some(2),
            AbilityKind::Glide => Some(3),
        }
    }
}

/// Seconds left before each ability may be equipped again.
///
/// All four equippable kinds are always present; `None` reads as zero and
/// ignores writes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Cooldowns([f32; 4]);

impl Cooldowns {
    pub fn remaining(&self, kind: AbilityKind) -> f32 {
        kind.cooldown_index().map_or(0.0, |i| self.0[i])
    }

    pub fn is_ready(&self, kind: AbilityKind) -> bool {
        self.remaining(kind) <= 0.0
    }

    pub fn set(&mut self, kind: AbilityKind, seconds: f32) {
        if let Some(i) = kind.cooldown_index() {
            self.0[i] = seconds.max(0.0);
        }
    }

    /// Count every running cooldown down, flooring at zero.
    pub fn tick(&mut self, dt: f32) {
        for remaining in self.0.iter_mut().filter(|r| **r > 0.0) {
            *remaining = (*remaining - dt).max(0.0);
        }
    }

    pub fn clear(&mut self) {
        self.0 = [0.0; 4];
    }
}

/// Running hold-to-glide continuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlideHold {
    pub remaining: f32,
    /// Glide cooldown charged however the hold ends.
    pub cooldown: f32,
}

/// Single-slot ability state for one character.
///
/// The slot is a single field, so two abilities can never be equipped at
/// once. Changes to the slot are queued in `announcements` until a system
/// publishes them.
#[derive(Component, Debug, Default, Clone)]
pub struct AbilityState {
    pub(crate) equipped: AbilityKind,
    pub(crate) cooldowns: Cooldowns,
    pub(crate) glide_hold: Option<GlideHold>,
    pub(crate) announcements: Vec<AbilityKind>,
}

impl AbilityState {
    pub fn equipped(&self) -> AbilityKind {
        self.equipped
    }

    pub fn is_equipped(&self, kind: AbilityKind) -> bool {
        self.equipped == kind
    }

    pub fn cooldowns(&self) -> &Cooldowns {
        &self.cooldowns
    }

    pub fn cooldown_remaining(&self, kind: AbilityKind) -> f32 {
        self.cooldowns.remaining(kind)
    }

    pub fn glide_hold(&self) -> Option<GlideHold> {
        self.glide_hold
    }

    /// Take the slot changes queued since the last call.
    pub fn drain_announcements(&mut self) -> Vec<AbilityKind> {
        std::mem::take(&mut self.announcements)
    }
}
