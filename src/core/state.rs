//! Core domain: game state definitions for the boot flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is loaded and tuning resources are published.
    #[default]
    Boot,
    Run,
}
