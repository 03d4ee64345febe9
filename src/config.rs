//! Startup configuration
//!
//! Arena geometry and the disc roster are plain data supplied once at
//! startup. `SimState::new` runs `validate` before anything moves, so the
//! physics core can assume the data-model invariants hold.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::arena::Arena;
use crate::sim::state::DiscKind;

/// Initial state of one disc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscConfig {
    pub kind: DiscKind,
    pub pos: Vec2,
    pub radius: f32,
    pub vel: Vec2,
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    pub arena: Arena,
    pub discs: Vec<DiscConfig>,
}

impl Default for SimConfig {
    /// The classic table: an autonomous puck and two patrol paddles.
    fn default() -> Self {
        let arena = Arena::default();
        Self {
            discs: vec![
                DiscConfig {
                    kind: DiscKind::Primary,
                    pos: Vec2::new(arena.width / 2.0, arena.height / 2.0),
                    radius: PUCK_RADIUS,
                    vel: PUCK_START_VEL,
                },
                DiscConfig {
                    kind: DiscKind::Patrol,
                    pos: Vec2::new(PADDLE_INSET, arena.height / 2.0),
                    radius: PADDLE_RADIUS,
                    vel: PADDLE_PATROL_VEL,
                },
                DiscConfig {
                    kind: DiscKind::Patrol,
                    pos: Vec2::new(arena.width - PADDLE_INSET, arena.height / 2.0),
                    radius: PADDLE_RADIUS,
                    vel: PADDLE_PATROL_VEL,
                },
            ],
            arena,
        }
    }
}

impl SimConfig {
    /// Same table with the paddles driven by tracked positions instead of
    /// patrolling on their own.
    pub fn player_controlled() -> Self {
        let mut config = Self::default();
        for disc in &mut config.discs {
            if disc.kind == DiscKind::Patrol {
                disc.kind = DiscKind::Player;
                disc.vel = Vec2::ZERO;
            }
        }
        config
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        log::info!("loaded configuration with {} discs", config.discs.len());
        Ok(config)
    }

    /// Check every data-model invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arena.width > 0.0 && self.arena.height > 0.0 && self.arena.goal_depth > 0.0) {
            return Err(ConfigError::NonPositiveArena);
        }
        // Goal slots must sit strictly inside the vertical extent
        if !(self.arena.goal_height > 0.0 && self.arena.goal_height < self.arena.height) {
            return Err(ConfigError::GoalTallerThanArena);
        }
        let primaries = self
            .discs
            .iter()
            .filter(|d| d.kind == DiscKind::Primary)
            .count();
        match primaries {
            0 => return Err(ConfigError::NoPrimaryDisc),
            1 => {}
            _ => return Err(ConfigError::MultiplePrimaryDiscs),
        }
        for (index, disc) in self.discs.iter().enumerate() {
            if !(disc.radius > 0.0) {
                return Err(ConfigError::NonPositiveRadius { index });
            }
            if !disc.pos.is_finite() {
                return Err(ConfigError::NonFinitePosition { index });
            }
            if !disc.vel.is_finite() {
                return Err(ConfigError::NonFiniteVelocity { index });
            }
        }
        Ok(())
    }
}

/// Rejected configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NoPrimaryDisc,
    MultiplePrimaryDiscs,
    NonPositiveRadius { index: usize },
    NonFinitePosition { index: usize },
    NonFiniteVelocity { index: usize },
    NonPositiveArena,
    GoalTallerThanArena,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoPrimaryDisc => write!(f, "configuration has no primary disc"),
            ConfigError::MultiplePrimaryDiscs => {
                write!(f, "configuration has more than one primary disc")
            }
            ConfigError::NonPositiveRadius { index } => {
                write!(f, "disc {index} has a non-positive radius")
            }
            ConfigError::NonFinitePosition { index } => {
                write!(f, "disc {index} has a non-finite position")
            }
            ConfigError::NonFiniteVelocity { index } => {
                write!(f, "disc {index} has a non-finite velocity")
            }
            ConfigError::NonPositiveArena => write!(f, "arena dimensions must be positive"),
            ConfigError::GoalTallerThanArena => {
                write!(f, "goal slots must lie strictly within the arena's vertical extent")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
