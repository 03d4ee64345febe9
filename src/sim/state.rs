//! Disc entities and owned simulation state

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::config::{ConfigError, DiscConfig, SimConfig};

/// How a disc's position and velocity are driven each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscKind {
    /// The scoring puck; advances by its own velocity
    Primary,
    /// Bounces vertically between the top and bottom walls
    Patrol,
    /// Position supplied externally each tick (tracked paddle)
    Player,
}

/// A circular rigid body on the table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub id: u32,
    pub kind: DiscKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Disc {
    fn from_config(id: u32, config: &DiscConfig) -> Self {
        Self {
            id,
            kind: config.kind,
            pos: config.pos,
            vel: config.vel,
            radius: config.radius,
        }
    }

    /// Vertical patrol bounce: advance by vel.y, invert it when an edge
    /// crosses the arena's vertical extent. Patrol discs never move
    /// horizontally.
    pub fn advance_patrol(&mut self, arena: &Arena) {
        self.pos.y += self.vel.y;
        if self.pos.y - self.radius <= 0.0 || self.pos.y + self.radius >= arena.height {
            self.vel.y = -self.vel.y;
        }
    }
}

/// Complete simulation state
///
/// Owned by the tick loop and mutated only from within a tick. The disc
/// list is replaced wholesale from the configuration-time snapshot on
/// every goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub arena: Arena,
    pub discs: Vec<Disc>,
    /// Tick counter (monotonic across resets)
    pub time_ticks: u64,
    /// Configuration-time snapshot restored on every goal
    initial: Vec<Disc>,
    /// Position of the scoring disc in `discs` (disc order is fixed)
    primary_index: usize,
}

impl SimState {
    /// Build the initial state, validating the configuration first.
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let discs: Vec<Disc> = config
            .discs
            .iter()
            .enumerate()
            .map(|(i, dc)| Disc::from_config(i as u32, dc))
            .collect();
        // validate() guarantees exactly one primary
        let primary_index = discs
            .iter()
            .position(|d| d.kind == DiscKind::Primary)
            .ok_or(ConfigError::NoPrimaryDisc)?;
        log::info!(
            "simulation ready: {} discs on a {}x{} table",
            discs.len(),
            config.arena.width,
            config.arena.height
        );
        Ok(Self {
            arena: config.arena,
            initial: discs.clone(),
            discs,
            time_ticks: 0,
            primary_index,
        })
    }

    /// The scoring disc
    pub fn primary(&self) -> &Disc {
        &self.discs[self.primary_index]
    }

    pub(crate) fn primary_index(&self) -> usize {
        self.primary_index
    }

    /// Restore every disc to the configuration-time snapshot.
    pub fn reset(&mut self) {
        self.discs = self.initial.clone();
        log::debug!("discs restored to initial configuration");
    }

    /// The snapshot `reset` restores
    pub fn initial_discs(&self) -> &[Disc] {
        &self.initial
    }
}
