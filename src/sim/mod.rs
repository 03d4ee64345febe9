//! Deterministic simulation module
//!
//! All physics and scoring logic lives here. This module must stay pure:
//! - Fixed-rate ticks, externally paced (velocities are units per tick)
//! - Stable disc order (ids assigned once at startup)
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod state;
pub mod tick;

pub use arena::{Arena, GoalSide};
pub use collision::{circles_overlap, correct_overlap, reflect_velocity, resolve_collision};
pub use state::{Disc, DiscKind, SimState};
pub use tick::{TickInput, tick};
