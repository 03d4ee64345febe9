//! Per-tick simulation advance
//!
//! One tick = input application, puck advance, goal check, confinement,
//! collisions, then paddle motion. A goal short-circuits the tick: the
//! state is reset and the caller gets the scored side back.

use glam::Vec2;

use super::arena::GoalSide;
use super::collision::{circles_overlap, resolve_collision};
use super::state::{Disc, DiscKind, SimState};

/// External input, sampled once at the start of a tick and treated as an
/// immutable snapshot for its duration.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Manual velocity override for the puck
    pub primary_velocity: Option<Vec2>,
    /// Externally tracked positions for player-controlled discs, by disc
    /// id. Positions outside the arena are accepted; confinement pulls
    /// them back in the same tick.
    pub paddle_positions: Vec<(u32, Vec2)>,
}

/// Advance the simulation by one tick.
///
/// Velocities are in units per tick; the caller paces calls at the target
/// frame rate. Returns the goal side when the puck scored, in which case
/// the state has already been reset and the rest of the tick was skipped.
pub fn tick(state: &mut SimState, input: &TickInput) -> Option<GoalSide> {
    state.time_ticks += 1;

    for &(id, pos) in &input.paddle_positions {
        if let Some(disc) = state
            .discs
            .iter_mut()
            .find(|d| d.id == id && d.kind == DiscKind::Player)
        {
            disc.pos = pos;
        }
    }

    let pi = state.primary_index();
    if let Some(vel) = input.primary_velocity {
        state.discs[pi].vel = vel;
    }
    let vel = state.discs[pi].vel;
    state.discs[pi].pos += vel;

    // A goal ends the tick immediately: reset and report
    if let Some(side) = state.arena.goal_side(state.discs[pi].pos) {
        log::info!("{side:?} goal at tick {}", state.time_ticks);
        state.reset();
        return Some(side);
    }

    // Walls, with the aperture exception for the scoring puck
    let arena = state.arena;
    arena.confine(&mut state.discs[pi], true);

    // Puck against every other disc; non-primary pairs never collide
    for j in 0..state.discs.len() {
        if j == pi {
            continue;
        }
        let (puck, other) = pair_mut(&mut state.discs, pi, j);
        if circles_overlap(puck, other) {
            log::trace!("disc {} hit disc {}", puck.id, other.id);
            resolve_collision(puck, other);
        }
    }

    // Paddle motion, then solid-wall confinement for everything else.
    // Player discs get no aperture exception: out-of-range external input
    // self-corrects here.
    for j in 0..state.discs.len() {
        if j == pi {
            continue;
        }
        let disc = &mut state.discs[j];
        if disc.kind == DiscKind::Patrol {
            disc.advance_patrol(&arena);
        }
        arena.confine(disc, false);
    }

    None
}

/// Disjoint mutable borrows of two discs.
fn pair_mut(discs: &mut [Disc], a: usize, b: usize) -> (&mut Disc, &mut Disc) {
    debug_assert_ne!(a, b);
    if a < b {
        let (left, right) = discs.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = discs.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
