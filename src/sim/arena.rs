//! Arena geometry: wall confinement and goal slots
//!
//! The inner play rectangle `[0, width] x [0, height]` is the single
//! source of truth for physics. Goal slots are rectangles hanging off the
//! left and right edges, centered vertically. `wall_thickness` is carried
//! for the renderer and never enters the collision math.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Disc;
use crate::consts::*;

/// Which goal slot the puck entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalSide {
    Left,
    Right,
}

/// The playfield and its goal slots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    /// Inner playfield width
    pub width: f32,
    /// Inner playfield height
    pub height: f32,
    /// Wall thickness (render-facing)
    pub wall_thickness: f32,
    /// Vertical extent of each goal slot
    pub goal_height: f32,
    /// How far each slot reaches behind the wall line
    pub goal_depth: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
            wall_thickness: WALL_THICKNESS,
            goal_height: GOAL_HEIGHT,
            goal_depth: GOAL_DEPTH,
        }
    }
}

impl Arena {
    /// Vertical span of both goal slots as (min, max)
    pub fn goal_span(&self) -> (f32, f32) {
        let half = self.goal_height / 2.0;
        (self.height / 2.0 - half, self.height / 2.0 + half)
    }

    /// Goal-slot rectangle as (min, max) corners
    pub fn goal_rect(&self, side: GoalSide) -> (Vec2, Vec2) {
        let (y0, y1) = self.goal_span();
        match side {
            GoalSide::Left => (Vec2::new(-self.goal_depth, y0), Vec2::new(0.0, y1)),
            GoalSide::Right => (
                Vec2::new(self.width, y0),
                Vec2::new(self.width + self.goal_depth, y1),
            ),
        }
    }

    /// Which goal slot contains this point, if any. Only the disc center is
    /// tested, not its radius.
    pub fn goal_side(&self, p: Vec2) -> Option<GoalSide> {
        for side in [GoalSide::Left, GoalSide::Right] {
            let (min, max) = self.goal_rect(side);
            if p.x >= min.x && p.x <= max.x && p.y >= min.y && p.y <= max.y {
                return Some(side);
            }
        }
        None
    }

    /// True when a disc center at this y is level with a goal aperture
    fn in_goal_mouth(&self, y: f32) -> bool {
        let (y0, y1) = self.goal_span();
        (y0..=y1).contains(&y)
    }

    /// Clamp a disc back inside the playfield and turn its velocity inward.
    ///
    /// The four wall checks are independent; a corner hit fires two of them
    /// in the same tick. With `allow_goals`, the left/right checks are
    /// skipped while the disc center is level with a goal aperture, so a
    /// scoring disc is never clamped back out of the slot.
    pub fn confine(&self, disc: &mut Disc, allow_goals: bool) {
        let r = disc.radius;
        if !(allow_goals && self.in_goal_mouth(disc.pos.y)) {
            if disc.pos.x - r < 0.0 {
                disc.pos.x = r;
                disc.vel.x = disc.vel.x.abs();
            }
            if disc.pos.x + r > self.width {
                disc.pos.x = self.width - r;
                disc.vel.x = -disc.vel.x.abs();
            }
        }
        if disc.pos.y - r < 0.0 {
            disc.pos.y = r;
            disc.vel.y = disc.vel.y.abs();
        }
        if disc.pos.y + r > self.height {
            disc.pos.y = self.height - r;
            disc.vel.y = -disc.vel.y.abs();
        }
    }
}
