//! Slot Hockey - a goal-slot air hockey simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, goal/reset lifecycle)
//! - `config`: Startup configuration (arena geometry, disc roster)
//!
//! Rendering, video capture, and the frame clock live outside this crate.
//! Each tick the simulation exposes the read-only disc list and arena
//! geometry (`SimState.discs` / `SimState.arena`) for whatever draws it,
//! and accepts externally tracked paddle positions through `sim::TickInput`.

pub mod config;
pub mod sim;

pub use config::{ConfigError, DiscConfig, SimConfig};
pub use sim::{Arena, Disc, DiscKind, GoalSide, SimState, TickInput, tick};

/// Default table constants (the classic 600x300 layout)
pub mod consts {
    use glam::Vec2;

    /// Inner playfield width
    pub const ARENA_WIDTH: f32 = 600.0;
    /// Inner playfield height
    pub const ARENA_HEIGHT: f32 = 300.0;
    /// Wall thickness (render-facing; physics clamps to the inner rect)
    pub const WALL_THICKNESS: f32 = 5.0;
    /// Vertical extent of each goal slot
    pub const GOAL_HEIGHT: f32 = 100.0;
    /// How far each goal slot reaches behind the wall line
    pub const GOAL_DEPTH: f32 = 8.0;

    /// Scoring disc
    pub const PUCK_RADIUS: f32 = 15.0;
    pub const PUCK_START_VEL: Vec2 = Vec2::new(3.0, 3.0);

    /// Defending paddles
    pub const PADDLE_RADIUS: f32 = 30.0;
    pub const PADDLE_PATROL_VEL: Vec2 = Vec2::new(0.0, 2.0);
    /// Paddle distance from its own goal line
    pub const PADDLE_INSET: f32 = 100.0;

    /// Target tick rate for external pacing (ticks per second)
    pub const TICK_RATE: u32 = 60;
}
