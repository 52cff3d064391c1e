//! Runway Flap - A single-screen flap-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Simulation step (physics, spawning, collisions, game state)
//! - `session`: Frame clock, seeded RNG and input gating around the sim
//! - `renderer`: WebGPU rendering pipeline
//! - `hud`: Text readout derived from game state
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod color;
pub mod hud;
pub mod input;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use hud::Hud;
pub use session::Session;
pub use settings::Settings;
pub use tuning::Tuning;

/// Playfield geometry and default balance constants
pub mod consts {
    /// Logical playfield size (canvas pixels)
    pub const GAME_WIDTH: f32 = 420.0;
    pub const GAME_HEIGHT: f32 = 700.0;

    /// Runway strip at the bottom of the screen
    pub const RUNWAY_HEIGHT: f32 = 120.0;
    /// Top of the runway; the hero bounces off this line
    pub const GROUND_LEVEL: f32 = GAME_HEIGHT - RUNWAY_HEIGHT;

    /// Hero horizontal position (fixed)
    pub const HERO_X: f32 = GAME_WIDTH * 0.22;
    /// Hero vertical start position
    pub const HERO_START_Y: f32 = GAME_HEIGHT / 2.0;
    /// Hitbox is a top-left anchored fraction of the sprite
    pub const HITBOX_WIDTH_RATIO: f32 = 0.7;
    pub const HITBOX_HEIGHT_RATIO: f32 = 0.85;

    /// Rotation is vy / ROTATION_DIVISOR, clamped
    pub const ROTATION_DIVISOR: f32 = 600.0;
    pub const ROTATION_MIN: f32 = -0.35;
    pub const ROTATION_MAX: f32 = 0.45;
    /// Tilt forced on a runway bounce
    pub const BOUNCE_ROTATION: f32 = -0.2;

    /// Entities are dropped once their right edge is this far past x = 0
    pub const OFFSCREEN_MARGIN: f32 = 10.0;
    /// Pickups spawn this far beyond the right edge
    pub const PICKUP_SPAWN_OFFSET: f32 = 40.0;
    /// Pickups avoid this band at the top and just above the runway
    pub const PICKUP_VERTICAL_MARGIN: f32 = 80.0;
    /// Tight gaps never get narrower than this
    pub const MIN_TIGHT_GAP: f32 = 140.0;
    /// Tight gaps are this much narrower than the default gap
    pub const TIGHT_GAP_REDUCTION: f32 = 60.0;

    /// Frame dt cap (seconds) so a stalled tab doesn't teleport the hero
    pub const MAX_FRAME_DT: f32 = 0.1;
}
