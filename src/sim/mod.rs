//! Simulation module
//!
//! All gameplay logic lives here:
//! - Variable timestep, clock readings supplied by the caller
//! - Randomness injected by the caller (seeded in tests)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_rect_intersect, rects_intersect};
pub use difficulty::{day_night_factor, scroll_speed};
pub use state::{GameEvent, GameState, Hero, Obstacle, Pickup, PickupKind, SessionPhase};
pub use tick::{TickInput, advance, flap, reset, restart, start, tick};
