//! Game state and core simulation types
//!
//! One `GameState` per session; the simulation step and input commands take
//! it by `&mut` and nothing else holds on to it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the first flap (initial, or after a reset)
    Idle,
    /// Simulation advances every frame
    Active,
}

/// Something that happened during a step or command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Reset,
    Flapped,
    ObstacleSpawned { gap_y: f32, gap_size: f32, tight: bool },
    PickupSpawned { kind: PickupKind },
    PickupSkipped,
    Hit { hearts: u8 },
    Healed { hearts: u8 },
    PickupWasted,
    Scored { score: u32 },
    RunwayBounce,
    SessionEnded { score: u32 },
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    /// Vertical velocity (pixels/s, positive = down)
    pub vy: f32,
    /// Cosmetic tilt derived from vy
    pub rotation: f32,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            pos: Vec2::new(HERO_X, HERO_START_Y),
            vy: 0.0,
            rotation: 0.0,
        }
    }
}

impl Hero {
    /// Collision box: a top-left anchored fraction of the sprite
    pub fn hitbox(&self, tuning: &Tuning) -> Rect {
        let (w, h) = tuning.hitbox();
        Rect::new(self.pos.x, self.pos.y, w, h)
    }
}

/// A column pair with a passable gap between `gap_y` and `gap_y + gap_size`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub width: f32,
    pub gap_y: f32,
    pub gap_size: f32,
    /// Set once the trailing edge is behind the hero
    pub passed: bool,
}

impl Obstacle {
    /// Column above the gap
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_y)
    }

    /// Column below the gap, down to the runway
    pub fn bottom_rect(&self) -> Rect {
        let y = self.gap_y + self.gap_size;
        Rect::new(self.x, y, self.width, (GROUND_LEVEL - y).max(0.0))
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Vertical centre of the gap
    pub fn gap_center(&self) -> f32 {
        self.gap_y + self.gap_size / 2.0
    }
}

/// Pickup flavours; both heal one heart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Tomahawk,
    Beer,
}

/// A healing collectible
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    /// Centre of the pickup circle
    pub pos: Vec2,
    pub radius: f32,
    pub kind: PickupKind,
    /// Removal flag, cleared out at the end of the step
    pub collected: bool,
}

/// Complete game state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: SessionPhase,
    pub hearts: u8,
    pub score: u32,
    pub hero: Hero,
    pub obstacles: Vec<Obstacle>,
    pub pickups: Vec<Pickup>,
    /// Total obstacles spawned this session
    pub obstacle_count: u32,
    /// Clock readings (ms) gating spawns
    pub last_obstacle_at: f64,
    pub last_pickup_at: f64,
    /// Last registered damage; None means never hit
    pub last_hit_at: Option<f64>,
    /// Score of the flight that just ended; cleared on start or manual reset
    pub last_flight: Option<u32>,
    pub tuning: Tuning,
    /// Events raised by commands and steps since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh Idle session with timers armed at `now_ms`
    pub fn new(tuning: Tuning, now_ms: f64) -> Self {
        Self {
            phase: SessionPhase::Idle,
            hearts: tuning.max_hearts,
            score: 0,
            hero: Hero::default(),
            obstacles: Vec::new(),
            pickups: Vec::new(),
            obstacle_count: 0,
            last_obstacle_at: now_ms,
            last_pickup_at: now_ms,
            last_hit_at: None,
            last_flight: None,
            tuning,
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    /// Take the events raised so far, leaving the list empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_full() {
        let state = GameState::new(Tuning::default(), 1234.0);
        assert_eq!(state.phase, SessionPhase::Idle);
        assert_eq!(state.hearts, 5);
        assert_eq!(state.score, 0);
        assert_eq!(state.hero.pos, Vec2::new(HERO_X, HERO_START_Y));
        assert_eq!(state.last_obstacle_at, 1234.0);
        assert_eq!(state.last_pickup_at, 1234.0);
        assert!(state.last_hit_at.is_none());
    }

    #[test]
    fn test_obstacle_rects() {
        let obstacle = Obstacle {
            x: 100.0,
            width: 80.0,
            gap_y: 150.0,
            gap_size: 200.0,
            passed: false,
        };
        assert_eq!(obstacle.top_rect(), Rect::new(100.0, 0.0, 80.0, 150.0));
        assert_eq!(
            obstacle.bottom_rect(),
            Rect::new(100.0, 350.0, 80.0, GROUND_LEVEL - 350.0)
        );
        assert_eq!(obstacle.gap_center(), 250.0);
    }

    #[test]
    fn test_bottom_rect_never_negative() {
        let obstacle = Obstacle {
            x: 0.0,
            width: 80.0,
            gap_y: GROUND_LEVEL - 100.0,
            gap_size: 200.0,
            passed: false,
        };
        assert_eq!(obstacle.bottom_rect().height, 0.0);
    }

    #[test]
    fn test_hero_hitbox_is_smaller_than_sprite() {
        let tuning = Tuning::default();
        let hitbox = Hero::default().hitbox(&tuning);
        assert!((hitbox.width - 56.0 * 0.7).abs() < 1e-4);
        assert!((hitbox.height - 56.0 * 0.85).abs() < 1e-4);
        assert_eq!(hitbox.x, HERO_X);
    }
}
