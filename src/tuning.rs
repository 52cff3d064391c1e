//! Data-driven game balance
//!
//! Every number the simulation step reads lives here so balance can be
//! tweaked from JSON without touching the sim.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{GROUND_LEVEL, MIN_TIGHT_GAP, TIGHT_GAP_REDUCTION};

/// Balance values consumed by the simulation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Starting (and maximum) hearts
    pub max_hearts: u8,
    /// Milliseconds between obstacle spawns
    pub obstacle_interval_ms: f64,
    /// Milliseconds between pickup spawn attempts
    pub pickup_interval_ms: f64,
    /// Probability that a pickup attempt actually spawns one
    pub pickup_chance: f64,
    /// Scroll speed at score 0 (pixels/s)
    pub base_speed: f32,
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Vertical velocity set by a flap (negative = up)
    pub flap_strength: f32,
    /// Hero sprite edge length
    pub hero_size: f32,
    /// Minimum time between two damage events
    pub hit_cooldown_ms: f64,
    /// Pickup sprite edge length (radius is half of this)
    pub pickup_size: f32,
    /// Default obstacle gap
    pub gap_size: f32,
    /// Every Nth obstacle uses the tight gap
    pub tight_gap_every: u32,
    /// Gaps stay this far from the top and from the runway
    pub gap_margin: f32,
    /// Obstacle column width
    pub obstacle_width: f32,
    /// Score points per speed step
    pub speed_step_threshold: u32,
    /// Fraction of base speed added per step
    pub speed_increment: f32,
    /// Pickups scroll at this fraction of obstacle speed
    pub pickup_drift: f32,
    /// Score points per full day/night cycle
    pub cycle_points: u32,
    /// Pointer flaps within this window of the last accepted one are dropped
    pub input_cooldown_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_hearts: 5,
            obstacle_interval_ms: 1500.0,
            pickup_interval_ms: 6000.0,
            pickup_chance: 0.75,
            base_speed: 190.0,
            gravity: 1200.0,
            flap_strength: -360.0,
            hero_size: 56.0,
            hit_cooldown_ms: 900.0,
            pickup_size: 42.0,
            gap_size: 200.0,
            tight_gap_every: 10,
            gap_margin: 90.0,
            obstacle_width: 80.0,
            speed_step_threshold: 10,
            speed_increment: 1.0 / 6.0,
            pickup_drift: 0.85,
            cycle_points: 90,
            input_cooldown_ms: 80.0,
        }
    }
}

/// Reasons a tuning set is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    NoHearts,
    NonPositive(&'static str),
    ChanceOutOfRange(f64),
    GapTooLarge { gap: f32, band: f32 },
    HeroTooLarge,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::NoHearts => write!(f, "max_hearts must be at least 1"),
            TuningError::NonPositive(field) => write!(f, "{field} must be positive"),
            TuningError::ChanceOutOfRange(p) => {
                write!(f, "pickup_chance {p} is outside [0, 1]")
            }
            TuningError::GapTooLarge { gap, band } => {
                write!(f, "gap {gap} does not fit the playable band {band}")
            }
            TuningError::HeroTooLarge => write!(f, "hero does not fit above the runway"),
        }
    }
}

impl std::error::Error for TuningError {}

impl Tuning {
    /// Parse a tuning set from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Read, parse and validate a tuning file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Gap used by every `tight_gap_every`-th obstacle
    pub fn tight_gap_size(&self) -> f32 {
        (self.gap_size - TIGHT_GAP_REDUCTION).max(MIN_TIGHT_GAP)
    }

    /// Hero hitbox size (width, height)
    pub fn hitbox(&self) -> (f32, f32) {
        use crate::consts::{HITBOX_HEIGHT_RATIO, HITBOX_WIDTH_RATIO};
        (
            self.hero_size * HITBOX_WIDTH_RATIO,
            self.hero_size * HITBOX_HEIGHT_RATIO,
        )
    }

    /// Lowest allowed hero y (top edge) before the runway bounce
    pub fn hero_floor(&self) -> f32 {
        GROUND_LEVEL - self.hero_size
    }

    /// Reject tuning sets the simulation can't honour
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.max_hearts == 0 {
            return Err(TuningError::NoHearts);
        }
        let positive = [
            ("obstacle_interval_ms", self.obstacle_interval_ms as f32),
            ("pickup_interval_ms", self.pickup_interval_ms as f32),
            ("base_speed", self.base_speed),
            ("hero_size", self.hero_size),
            ("pickup_size", self.pickup_size),
            ("gap_size", self.gap_size),
            ("obstacle_width", self.obstacle_width),
            ("tight_gap_every", self.tight_gap_every as f32),
            ("speed_step_threshold", self.speed_step_threshold as f32),
            ("cycle_points", self.cycle_points as f32),
        ];
        for (field, value) in positive {
            // Also catches NaN
            if !(value > 0.0) {
                return Err(TuningError::NonPositive(field));
            }
        }
        if !(0.0..=1.0).contains(&self.pickup_chance) {
            return Err(TuningError::ChanceOutOfRange(self.pickup_chance));
        }
        let band = GROUND_LEVEL - 2.0 * self.gap_margin;
        let widest = self.gap_size.max(self.tight_gap_size());
        if widest > band {
            return Err(TuningError::GapTooLarge { gap: widest, band });
        }
        if self.hero_floor() <= 0.0 {
            return Err(TuningError::HeroTooLarge);
        }
        Ok(())
    }
}
