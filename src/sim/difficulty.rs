//! Score-driven difficulty and atmosphere
//!
//! Both curves are pure functions of score so the renderer and the sim
//! always agree.

use crate::tuning::Tuning;

/// Scroll speed: one `speed_increment` of base speed per `speed_step_threshold` points
pub fn scroll_speed(score: u32, tuning: &Tuning) -> f32 {
    let steps = score / tuning.speed_step_threshold.max(1);
    tuning.base_speed * (1.0 + steps as f32 * tuning.speed_increment)
}

/// Triangular day/night wave in [0, 1]; 0 is full day
pub fn day_night_factor(score: u32, tuning: &Tuning) -> f32 {
    if score == 0 {
        return 0.0;
    }
    let cycle = tuning.cycle_points.max(2);
    let half = cycle as f32 / 2.0;
    let position = (score % cycle) as f32;
    let factor = if position <= half {
        position / half
    } else {
        1.0 - (position - half) / half
    };
    factor.clamp(0.0, 1.0)
}
