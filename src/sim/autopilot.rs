//! Idle/demo mode controller
//!
//! Flaps whenever the hero sinks below the middle of the next gap. Good
//! enough to keep a demo run alive for a while, not to play perfectly.

use super::state::{GameState, SessionPhase};
use crate::consts::GROUND_LEVEL;

/// How far below the target line the hero may drift before flapping
const SLACK: f32 = 12.0;

/// Vertical line the autopilot tries to hold
pub fn target_y(state: &GameState) -> f32 {
    let hero_x = state.hero.pos.x;
    state
        .obstacles
        .iter()
        .filter(|o| !o.passed && o.right() >= hero_x)
        .min_by(|a, b| a.x.total_cmp(&b.x))
        .map(|o| o.gap_center())
        .unwrap_or(GROUND_LEVEL * 0.5)
}

/// Whether a flap should be issued this frame
pub fn should_flap(state: &GameState) -> bool {
    if state.phase == SessionPhase::Idle {
        // Auto-launch
        return true;
    }
    let (_, hitbox_h) = state.tuning.hitbox();
    let hero_center = state.hero.pos.y + hitbox_h / 2.0;
    state.hero.vy >= 0.0 && hero_center > target_y(state) + SLACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;
    use crate::sim::tick::{TickInput, start, tick};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_idle_autopilot_launches() {
        let state = GameState::default();
        assert!(should_flap(&state));
    }

    #[test]
    fn test_targets_nearest_unpassed_gap() {
        let mut state = GameState::default();
        let gap = |x: f32, gap_y: f32, passed: bool| Obstacle {
            x,
            width: 80.0,
            gap_y,
            gap_size: 200.0,
            passed,
        };
        state.obstacles.push(gap(0.0, 100.0, true));
        state.obstacles.push(gap(300.0, 250.0, false));
        state.obstacles.push(gap(150.0, 120.0, false));
        assert_eq!(target_y(&state), 220.0);
    }

    #[test]
    fn test_only_flaps_when_falling_below_target() {
        let mut state = GameState::default();
        start(&mut state);
        state.hero.pos.y = 400.0;
        state.hero.vy = 50.0;
        assert!(should_flap(&state));
        state.hero.vy = -100.0;
        assert!(!should_flap(&state));
        state.hero.pos.y = 100.0;
        state.hero.vy = 50.0;
        assert!(!should_flap(&state));
    }

    #[test]
    fn test_demo_run_scores() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(2024);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        let mut now = 0.0;
        let mut best = 0;
        for _ in 0..(60 * 60) {
            now += 1000.0 / 60.0;
            tick(&mut state, &mut rng, &input, 1.0 / 60.0, now);
            best = best.max(state.score);
        }
        assert!(best > 0, "autopilot should clear at least one column");
    }
}
