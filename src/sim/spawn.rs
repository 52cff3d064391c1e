//! Obstacle and pickup spawning
//!
//! The RNG is passed in so a seeded generator makes spawns reproducible.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Obstacle, Pickup, PickupKind};
use crate::consts::*;

/// Push a new column at the right edge and re-arm the obstacle timer
pub fn spawn_obstacle(state: &mut GameState, rng: &mut impl Rng, now_ms: f64) {
    state.obstacle_count += 1;
    let tuning = &state.tuning;
    let tight = state.obstacle_count % tuning.tight_gap_every.max(1) == 0;
    let gap_size = if tight {
        tuning.tight_gap_size()
    } else {
        tuning.gap_size
    };

    // Gap sits fully inside the playable band above the runway
    let min_gap_y = tuning.gap_margin;
    let max_gap_y = (GROUND_LEVEL - tuning.gap_margin - gap_size).max(min_gap_y);
    let gap_y = if max_gap_y > min_gap_y {
        rng.random_range(min_gap_y..max_gap_y)
    } else {
        min_gap_y
    };

    state.obstacles.push(Obstacle {
        x: GAME_WIDTH,
        width: tuning.obstacle_width,
        gap_y,
        gap_size,
        passed: false,
    });
    state.last_obstacle_at = now_ms;

    log::debug!(
        "Obstacle #{} gap_y={:.1} gap={}{}",
        state.obstacle_count,
        gap_y,
        gap_size,
        if tight { " (tight)" } else { "" }
    );
    state.events.push(GameEvent::ObstacleSpawned {
        gap_y,
        gap_size,
        tight,
    });
}

/// Push a pickup beyond the right edge and re-arm the pickup timer
pub fn spawn_pickup(state: &mut GameState, rng: &mut impl Rng, now_ms: f64) {
    let kind = if rng.random_bool(0.5) {
        PickupKind::Tomahawk
    } else {
        PickupKind::Beer
    };
    let low = PICKUP_VERTICAL_MARGIN;
    let high = GROUND_LEVEL - PICKUP_VERTICAL_MARGIN;
    let y = rng.random_range(low..high);

    state.pickups.push(Pickup {
        pos: Vec2::new(GAME_WIDTH + PICKUP_SPAWN_OFFSET, y),
        radius: state.tuning.pickup_size / 2.0,
        kind,
        collected: false,
    });
    state.last_pickup_at = now_ms;

    log::debug!("Pickup {:?} at y={:.1}", kind, y);
    state.events.push(GameEvent::PickupSpawned { kind });
}

/// Roll for a pickup; the timer re-arms whether or not one appears
pub fn try_spawn_pickup(state: &mut GameState, rng: &mut impl Rng, now_ms: f64) {
    let chance = state.tuning.pickup_chance.clamp(0.0, 1.0);
    if rng.random_bool(chance) {
        spawn_pickup(state, rng, now_ms);
    } else {
        state.last_pickup_at = now_ms;
        state.events.push(GameEvent::PickupSkipped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_every_tenth_obstacle_is_tight() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for i in 0..20 {
            spawn_obstacle(&mut state, &mut rng, i as f64 * 1500.0);
        }
        for (i, obstacle) in state.obstacles.iter().enumerate() {
            let expected = if (i + 1) % 10 == 0 { 140.0 } else { 200.0 };
            assert_eq!(obstacle.gap_size, expected, "obstacle #{}", i + 1);
        }
        assert_eq!(state.obstacle_count, 20);
        assert_eq!(state.last_obstacle_at, 19.0 * 1500.0);
    }

    #[test]
    fn test_gap_always_inside_band() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..500 {
            spawn_obstacle(&mut state, &mut rng, 0.0);
        }
        let margin = state.tuning.gap_margin;
        for obstacle in &state.obstacles {
            assert!(obstacle.gap_y >= margin);
            assert!(obstacle.gap_y + obstacle.gap_size <= GROUND_LEVEL - margin);
            assert_eq!(obstacle.x, GAME_WIDTH);
        }
    }

    #[test]
    fn test_pickups_spawn_off_screen_in_band() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            spawn_pickup(&mut state, &mut rng, 10.0);
        }
        assert!(state.pickups.iter().any(|p| p.kind == PickupKind::Tomahawk));
        assert!(state.pickups.iter().any(|p| p.kind == PickupKind::Beer));
        for pickup in &state.pickups {
            assert_eq!(pickup.pos.x, GAME_WIDTH + 40.0);
            assert!(pickup.pos.y >= 80.0 && pickup.pos.y < GROUND_LEVEL - 80.0);
            assert_eq!(pickup.radius, 21.0);
        }
    }

    #[test]
    fn test_skipped_pickup_still_rearms_timer() {
        let tuning = Tuning {
            pickup_chance: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(tuning, 0.0);
        let mut rng = Pcg32::seed_from_u64(1);
        try_spawn_pickup(&mut state, &mut rng, 6001.0);
        assert!(state.pickups.is_empty());
        assert_eq!(state.last_pickup_at, 6001.0);
        assert_eq!(state.events, vec![GameEvent::PickupSkipped]);
    }

    #[test]
    fn test_seeded_spawns_are_reproducible() {
        let run = |seed| {
            let mut state = GameState::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..5 {
                spawn_obstacle(&mut state, &mut rng, 0.0);
            }
            state.obstacles.iter().map(|o| o.gap_y).collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }
}
