//! Simulation step and session commands
//!
//! `advance` is the per-frame step; `flap`, `start`, `reset` and `restart`
//! are the commands input handlers issue between frames.

use rand::Rng;

use super::autopilot;
use super::collision::{circle_rect_intersect, rects_intersect};
use super::difficulty::scroll_speed;
use super::spawn::{spawn_obstacle, try_spawn_pickup};
use super::state::{GameEvent, GameState, Hero, SessionPhase};
use crate::consts::*;

/// Commands collected since the last frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Upward impulse (also starts an Idle session)
    pub flap: bool,
    /// Back to Idle with fresh state
    pub reset: bool,
    /// Reset and immediately start
    pub restart: bool,
    /// Demo mode - flaps are decided automatically
    pub autopilot: bool,
}

/// Apply pending commands, then advance one frame if the session is running
pub fn tick(state: &mut GameState, rng: &mut impl Rng, input: &TickInput, dt: f32, now_ms: f64) {
    if input.restart {
        restart(state, now_ms);
    } else if input.reset {
        reset(state, now_ms);
    }

    let wants_flap = input.flap || (input.autopilot && autopilot::should_flap(state));
    if wants_flap {
        flap(state);
    }

    if state.is_running() {
        advance(state, rng, dt, now_ms);
    }
}

/// Idle -> Active; no-op when already running
pub fn start(state: &mut GameState) {
    if state.phase == SessionPhase::Idle {
        state.phase = SessionPhase::Active;
        state.last_flight = None;
        state.events.push(GameEvent::Started);
        log::info!("Session started");
    }
}

/// Set the fixed upward impulse; starts the session if Idle
pub fn flap(state: &mut GameState) {
    start(state);
    state.hero.vy = state.tuning.flap_strength;
    state.events.push(GameEvent::Flapped);
}

/// Reinitialise everything and re-arm spawn timers at `now_ms`
pub fn reset(state: &mut GameState, now_ms: f64) {
    state.phase = SessionPhase::Idle;
    state.hearts = state.tuning.max_hearts;
    state.score = 0;
    state.hero = Hero::default();
    state.obstacles.clear();
    state.pickups.clear();
    state.obstacle_count = 0;
    state.last_obstacle_at = now_ms;
    state.last_pickup_at = now_ms;
    state.last_hit_at = None;
    state.last_flight = None;
    state.events.push(GameEvent::Reset);
    log::info!("Session reset");
}

/// Reset followed by start (restart button / R key)
pub fn restart(state: &mut GameState, now_ms: f64) {
    reset(state, now_ms);
    start(state);
}

/// Advance the simulation by `dt` seconds at clock reading `now_ms`
///
/// Any `dt >= 0` keeps the hero inside its band; `Session` caps `dt` at
/// `MAX_FRAME_DT`.
pub fn advance(state: &mut GameState, rng: &mut impl Rng, dt: f32, now_ms: f64) {
    let speed = scroll_speed(state.score, &state.tuning);

    integrate_hero(state, dt);

    if now_ms - state.last_obstacle_at > state.tuning.obstacle_interval_ms {
        spawn_obstacle(state, rng, now_ms);
    }
    if now_ms - state.last_pickup_at > state.tuning.pickup_interval_ms {
        try_spawn_pickup(state, rng, now_ms);
    }

    let hitbox = state.hero.hitbox(&state.tuning);
    let hero_x = state.hero.pos.x;
    let mut i = 0;
    while i < state.obstacles.len() {
        let obstacle = &mut state.obstacles[i];
        obstacle.x -= speed * dt;
        let hit = rects_intersect(&hitbox, &obstacle.top_rect())
            || rects_intersect(&hitbox, &obstacle.bottom_rect());

        if hit {
            handle_obstacle_collision(state, now_ms);
            if !state.is_running() {
                // Session ended and was reset; the rest of this step is void
                return;
            }
        }

        let obstacle = &mut state.obstacles[i];
        if !obstacle.passed && obstacle.right() < hero_x {
            obstacle.passed = true;
            state.score += 1;
            state.events.push(GameEvent::Scored { score: state.score });
        }
        i += 1;
    }
    state.obstacles.retain(|o| o.right() > -OFFSCREEN_MARGIN);

    let drift = speed * state.tuning.pickup_drift * dt;
    let mut collected = 0;
    for pickup in &mut state.pickups {
        pickup.pos.x -= drift;
        if circle_rect_intersect(pickup.pos, pickup.radius, &hitbox) {
            pickup.collected = true;
            collected += 1;
        }
    }
    for _ in 0..collected {
        handle_pickup_collision(state);
    }
    state.pickups.retain(|p| !p.collected && p.pos.x + p.radius > -OFFSCREEN_MARGIN);
}

/// Gravity, integration, tilt and the ceiling/runway clamps
fn integrate_hero(state: &mut GameState, dt: f32) {
    let floor = state.tuning.hero_floor();
    let bounce = -state.tuning.flap_strength.abs() * 2.0;
    let hero = &mut state.hero;

    hero.vy += state.tuning.gravity * dt;
    hero.pos.y += hero.vy * dt;
    hero.rotation = (hero.vy / ROTATION_DIVISOR).clamp(ROTATION_MIN, ROTATION_MAX);

    if hero.pos.y < 0.0 {
        hero.pos.y = 0.0;
        hero.vy = 0.0;
    } else if hero.pos.y > floor {
        hero.pos.y = floor;
        hero.vy = bounce;
        hero.rotation = BOUNCE_ROTATION;
        state.events.push(GameEvent::RunwayBounce);
    }
}

/// Lose a heart unless still inside the hit cooldown; ends the session at zero
pub fn handle_obstacle_collision(state: &mut GameState, now_ms: f64) {
    if let Some(last) = state.last_hit_at
        && now_ms - last < state.tuning.hit_cooldown_ms
    {
        return;
    }

    state.hearts = state.hearts.saturating_sub(1);
    state.last_hit_at = Some(now_ms);
    state.events.push(GameEvent::Hit {
        hearts: state.hearts,
    });
    log::debug!("Hit! {} hearts left", state.hearts);

    if state.hearts == 0 {
        let score = state.score;
        log::info!("Flight over with score {}", score);
        state.events.push(GameEvent::SessionEnded { score });
        reset(state, now_ms);
        state.last_flight = Some(score);
    }
}

/// Heal one heart, capped at the maximum; the pickup is consumed either way
pub fn handle_pickup_collision(state: &mut GameState) {
    if state.hearts < state.tuning.max_hearts {
        state.hearts += 1;
        state.events.push(GameEvent::Healed {
            hearts: state.hearts,
        });
        log::debug!("Healed to {} hearts", state.hearts);
    } else {
        state.events.push(GameEvent::PickupWasted);
    }
}
