//! Scene assembly: game state -> triangle list
//!
//! Draw order matches the layering of the playfield: sky and airport
//! backdrop, columns, pickups, hero, runway, idle overlay. The state is
//! only read here.

use glam::Vec2;

use super::shapes::{
    circle, ellipse, horizontal_band, outline, rect, rotated_rect, vertical_gradient, with_alpha,
};
use super::vertex::{Vertex, colors};
use crate::color::{Rgb, lerp, mix_hex};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GameState, Hero, Obstacle, Pickup, PickupKind, day_night_factor};

/// Sky gradient stops (top, 60 %, horizon) for day and night
const DAY_SKY: [&str; 3] = ["#9cd4ff", "#5f9ce3", "#d7ecff"];
const NIGHT_SKY: [&str; 3] = ["#040915", "#06101f", "#070b12"];

/// (x, y, radius)
const STARS: [(f32, f32, f32); 6] = [
    (60.0, 90.0, 1.8),
    (130.0, 60.0, 1.4),
    (210.0, 70.0, 1.7),
    (310.0, 40.0, 1.6),
    (360.0, 110.0, 1.2),
    (260.0, 130.0, 1.5),
];

const CIRCLE_SEGMENTS: u32 = 32;
const STRIPE_PERIOD: f32 = 24.0;

/// Day/night factor as the renderer sees it (pinned to day when disabled)
pub fn effective_factor(state: &GameState, settings: &Settings) -> f32 {
    if settings.day_night_cycle {
        day_night_factor(state.score, &state.tuning)
    } else {
        0.0
    }
}

/// Build the full frame
pub fn build_scene(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let factor = effective_factor(state, settings);
    let mut vertices = Vec::with_capacity(4096);

    background(&mut vertices, factor);
    for obstacle in &state.obstacles {
        column_pair(&mut vertices, obstacle);
    }
    for pickup in &state.pickups {
        pickup_shape(&mut vertices, pickup);
    }
    hero_shape(
        &mut vertices,
        &state.hero,
        state.tuning.hero_size,
        settings.reduced_motion,
    );
    runway(&mut vertices);

    if !state.is_running() {
        vertices.extend(rect(0.0, 0.0, GAME_WIDTH, GAME_HEIGHT, colors::IDLE_OVERLAY));
    }

    vertices
}

fn mixed(day: &str, night: &str, factor: f32, alpha: f32) -> [f32; 4] {
    mix_hex(day, night, factor).to_rgba(alpha)
}

fn rgba(r: f32, g: f32, b: f32, a: f32) -> [f32; 4] {
    [r / 255.0, g / 255.0, b / 255.0, a]
}

fn background(out: &mut Vec<Vertex>, factor: f32) {
    let sky_height = GAME_HEIGHT * 0.65;
    let stops: Vec<[f32; 4]> = (0..3)
        .map(|i| mixed(DAY_SKY[i], NIGHT_SKY[i], factor, 1.0))
        .collect();
    let split = sky_height * 0.6;
    out.extend(vertical_gradient(0.0, 0.0, GAME_WIDTH, split, stops[0], stops[1]));
    out.extend(vertical_gradient(
        0.0,
        split,
        GAME_WIDTH,
        sky_height - split,
        stops[1],
        stops[2],
    ));
    out.extend(rect(
        0.0,
        sky_height,
        GAME_WIDTH,
        GAME_HEIGHT - sky_height,
        stops[2],
    ));

    let sun_alpha = (1.0 - factor * 1.15).clamp(0.0, 1.0);
    if sun_alpha > 0.02 {
        out.extend(circle(
            Vec2::new(GAME_WIDTH - 70.0, 82.0),
            46.0,
            rgba(255.0, 245.0, 157.0, 0.75 * sun_alpha),
            CIRCLE_SEGMENTS,
        ));
    }

    let moon_alpha = ((factor - 0.15) * 1.25).clamp(0.0, 1.0);
    if moon_alpha > 0.02 {
        let moon = Vec2::new(GAME_WIDTH - 110.0, 94.0);
        out.extend(circle(
            moon,
            34.0,
            rgba(230.0, 236.0, 255.0, 0.92 * moon_alpha),
            CIRCLE_SEGMENTS,
        ));
        let crater = rgba(140.0, 150.0, 190.0, 0.55 * moon_alpha * 0.7);
        out.extend(circle(moon + Vec2::new(-12.0, -10.0), 6.0, crater, 12));
        out.extend(circle(moon + Vec2::new(10.0, 8.0), 4.0, crater, 12));
    }

    let star_intensity = (factor - 0.25).clamp(0.0, 1.0);
    if star_intensity > 0.0 {
        let star = rgba(255.0, 255.0, 255.0, 0.6 * star_intensity);
        for (x, y, r) in STARS {
            out.extend(circle(Vec2::new(x, y), r, star, 8));
        }
    }

    // Horizon haze
    let haze_top = rgba(
        lerp(255.0, 55.0, factor).round(),
        lerp(255.0, 90.0, factor).round(),
        lerp(255.0, 160.0, factor).round(),
        lerp(0.55, 0.28, factor),
    );
    let haze_bottom = rgba(
        lerp(180.0, 20.0, factor).round(),
        lerp(200.0, 45.0, factor).round(),
        lerp(215.0, 80.0, factor).round(),
        lerp(0.0, 0.18, factor),
    );
    out.extend(vertical_gradient(
        0.0,
        sky_height - 60.0,
        GAME_WIDTH,
        140.0,
        haze_top,
        haze_bottom,
    ));

    airport(out, sky_height, factor);

    if factor > 0.6 {
        out.extend(rect(
            0.0,
            0.0,
            GAME_WIDTH,
            GAME_HEIGHT,
            rgba(15.0, 16.0, 24.0, 0.6 * (factor - 0.6) * 0.5),
        ));
    }
}

/// Terminal building, control tower and parked aircraft
fn airport(out: &mut Vec<Vertex>, sky_height: f32, factor: f32) {
    let terminal_y = sky_height - 50.0;
    let terminal_height = 70.0;
    out.extend(rect(
        20.0,
        terminal_y,
        GAME_WIDTH - 40.0,
        terminal_height,
        mixed("#cfd8dc", "#2b3445", factor, 1.0),
    ));
    out.extend(rect(
        20.0,
        terminal_y,
        GAME_WIDTH - 40.0,
        18.0,
        mixed("#b0bec5", "#1a202f", factor, 1.0),
    ));

    // Windows light up after dusk
    let window = if factor > 0.2 {
        rgba(255.0, 173.0, 23.0, 0.8)
    } else {
        rgba(55.0, 71.0, 79.0, 0.7)
    };
    let mut x = 40.0;
    while x < GAME_WIDTH - 40.0 {
        out.extend(rect(x, terminal_y + 24.0, 24.0, 20.0, window));
        x += 34.0;
    }

    let tower_x = GAME_WIDTH - 120.0;
    let tower_y = terminal_y - 80.0;
    out.extend(rect(
        tower_x,
        tower_y,
        28.0,
        80.0,
        mixed("#c1d0d6", "#374155", factor, 1.0),
    ));
    out.extend(rect(
        tower_x - 8.0,
        tower_y - 40.0,
        44.0,
        40.0,
        mixed("#90a4ae", "#1b2334", factor, 1.0),
    ));
    out.extend(rect(
        tower_x - 2.0,
        tower_y - 52.0,
        32.0,
        12.0,
        mixed("#eceff1", "#232c3f", factor, 1.0),
    ));
    let beacon_alpha = (1.0 - factor * 0.9).clamp(0.0, 1.0);
    out.extend(circle(
        Vec2::new(tower_x + 14.0, tower_y - 56.0),
        6.0,
        with_alpha(colors::TOWER_LIGHT, beacon_alpha),
        12,
    ));

    let plane = if factor > 0.4 {
        rgba(30.0, 38.0, 56.0, 0.85)
    } else {
        rgba(80.0, 101.0, 115.0, 0.55)
    };
    let base = terminal_y + terminal_height;
    out.extend(rect(70.0, base - 16.0, 90.0, 12.0, plane));
    out.extend(rect(160.0, base - 24.0, 70.0, 10.0, plane));
    out.extend(ellipse(
        Vec2::new(110.0, base - 24.0),
        Vec2::new(22.0, 8.0),
        plane,
        CIRCLE_SEGMENTS,
    ));
}

fn column_pair(out: &mut Vec<Vertex>, obstacle: &Obstacle) {
    let top = obstacle.top_rect();
    let bottom = obstacle.bottom_rect();
    if top.height > 0.0 {
        signal_column(out, top.x, top.y, top.width, top.height, true);
    }
    if bottom.height > 0.0 {
        signal_column(out, bottom.x, bottom.y, bottom.width, bottom.height, false);
    }
}

/// Striped column with a cap on the gap side and a base on the runway
fn signal_column(out: &mut Vec<Vertex>, x: f32, y: f32, width: f32, height: f32, from_top: bool) {
    out.extend(rect(x, y, width, height, colors::COLUMN_BODY));

    let end = y + height;
    let mut stripe_y = if from_top { y } else { y + 16.0 };
    while stripe_y < end {
        let segment = STRIPE_PERIOD.min(end - stripe_y);
        out.extend(rect(x, stripe_y, width, segment / 2.0, colors::COLUMN_STRIPE));
        stripe_y += STRIPE_PERIOD;
    }

    out.extend(horizontal_band(
        x,
        y,
        width,
        height,
        colors::COLUMN_ACCENT,
        colors::COLUMN_ACCENT_MID,
    ));

    let cap_height = (height * 0.18).min(20.0);
    if from_top {
        out.extend(rect(
            x - 4.0,
            end - cap_height,
            width + 8.0,
            cap_height,
            colors::COLUMN_CAP_TOP,
        ));
    } else {
        out.extend(rect(x - 4.0, y, width + 8.0, cap_height, colors::COLUMN_CAP_BOTTOM));
        out.extend(rect(x - 6.0, end - 12.0, width + 12.0, 12.0, colors::COLUMN_BASE));
    }

    out.extend(outline(x, y, width, height, 2.0, colors::COLUMN_EDGE));
}

/// Pickup sprites are not loaded; draw the coloured fallback disc
fn pickup_shape(out: &mut Vec<Vertex>, pickup: &Pickup) {
    let color = match pickup.kind {
        PickupKind::Tomahawk => colors::PICKUP_TOMAHAWK,
        PickupKind::Beer => colors::PICKUP_BEER,
    };
    out.extend(circle(
        pickup.pos + Vec2::new(0.0, 5.0),
        pickup.radius,
        colors::PICKUP_SHADOW,
        CIRCLE_SEGMENTS,
    ));
    out.extend(circle(pickup.pos, pickup.radius, color, CIRCLE_SEGMENTS));
}

/// Fallback hero: tilted body, wing and eye around the sprite centre
fn hero_shape(out: &mut Vec<Vertex>, hero: &Hero, size: f32, reduced_motion: bool) {
    let center = hero.pos + Vec2::splat(size / 2.0);
    let angle = if reduced_motion { 0.0 } else { hero.rotation };
    let (sin, cos) = angle.sin_cos();
    let local = |p: Vec2| center + Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);

    out.extend(rotated_rect(
        center,
        Vec2::new(size * 0.8, size * 0.6),
        angle,
        colors::HERO_BODY,
    ));
    out.extend(rotated_rect(
        local(Vec2::new(-size * 0.1, size * 0.05)),
        Vec2::new(size * 0.4, size * 0.2),
        angle,
        colors::HERO_WING,
    ));
    out.extend(circle(
        local(Vec2::new(size * 0.25, -size * 0.12)),
        size * 0.07,
        colors::HERO_EYE,
        12,
    ));
}

fn runway(out: &mut Vec<Vertex>) {
    let y = GROUND_LEVEL;
    out.extend(rect(0.0, y - 28.0, GAME_WIDTH, 28.0, colors::APRON));
    out.extend(rect(0.0, y, GAME_WIDTH, RUNWAY_HEIGHT, colors::RUNWAY));

    out.extend(rect(0.0, y + 12.0, GAME_WIDTH, 4.0, colors::RUNWAY_LINE));
    out.extend(rect(0.0, y + RUNWAY_HEIGHT - 16.0, GAME_WIDTH, 4.0, colors::RUNWAY_LINE));

    let (dash, gap) = (20.0, 32.0);
    let center_y = y + RUNWAY_HEIGHT / 2.0 - 3.0;
    let mut x = 20.0;
    while x < GAME_WIDTH - dash {
        out.extend(rect(x, center_y, dash, 6.0, colors::RUNWAY_LINE));
        x += dash + gap;
    }

    out.extend(rect(0.0, y + 40.0, GAME_WIDTH, 3.0, colors::TAXI_LINE));
    out.extend(rect(0.0, y + RUNWAY_HEIGHT - 40.0, GAME_WIDTH, 3.0, colors::TAXI_LINE));
}

/// Top sky colour, exposed for the HUD backdrop and tests
pub fn sky_top(factor: f32) -> Rgb {
    mix_hex(DAY_SKY[0], NIGHT_SKY[0], factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::start;

    fn luminance(c: [f32; 4]) -> f32 {
        0.2126 * c[0] + 0.7152 * c[1] + 0.0722 * c[2]
    }

    #[test]
    fn test_scene_is_whole_triangles() {
        let mut state = GameState::default();
        state.obstacles.push(Obstacle {
            x: 200.0,
            width: 80.0,
            gap_y: 150.0,
            gap_size: 200.0,
            passed: false,
        });
        state.pickups.push(Pickup {
            pos: Vec2::new(300.0, 200.0),
            radius: 21.0,
            kind: PickupKind::Beer,
            collected: false,
        });
        let vertices = build_scene(&state, &Settings::default());
        assert!(!vertices.is_empty());
        assert_eq!(vertices.len() % 3, 0);
        assert!(vertices.iter().all(|v| v.position.iter().all(|p| p.is_finite())));
    }

    #[test]
    fn test_more_entities_more_vertices() {
        let mut state = GameState::default();
        start(&mut state);
        let empty = build_scene(&state, &Settings::default()).len();
        state.pickups.push(Pickup {
            pos: Vec2::new(300.0, 200.0),
            radius: 21.0,
            kind: PickupKind::Tomahawk,
            collected: false,
        });
        assert!(build_scene(&state, &Settings::default()).len() > empty);
    }

    #[test]
    fn test_idle_overlay_only_when_idle() {
        let mut state = GameState::default();
        let idle = build_scene(&state, &Settings::default());
        assert_eq!(idle.last().map(|v| v.color), Some(colors::IDLE_OVERLAY));
        start(&mut state);
        let active = build_scene(&state, &Settings::default());
        assert_ne!(active.last().map(|v| v.color), Some(colors::IDLE_OVERLAY));
    }

    #[test]
    fn test_sky_darkens_at_night() {
        let day = sky_top(0.0).to_rgba(1.0);
        let night = sky_top(1.0).to_rgba(1.0);
        assert!(luminance(night) < luminance(day));
        assert_eq!(sky_top(0.0), Rgb::new(0x9c, 0xd4, 0xff));
    }

    #[test]
    fn test_day_night_toggle_pins_day() {
        let mut state = GameState::default();
        state.score = 45;
        let on = Settings::default();
        let off = Settings {
            day_night_cycle: false,
            ..Default::default()
        };
        assert!((effective_factor(&state, &on) - 1.0).abs() < 1e-6);
        assert_eq!(effective_factor(&state, &off), 0.0);
        assert_eq!(build_scene(&state, &off)[0].color, sky_top(0.0).to_rgba(1.0));
    }

    #[test]
    fn test_reduced_motion_draws_hero_level() {
        let mut state = GameState::default();
        state.hero.rotation = 0.45;
        let tilted = build_scene(&state, &Settings::default());
        let level = build_scene(
            &state,
            &Settings {
                reduced_motion: true,
                ..Default::default()
            },
        );
        assert_eq!(tilted.len(), level.len());
        assert_ne!(tilted, level);
    }
}
