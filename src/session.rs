//! Game session: the state plus everything that drives it
//!
//! Owns the `GameState`, the seeded RNG, the pointer debounce gate and the
//! frame clock. Front ends call `command` from input handlers and `frame`
//! once per display refresh.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::MAX_FRAME_DT;
use crate::input::{Command, InputDebounce, InputSource};
use crate::sim::{self, GameEvent, GameState, TickInput};
use crate::tuning::Tuning;

/// Number of frames averaged by the FPS counter
const FPS_WINDOW: usize = 60;

/// Rolling frames-per-second estimate over the last `FPS_WINDOW` frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; FPS_WINDOW],
    index: usize,
    filled: bool,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            index: 0,
            filled: false,
            fps: 0,
        }
    }
}

impl FpsCounter {
    pub fn record(&mut self, now_ms: f64) {
        self.frame_times[self.index] = now_ms;
        self.index = (self.index + 1) % FPS_WINDOW;
        if self.index == 0 {
            self.filled = true;
        }
        if self.filled {
            // Oldest sample is the one about to be overwritten
            let elapsed = now_ms - self.frame_times[self.index];
            if elapsed > 0.0 {
                self.fps = ((FPS_WINDOW - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// One running game
pub struct Session {
    seed: u64,
    state: GameState,
    rng: Pcg32,
    pointer_gate: InputDebounce,
    last_frame_ms: Option<f64>,
    autopilot: bool,
    fps: FpsCounter,
}

impl Session {
    pub fn new(seed: u64, tuning: Tuning, now_ms: f64) -> Self {
        let cooldown = tuning.input_cooldown_ms;
        log::info!("Session created with seed: {}", seed);
        Self {
            seed,
            state: GameState::new(tuning, now_ms),
            rng: Pcg32::seed_from_u64(seed),
            pointer_gate: InputDebounce::new(cooldown),
            last_frame_ms: None,
            autopilot: false,
            fps: FpsCounter::default(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Read-only view for the renderer and HUD
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn fps(&self) -> u32 {
        self.fps.fps()
    }

    /// Apply a player command immediately; returns false if it was debounced
    pub fn command(&mut self, command: Command, source: InputSource, now_ms: f64) -> bool {
        match command {
            Command::Flap => {
                if source == InputSource::Pointer && !self.pointer_gate.accept(now_ms) {
                    return false;
                }
                sim::flap(&mut self.state);
            }
            Command::Reset => self.reset(now_ms),
            Command::Restart => {
                sim::restart(&mut self.state, now_ms);
                self.pointer_gate.clear();
            }
            Command::ToggleAutopilot => {
                self.autopilot = !self.autopilot;
                log::info!("Autopilot: {}", self.autopilot);
            }
        }
        true
    }

    /// Back to Idle without starting
    pub fn reset(&mut self, now_ms: f64) {
        sim::reset(&mut self.state, now_ms);
        self.pointer_gate.clear();
    }

    /// Advance one display frame at clock reading `now_ms`
    ///
    /// Returns the events raised by this frame's step.
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let dt = match self.last_frame_ms {
            Some(last) => (((now_ms - last) / 1000.0) as f32).clamp(0.0, MAX_FRAME_DT),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        self.fps.record(now_ms);

        let input = TickInput {
            autopilot: self.autopilot,
            ..Default::default()
        };
        sim::tick(&mut self.state, &mut self.rng, &input, dt, now_ms);

        let events = self.state.drain_events();
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::SessionEnded { .. }))
        {
            self.pointer_gate.clear();
        }
        events
    }
}
