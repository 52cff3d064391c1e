//! HUD text derived from game state
//!
//! One call per frame builds everything the DOM readout shows, so no input
//! handler has to remember to refresh it.

use crate::sim::{GameState, SessionPhase};

const FILLED_HEART: &str = "❤️";
const EMPTY_HEART: &str = "🤍";

/// Text shown over the idle screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub title: &'static str,
    pub instruction: &'static str,
}

/// Everything the HUD displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub hearts: String,
    pub score: String,
    /// Present while the session is Idle
    pub overlay: Option<Overlay>,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        let max = state.tuning.max_hearts as usize;
        let filled = (state.hearts as usize).min(max);
        let hearts = format!(
            "{}{}",
            FILLED_HEART.repeat(filled),
            EMPTY_HEART.repeat(max - filled)
        );

        let overlay = match state.phase {
            SessionPhase::Active => None,
            SessionPhase::Idle if state.last_flight.is_some() => Some(Overlay {
                title: "Fin del vuelo",
                instruction: "Toca Reiniciar o la pantalla para intentarlo de nuevo",
            }),
            SessionPhase::Idle => Some(Overlay {
                title: "Listo para volar",
                instruction: "Toca o haz clic para despegar",
            }),
        };

        Self {
            hearts,
            score: state.score.to_string(),
            overlay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::start;

    #[test]
    fn test_full_hearts_on_new_game() {
        let hud = Hud::from_state(&GameState::default());
        assert_eq!(hud.hearts, "❤️❤️❤️❤️❤️");
        assert_eq!(hud.score, "0");
        assert_eq!(hud.overlay.map(|o| o.title), Some("Listo para volar"));
    }

    #[test]
    fn test_partial_hearts_and_score() {
        let mut state = GameState::default();
        start(&mut state);
        state.hearts = 2;
        state.score = 37;
        let hud = Hud::from_state(&state);
        assert_eq!(hud.hearts, "❤️❤️🤍🤍🤍");
        assert_eq!(hud.score, "37");
        assert!(hud.overlay.is_none());
    }

    #[test]
    fn test_ended_flight_shows_game_over() {
        let mut state = GameState::default();
        state.last_flight = Some(12);
        let hud = Hud::from_state(&state);
        assert_eq!(hud.hearts, "❤️❤️❤️❤️❤️");
        assert_eq!(hud.overlay.map(|o| o.title), Some("Fin del vuelo"));
    }

    #[test]
    fn test_idempotent() {
        let state = GameState::default();
        assert_eq!(Hud::from_state(&state), Hud::from_state(&state));
    }
}
