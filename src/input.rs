//! Logical input commands and flap debouncing
//!
//! Devices map to flap, reset and restart plus the demo toggle. Pointer
//! and touch flaps pass through `InputDebounce` so one tap is one impulse.

/// What the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Flap,
    /// Back to Idle without starting
    Reset,
    /// Reset and take off immediately
    Restart,
    ToggleAutopilot,
}

/// Where a command came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Keyboard,
    Pointer,
}

/// Map a `KeyboardEvent.code` to a command
pub fn command_for_key(code: &str) -> Option<Command> {
    match code {
        "Space" => Some(Command::Flap),
        "Escape" => Some(Command::Reset),
        "KeyR" => Some(Command::Restart),
        "KeyI" => Some(Command::ToggleAutopilot),
        _ => None,
    }
}

/// Drops commands that arrive within `cooldown_ms` of the last accepted one
#[derive(Debug, Clone)]
pub struct InputDebounce {
    cooldown_ms: f64,
    last_accepted: Option<f64>,
}

impl InputDebounce {
    pub fn new(cooldown_ms: f64) -> Self {
        Self {
            cooldown_ms,
            last_accepted: None,
        }
    }

    /// Returns true (and records `now_ms`) if the command should go through
    pub fn accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_accepted
            && now_ms - last < self.cooldown_ms
        {
            return false;
        }
        self.last_accepted = Some(now_ms);
        true
    }

    /// Forget the last accepted command (on reset)
    pub fn clear(&mut self) {
        self.last_accepted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_input_always_accepted() {
        let mut gate = InputDebounce::new(80.0);
        assert!(gate.accept(0.0));
    }

    #[test]
    fn test_rapid_inputs_dropped() {
        let mut gate = InputDebounce::new(80.0);
        assert!(gate.accept(1000.0));
        assert!(!gate.accept(1010.0));
        assert!(!gate.accept(1079.9));
        assert!(gate.accept(1080.0));
    }

    #[test]
    fn test_rejected_inputs_do_not_extend_window() {
        let mut gate = InputDebounce::new(80.0);
        assert!(gate.accept(0.0));
        assert!(!gate.accept(70.0));
        assert!(gate.accept(85.0));
    }

    #[test]
    fn test_clear_reopens_gate() {
        let mut gate = InputDebounce::new(80.0);
        assert!(gate.accept(0.0));
        gate.clear();
        assert!(gate.accept(1.0));
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(command_for_key("Space"), Some(Command::Flap));
        assert_eq!(command_for_key("Escape"), Some(Command::Reset));
        assert_eq!(command_for_key("KeyR"), Some(Command::Restart));
        assert_eq!(command_for_key("KeyI"), Some(Command::ToggleAutopilot));
        assert_eq!(command_for_key("Enter"), None);
    }
}
