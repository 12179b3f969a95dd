use serde::{Deserialize, Serialize};

// Vibration patterns: alternating off/on durations in milliseconds.
const CORRECT_BUZZ_PATTERN: &[u64] = &[0, 100, 100, 100, 100, 100, 100];
const PANIC_BUZZ_PATTERN: &[u64] = &[0, 200];
const GAME_OVER_BUZZ_PATTERN: &[u64] = &[0, 2000];
const NO_BUZZ_PATTERN: &[u64] = &[0, 1];

/// Last haptic cue the game asked for. Stays set until the observer
/// acknowledges it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BuzzEvent {
    #[default]
    None,
    Correct,
    CountdownPanic,
    GameOver,
}

impl BuzzEvent {
    /// Fixed vibration pattern for this cue. `None` maps to a 1ms no-op.
    pub fn pattern(self) -> &'static [u64] {
        match self {
            BuzzEvent::None => NO_BUZZ_PATTERN,
            BuzzEvent::Correct => CORRECT_BUZZ_PATTERN,
            BuzzEvent::CountdownPanic => PANIC_BUZZ_PATTERN,
            BuzzEvent::GameOver => GAME_OVER_BUZZ_PATTERN,
        }
    }

    pub fn is_armed(self) -> bool {
        self != BuzzEvent::None
    }

    pub fn label(self) -> &'static str {
        match self {
            BuzzEvent::None => "",
            BuzzEvent::Correct => "CORRECT!",
            BuzzEvent::CountdownPanic => "HURRY!",
            BuzzEvent::GameOver => "TIME'S UP!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns() {
        assert_eq!(BuzzEvent::Correct.pattern(), &[0, 100, 100, 100, 100, 100, 100]);
        assert_eq!(BuzzEvent::CountdownPanic.pattern(), &[0, 200]);
        assert_eq!(BuzzEvent::GameOver.pattern(), &[0, 2000]);
        assert_eq!(BuzzEvent::None.pattern(), &[0, 1]);
    }

    #[test]
    fn test_default_is_unarmed() {
        assert_eq!(BuzzEvent::default(), BuzzEvent::None);
        assert!(!BuzzEvent::None.is_armed());
        assert!(BuzzEvent::GameOver.is_armed());
    }
}
