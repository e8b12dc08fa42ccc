use std::fmt;

/// Key event value as reported by evdev: 0 release, 1 press, 2 autorepeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Action {
    Release = 0,
    Press = 1,
    Repeat = 2,
}

impl Action {
    /// Create Action from the raw event value. Anything outside 0..=2 is not a key action.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Action::Release),
            1 => Some(Action::Press),
            2 => Some(Action::Repeat),
            _ => None,
        }
    }

    /// Convert Action to its i32 representation
    pub fn to_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Release => write!(f, "release"),
            Action::Press => write!(f, "press"),
            Action::Repeat => write!(f, "repeat"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_i32() {
        assert_eq!(Action::from_i32(0), Some(Action::Release));
        assert_eq!(Action::from_i32(1), Some(Action::Press));
        assert_eq!(Action::from_i32(2), Some(Action::Repeat));
        assert_eq!(Action::from_i32(3), None);
        assert_eq!(Action::from_i32(-1), None);
    }

    #[test]
    fn test_action_round_trip_value() {
        for action in [Action::Release, Action::Press, Action::Repeat] {
            assert_eq!(Action::from_i32(action.to_i32()), Some(action));
        }
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Press.to_string(), "press");
        assert_eq!(Action::Release.to_string(), "release");
    }
}
