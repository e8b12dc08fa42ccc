// Altalt Input Layer - Raw Events
// Event type checking and the raw (type, code, value) triple

use crate::{Action, Key};

/// EV_SYN event type code from input-event-codes.h
pub const EV_SYN: u16 = 0x00;

/// EV_KEY event type code from input-event-codes.h
pub const EV_KEY: u16 = 0x01;

/// SYN_REPORT code, terminates a batch of events
pub const SYN_REPORT: u16 = 0x00;

/// Check if an event is a key event.
///
/// Key events have event.type == EV_KEY (0x01)
pub fn is_key_event(event_type: u16) -> bool {
    event_type == EV_KEY
}

/// One input event as read from (or written to) an event device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawEvent {
    pub event_type: u16,
    pub code: u16,
    pub value: i32,
}

impl RawEvent {
    pub const fn new(event_type: u16, code: u16, value: i32) -> Self {
        Self {
            event_type,
            code,
            value,
        }
    }

    /// Key event for `key` with the given action
    pub fn key(key: Key, action: Action) -> Self {
        Self::new(EV_KEY, key.code(), action.to_i32())
    }

    /// SYN_REPORT marker
    pub const fn syn() -> Self {
        Self::new(EV_SYN, SYN_REPORT, 0)
    }

    pub fn is_key(&self) -> bool {
        is_key_event(self.event_type)
    }

    pub fn is_syn(&self) -> bool {
        self.event_type == EV_SYN && self.code == SYN_REPORT
    }

    /// The key action, if this is a key event with a known value
    pub fn action(&self) -> Option<Action> {
        if self.is_key() {
            Action::from_i32(self.value)
        } else {
            None
        }
    }
}

#[cfg(feature = "uinput")]
impl From<evdev::InputEvent> for RawEvent {
    fn from(event: evdev::InputEvent) -> Self {
        Self::new(event.event_type().0, event.code(), event.value())
    }
}

#[cfg(feature = "uinput")]
impl From<RawEvent> for evdev::InputEvent {
    fn from(event: RawEvent) -> Self {
        evdev::InputEvent::new(evdev::EventType(event.event_type), event.code, event.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_key_event_with_ev_key() {
        assert!(is_key_event(EV_KEY));
    }

    #[test]
    fn test_is_key_event_with_other_event() {
        assert!(!is_key_event(0x02)); // EV_REL
        assert!(!is_key_event(EV_SYN));
        assert!(!is_key_event(0x04)); // EV_MSC
    }

    #[test]
    fn test_key_event_action() {
        let ev = RawEvent::key(Key::A, Action::Repeat);
        assert_eq!(ev, RawEvent::new(EV_KEY, 30, 2));
        assert_eq!(ev.action(), Some(Action::Repeat));
    }

    #[test]
    fn test_action_ignores_unknown_values_and_types() {
        assert_eq!(RawEvent::new(EV_KEY, 30, 7).action(), None);
        assert_eq!(RawEvent::new(0x04, 4, 1).action(), None);
        assert_eq!(RawEvent::syn().action(), None);
    }

    #[test]
    fn test_syn() {
        assert!(RawEvent::syn().is_syn());
        assert!(!RawEvent::syn().is_key());
        assert!(!RawEvent::key(Key::A, Action::Press).is_syn());
    }
}
