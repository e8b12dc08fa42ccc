// Altalt Session State Machine
// Tap counting, grab transitions and translated key emission
//
// States, derived from SessionState:
//
//   IDLE ──mod press──▶ COUNTING ──mod release (taps > 1), grab ok──▶ ARMED_IDLE
//                          │                                              │
//                          │ 4th mod press: disarm                        │ mapped key press
//                          ▼                                              ▼
//                        IDLE ◀──────── any key release ─────────── ARMED_TRANSLATING

use crate::input::{DeviceGrab, RawEvent};
use crate::output::KeyEmitter;
use crate::table::{KeyMapping, TableRegistry, TapLevel};
use crate::translate;
use crate::{Action, Key};

/// Taps beyond this count cancel the session
pub const MAX_TAPS: u8 = 3;

/// Default modifier key (left alt)
pub const DEFAULT_MODIFIER: Key = Key::LEFT_ALT;

/// Mutable session data, owned by one state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Modifier presses counted so far
    pub tap_count: u8,
    /// Whether the physical device is currently grabbed
    pub armed: bool,
    /// Original (untranslated) code of the key being translated
    pub active_translation: Option<Key>,
}

/// Coarse view of the session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Counting,
    ArmedIdle,
    ArmedTranslating,
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        match (self.armed, self.active_translation, self.tap_count) {
            (true, Some(_), _) => SessionPhase::ArmedTranslating,
            (true, None, _) => SessionPhase::ArmedIdle,
            (false, _, 0) => SessionPhase::Idle,
            (false, _, _) => SessionPhase::Counting,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Consumes raw key events and decides grabs and synthetic output.
///
/// The grab controller and emitter are passed in per event so the caller can
/// keep reading from the same device it grabs.
#[derive(Debug, Clone)]
pub struct SessionStateMachine {
    tables: TableRegistry,
    modifier: Key,
    state: SessionState,
}

impl SessionStateMachine {
    pub fn new(tables: TableRegistry, modifier: Key) -> Self {
        Self {
            tables,
            modifier,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Process one raw event. Non-key events and unknown values are ignored.
    pub fn handle_event<G, E>(&mut self, event: RawEvent, grab: &mut G, out: &mut E)
    where
        G: DeviceGrab + ?Sized,
        E: KeyEmitter + ?Sized,
    {
        let Some(action) = event.action() else {
            return;
        };
        let key = Key::from(event.code);

        match action {
            Action::Press => self.on_press(key, grab, out),
            Action::Repeat => self.on_repeat(key, out),
            Action::Release => self.on_release(key, grab, out),
        }
    }

    /// Release any held grab and clear the session
    pub fn shutdown<G: DeviceGrab + ?Sized>(&mut self, grab: &mut G) {
        self.disarm(grab);
    }

    fn on_press<G, E>(&mut self, key: Key, grab: &mut G, out: &mut E)
    where
        G: DeviceGrab + ?Sized,
        E: KeyEmitter + ?Sized,
    {
        if key == self.modifier {
            self.state.tap_count += 1;
            log::debug!("Modifier tap {}", self.state.tap_count);
            if self.state.tap_count > MAX_TAPS {
                log::debug!("Too many taps, cancelling");
                self.disarm(grab);
            }
            return;
        }

        if let Some(mapping) = self.current_mapping(key) {
            log::debug!(
                "Translating {} -> {}{}",
                key,
                mapping.target,
                if mapping.needs_shift { " (shift)" } else { "" }
            );
            translate::press(out, &mapping);
            self.state.active_translation = Some(key);
        }
    }

    // Repeats are forwarded with the original code, not looked up again.
    fn on_repeat<E: KeyEmitter + ?Sized>(&mut self, key: Key, out: &mut E) {
        if self.state.active_translation.is_some() {
            translate::send_key(out, key, Action::Repeat);
        }
    }

    fn on_release<G, E>(&mut self, key: Key, grab: &mut G, out: &mut E)
    where
        G: DeviceGrab + ?Sized,
        E: KeyEmitter + ?Sized,
    {
        if key == self.modifier {
            if self.state.tap_count > 1 {
                self.arm(grab);
            }
            if self.state.active_translation.is_none() {
                return;
            }
        }

        if let Some(mapping) = self.current_mapping(key) {
            translate::release(out, &mapping);
        }
        self.disarm(grab);
    }

    /// Mapping for `key` at the current tap level.
    ///
    /// Gated on the tap count only, not on `armed`: after a failed grab the
    /// key is still translated.
    fn current_mapping(&self, key: Key) -> Option<KeyMapping> {
        let level = TapLevel::from_taps(self.state.tap_count)?;
        self.tables.lookup(level, key).copied()
    }

    fn arm<G: DeviceGrab + ?Sized>(&mut self, grab: &mut G) {
        if self.state.armed {
            return;
        }
        match grab.grab() {
            Ok(()) => {
                log::debug!("Grabbed input after {} taps", self.state.tap_count);
                self.state.armed = true;
            }
            Err(e) => {
                log::warn!("Could not grab input: {}", e);
                self.state.armed = false;
            }
        }
    }

    fn disarm<G: DeviceGrab + ?Sized>(&mut self, grab: &mut G) {
        if self.state.armed {
            match grab.ungrab() {
                Ok(()) => log::debug!("Released input"),
                Err(e) => log::warn!("Could not release input: {}", e),
            }
        }
        self.state.reset();
    }
}
