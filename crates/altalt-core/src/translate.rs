// Altalt Key Translator
// Ordering of synthetic events for one translated key

use crate::output::KeyEmitter;
use crate::table::KeyMapping;
use crate::{Action, Key};

/// Shift key used to bracket mappings that need it
pub const SHIFT_KEY: Key = Key::LEFT_SHIFT;

/// Emit one action, logging instead of failing.
///
/// The event loop keeps running when the synthetic device rejects a write;
/// only that action is lost.
pub fn send_key<E: KeyEmitter + ?Sized>(out: &mut E, key: Key, action: Action) {
    if let Err(e) = out.emit(key, action) {
        log::warn!("{}", e);
    }
}

/// Press side: `[shift down]`, then target down
pub fn press<E: KeyEmitter + ?Sized>(out: &mut E, mapping: &KeyMapping) {
    if mapping.needs_shift {
        send_key(out, SHIFT_KEY, Action::Press);
    }
    send_key(out, mapping.target, Action::Press);
}

/// Release side: target up, then `[shift up]`
pub fn release<E: KeyEmitter + ?Sized>(out: &mut E, mapping: &KeyMapping) {
    send_key(out, mapping.target, Action::Release);
    if mapping.needs_shift {
        send_key(out, SHIFT_KEY, Action::Release);
    }
}
