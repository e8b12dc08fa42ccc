// Altalt Output Layer
// Synthetic key emission

#[cfg(feature = "uinput")]
mod uinput;

use std::io;

use crate::input::RawEvent;
use crate::{Action, Key};

#[cfg(feature = "uinput")]
pub use uinput::{VirtualKeyboard, VIRTUAL_DEVICE_NAME};

/// Error types for synthetic device operations
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Failed to create virtual device: {0}")]
    DeviceCreation(#[source] io::Error),

    #[error("Failed to send key {key} ({action}): {source}")]
    Write {
        key: Key,
        action: Action,
        #[source]
        source: io::Error,
    },
}

/// Sink for synthetic key events.
///
/// Implementors only provide `write_events`; `emit` pairs every key event
/// with a SYN_REPORT and hands both over in a single write.
pub trait KeyEmitter {
    /// Write a batch of raw events to the sink as one unit
    fn write_events(&mut self, events: &[RawEvent]) -> io::Result<()>;

    /// Emit one key action followed by its synchronization event
    fn emit(&mut self, key: Key, action: Action) -> Result<(), EmitError> {
        let batch = [RawEvent::key(key, action), RawEvent::syn()];
        self.write_events(&batch)
            .map_err(|source| EmitError::Write {
                key,
                action,
                source,
            })
    }
}

impl<T: KeyEmitter + ?Sized> KeyEmitter for &mut T {
    fn write_events(&mut self, events: &[RawEvent]) -> io::Result<()> {
        (**self).write_events(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        batches: Vec<Vec<RawEvent>>,
        fail: bool,
    }

    impl KeyEmitter for Recorder {
        fn write_events(&mut self, events: &[RawEvent]) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::other("device gone"));
            }
            self.batches.push(events.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_emit_pairs_key_with_syn() {
        let mut recorder = Recorder::default();
        recorder.emit(Key::ESC, Action::Press).unwrap();
        recorder.emit(Key::ESC, Action::Release).unwrap();

        assert_eq!(recorder.batches.len(), 2);
        assert_eq!(
            recorder.batches[0],
            vec![RawEvent::key(Key::ESC, Action::Press), RawEvent::syn()]
        );
        assert_eq!(
            recorder.batches[1],
            vec![RawEvent::key(Key::ESC, Action::Release), RawEvent::syn()]
        );
    }

    #[test]
    fn test_emit_error_names_key() {
        let mut recorder = Recorder {
            fail: true,
            ..Default::default()
        };
        let err = recorder.emit(Key::F1, Action::Press).unwrap_err();
        assert_eq!(err.to_string(), "Failed to send key F1 (press): device gone");
    }
}
