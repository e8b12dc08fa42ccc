// Altalt Input Layer
// Raw events from the physical keyboard and exclusive access to it

#[cfg(feature = "uinput")]
mod device;
mod event;

use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;

#[cfg(feature = "uinput")]
pub use device::PhysicalKeyboard;
pub use event::{is_key_event, RawEvent, EV_KEY, EV_SYN, SYN_REPORT};

/// Errors from the physical input device
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Could not open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input event: {0}")]
    Read(#[source] io::Error),

    #[error("Input event stream ended")]
    EndOfStream,
}

/// Consecutive empty reads tolerated before the stream counts as ended
pub const MAX_EMPTY_READS: usize = 8;

/// Blocking, ordered source of raw input events.
///
/// Any error ends the stream.
pub trait EventSource {
    fn next_event(&mut self) -> Result<RawEvent, DeviceError>;
}

/// Exclusive access to the physical device (EVIOCGRAB).
///
/// While grabbed, the device's events reach only this process.
pub trait DeviceGrab {
    fn grab(&mut self) -> io::Result<()>;
    fn ungrab(&mut self) -> io::Result<()>;
}

impl<T: EventSource + ?Sized> EventSource for &mut T {
    fn next_event(&mut self) -> Result<RawEvent, DeviceError> {
        (**self).next_event()
    }
}

impl<T: DeviceGrab + ?Sized> DeviceGrab for &mut T {
    fn grab(&mut self) -> io::Result<()> {
        (**self).grab()
    }

    fn ungrab(&mut self) -> io::Result<()> {
        (**self).ungrab()
    }
}

/// Pop the next buffered event, refilling from `read` when the buffer is empty.
///
/// An empty batch (a resync after SYN_DROPPED that changed nothing) is read
/// again. Only `MAX_EMPTY_READS` empty batches in a row end the stream.
pub(crate) fn next_buffered<F>(
    pending: &mut VecDeque<RawEvent>,
    mut read: F,
) -> Result<RawEvent, DeviceError>
where
    F: FnMut(&mut VecDeque<RawEvent>) -> io::Result<()>,
{
    for attempt in 0..MAX_EMPTY_READS {
        if let Some(event) = pending.pop_front() {
            return Ok(event);
        }
        if attempt > 0 {
            log::debug!("Empty read from input device, reading again");
        }
        read(pending).map_err(DeviceError::Read)?;
    }
    pending.pop_front().ok_or(DeviceError::EndOfStream)
}
