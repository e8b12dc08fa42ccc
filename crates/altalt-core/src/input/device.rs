// Altalt Input Layer - Physical Keyboard
// evdev-backed event source with grab support

use std::collections::VecDeque;
use std::io;
use std::path::Path;

use evdev::Device;

use super::{next_buffered, DeviceError, DeviceGrab, EventSource, RawEvent};

/// The physical keyboard whose keys are translated.
///
/// Events fetched from the kernel in one read are buffered and handed out
/// one at a time in their original order. An empty batch is read again.
/// Dropping the keyboard releases a grab that is still held.
pub struct PhysicalKeyboard {
    device: Device,
    pending: VecDeque<RawEvent>,
    grabbed: bool,
}

impl PhysicalKeyboard {
    /// Open the event device node at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DeviceError> {
        let path = path.as_ref().to_path_buf();
        let device = Device::open(&path).map_err(|source| DeviceError::Open {
            path: path.clone(),
            source,
        })?;
        log::debug!("Opened {}", path.display());
        Ok(Self {
            device,
            pending: VecDeque::new(),
            grabbed: false,
        })
    }

    /// Name reported by the kernel driver
    pub fn name(&self) -> &str {
        self.device.name().unwrap_or("Unknown")
    }
}

impl EventSource for PhysicalKeyboard {
    fn next_event(&mut self) -> Result<RawEvent, DeviceError> {
        let device = &mut self.device;
        next_buffered(&mut self.pending, |pending| {
            pending.extend(device.fetch_events()?.map(RawEvent::from));
            Ok(())
        })
    }
}

impl DeviceGrab for PhysicalKeyboard {
    fn grab(&mut self) -> io::Result<()> {
        self.device.grab()?;
        self.grabbed = true;
        Ok(())
    }

    fn ungrab(&mut self) -> io::Result<()> {
        // Considered released whatever the ioctl reports
        self.grabbed = false;
        self.device.ungrab()
    }
}

impl Drop for PhysicalKeyboard {
    fn drop(&mut self) {
        if self.grabbed {
            let _ = self.device.ungrab();
        }
    }
}
