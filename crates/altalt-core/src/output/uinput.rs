// Altalt uinput Output Layer
// Virtual device creation and key event emission

use std::io;

use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, BusType, InputEvent, InputId};

use super::{EmitError, KeyEmitter};
use crate::input::RawEvent;
use crate::Key;

/// Name the synthetic keyboard registers under
pub const VIRTUAL_DEVICE_NAME: &str = "altalt";

const VENDOR_ID: u16 = 0x1234;
const PRODUCT_ID: u16 = 0x5678;

/// Virtual uinput keyboard that receives translated keys
pub struct VirtualKeyboard {
    device: VirtualDevice,
}

impl VirtualKeyboard {
    /// Create the virtual device able to emit exactly `keys`
    pub fn new(keys: &[Key]) -> Result<Self, EmitError> {
        let mut key_set = AttributeSet::<evdev::Key>::new();
        for key in keys {
            key_set.insert(evdev::Key::new(key.code()));
        }

        let device = VirtualDeviceBuilder::new()
            .map_err(EmitError::DeviceCreation)?
            .name(VIRTUAL_DEVICE_NAME)
            .input_id(InputId::new(BusType::BUS_USB, VENDOR_ID, PRODUCT_ID, 0))
            .with_keys(&key_set)
            .map_err(EmitError::DeviceCreation)?
            .build()
            .map_err(EmitError::DeviceCreation)?;

        log::info!(
            "Virtual keyboard '{}' created with {} keys",
            VIRTUAL_DEVICE_NAME,
            keys.len()
        );

        Ok(Self { device })
    }
}

impl KeyEmitter for VirtualKeyboard {
    fn write_events(&mut self, events: &[RawEvent]) -> io::Result<()> {
        let events: Vec<InputEvent> = events.iter().copied().map(InputEvent::from).collect();
        self.device.emit(&events)
    }
}
