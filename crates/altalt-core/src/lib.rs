// Altalt Core Library
// Double/triple-tap modifier remapping for evdev keyboards

pub mod action;
pub mod config;
pub mod event;
pub mod input;
pub mod key;
pub mod output;
pub mod profile;
pub mod session;
pub mod table;
pub mod translate;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use event::EventLoop;
pub use input::{is_key_event, DeviceError, DeviceGrab, EventSource, RawEvent};
pub use key::{Key, KeyParseError};
pub use output::{EmitError, KeyEmitter};
pub use profile::{Profile, ProfileError, ProfileRegistry, ProfileSelection, DEFAULT_PROFILE};
pub use session::{SessionPhase, SessionState, SessionStateMachine, DEFAULT_MODIFIER, MAX_TAPS};
pub use table::{KeyMapping, KeyTable, TableRegistry, TapLevel};

#[cfg(feature = "uinput")]
pub use input::PhysicalKeyboard;
#[cfg(feature = "uinput")]
pub use output::VirtualKeyboard;
