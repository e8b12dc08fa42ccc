// Shared fakes for scenario tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use altalt_core::{Action, DeviceError, DeviceGrab, EventSource, Key, KeyEmitter, RawEvent};

/// Input device replaying a fixed script, with grab bookkeeping
#[derive(Default)]
pub struct ScriptedDevice {
    pub events: VecDeque<RawEvent>,
    pub grabbed: bool,
    pub grabs: usize,
    pub ungrabs: usize,
    pub fail_grab: bool,
    pub fail_ungrab: bool,
    /// Fail with a read error instead of end-of-stream once the script runs out
    pub read_error: bool,
}

impl ScriptedDevice {
    pub fn new(events: impl IntoIterator<Item = RawEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Default::default()
        }
    }
}

impl EventSource for ScriptedDevice {
    fn next_event(&mut self) -> Result<RawEvent, DeviceError> {
        match self.events.pop_front() {
            Some(event) => Ok(event),
            None if self.read_error => Err(DeviceError::Read(io::Error::other("device gone"))),
            None => Err(DeviceError::EndOfStream),
        }
    }
}

impl DeviceGrab for ScriptedDevice {
    fn grab(&mut self) -> io::Result<()> {
        self.grabs += 1;
        if self.fail_grab {
            return Err(io::Error::other("grabbed elsewhere"));
        }
        self.grabbed = true;
        Ok(())
    }

    fn ungrab(&mut self) -> io::Result<()> {
        self.ungrabs += 1;
        if self.fail_ungrab {
            return Err(io::Error::other("ungrab rejected"));
        }
        self.grabbed = false;
        Ok(())
    }
}

/// Emitter recording every raw event written to it
#[derive(Default)]
pub struct RecordingEmitter {
    pub events: Vec<RawEvent>,
    pub writes: usize,
    pub fail_on: Option<Key>,
}

impl RecordingEmitter {
    /// Key events only, as (key, action)
    pub fn keys(&self) -> Vec<(Key, Action)> {
        self.events
            .iter()
            .filter_map(|e| e.action().map(|a| (Key(e.code), a)))
            .collect()
    }
}

impl KeyEmitter for RecordingEmitter {
    fn write_events(&mut self, events: &[RawEvent]) -> io::Result<()> {
        self.writes += 1;
        if events.iter().any(|e| e.is_key() && Some(Key(e.code)) == self.fail_on) {
            return Err(io::Error::other("write rejected"));
        }
        self.events.extend_from_slice(events);
        Ok(())
    }
}

pub fn press(key: Key) -> RawEvent {
    RawEvent::key(key, Action::Press)
}

pub fn release(key: Key) -> RawEvent {
    RawEvent::key(key, Action::Release)
}

pub fn repeat(key: Key) -> RawEvent {
    RawEvent::key(key, Action::Repeat)
}

/// `count` full taps of `modifier`
pub fn taps(modifier: Key, count: usize) -> Vec<RawEvent> {
    (0..count)
        .flat_map(|_| [press(modifier), release(modifier)])
        .collect()
}
