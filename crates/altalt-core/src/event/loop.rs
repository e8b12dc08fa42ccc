// Altalt Event Loop
// Reads one event at a time and feeds it through the session

use crate::input::{DeviceError, DeviceGrab, EventSource};
use crate::output::KeyEmitter;
use crate::session::SessionStateMachine;

/// Drives a session from an input device to a synthetic keyboard.
///
/// Single-threaded: each event is fully handled, including every synthetic
/// write and grab change, before the next one is read.
pub struct EventLoop<D, E> {
    device: D,
    output: E,
    session: SessionStateMachine,
    processed: u64,
}

impl<D, E> EventLoop<D, E>
where
    D: EventSource + DeviceGrab,
    E: KeyEmitter,
{
    pub fn new(device: D, output: E, session: SessionStateMachine) -> Self {
        Self {
            device,
            output,
            session,
            processed: 0,
        }
    }

    pub fn session(&self) -> &SessionStateMachine {
        &self.session
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn output(&self) -> &E {
        &self.output
    }

    /// Number of events read so far
    pub fn processed(&self) -> u64 {
        self.processed
    }

    /// Read and handle a single event
    pub fn step(&mut self) -> Result<(), DeviceError> {
        let event = self.device.next_event()?;
        self.processed += 1;
        self.session.handle_event(event, &mut self.device, &mut self.output);
        Ok(())
    }

    /// Run until the event source fails.
    ///
    /// A failing source ends the loop: the grab is released, the session is
    /// reset and the error that stopped the stream is returned.
    pub fn run(&mut self) -> DeviceError {
        loop {
            if let Err(e) = self.step() {
                log::info!("Event stream stopped after {} events: {}", self.processed, e);
                self.session.shutdown(&mut self.device);
                return e;
            }
        }
    }

    pub fn into_parts(self) -> (D, E, SessionStateMachine) {
        (self.device, self.output, self.session)
    }
}
