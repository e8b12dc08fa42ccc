// Altalt Event Loop Tests
//
// Drives EventLoop over scripted devices until the stream ends.

mod common;

use altalt_core::{
    Action, DeviceError, EventLoop, Key, KeyMapping, KeyTable, RawEvent, SessionPhase,
    SessionStateMachine, TableRegistry, TapLevel, DEFAULT_MODIFIER,
};
use common::{press, release, repeat, taps, RecordingEmitter, ScriptedDevice};

const ALT: Key = DEFAULT_MODIFIER;

fn session() -> SessionStateMachine {
    let tables = TableRegistry::new().with_table(
        TapLevel::Double,
        KeyTable::new(vec![KeyMapping::new(Key::KEY_1, Key::ESC, false)]),
    );
    SessionStateMachine::new(tables, ALT)
}

/// Interleave a SYN_REPORT after every event, as the kernel reports them
fn with_syn(events: Vec<RawEvent>) -> Vec<RawEvent> {
    events
        .into_iter()
        .flat_map(|e| [e, RawEvent::syn()])
        .collect()
}

#[test]
fn test_run_translates_until_end_of_stream() {
    let mut script = taps(ALT, 2);
    script.extend([press(Key::KEY_1), repeat(Key::KEY_1), release(Key::KEY_1)]);
    let device = ScriptedDevice::new(with_syn(script));

    let mut event_loop = EventLoop::new(device, RecordingEmitter::default(), session());
    let err = event_loop.run();

    assert!(matches!(err, DeviceError::EndOfStream));
    assert_eq!(event_loop.processed(), 14);
    assert_eq!(
        event_loop.output().keys(),
        vec![
            (Key::ESC, Action::Press),
            (Key::KEY_1, Action::Repeat),
            (Key::ESC, Action::Release),
        ]
    );
}

#[test]
fn test_end_of_stream_releases_grab() {
    let device = ScriptedDevice::new(taps(ALT, 2));
    let mut event_loop = EventLoop::new(device, RecordingEmitter::default(), session());

    // armed when the stream runs dry
    for _ in 0..4 {
        event_loop.step().unwrap();
    }
    assert!(event_loop.device().grabbed);
    assert_eq!(event_loop.session().phase(), SessionPhase::ArmedIdle);

    let err = event_loop.run();
    assert!(matches!(err, DeviceError::EndOfStream));

    let (device, output, session) = event_loop.into_parts();
    assert!(!device.grabbed);
    assert_eq!(device.ungrabs, 1);
    assert!(output.events.is_empty());
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[test]
fn test_read_error_stops_loop() {
    let mut device = ScriptedDevice::new(taps(ALT, 2));
    device.read_error = true;

    let mut event_loop = EventLoop::new(device, RecordingEmitter::default(), session());
    let err = event_loop.run();

    assert!(matches!(err, DeviceError::Read(_)));
    assert!(!event_loop.device().grabbed);
}

#[test]
fn test_idle_end_of_stream_does_not_ungrab() {
    let device = ScriptedDevice::new(Vec::new());
    let mut event_loop = EventLoop::new(device, RecordingEmitter::default(), session());

    assert!(matches!(event_loop.run(), DeviceError::EndOfStream));
    assert_eq!(event_loop.processed(), 0);
    assert_eq!(event_loop.device().ungrabs, 0);
}

#[test]
fn test_step_reports_end_of_stream() {
    let device = ScriptedDevice::new([press(Key::A)]);
    let mut event_loop = EventLoop::new(device, RecordingEmitter::default(), session());

    assert!(event_loop.step().is_ok());
    assert!(matches!(event_loop.step(), Err(DeviceError::EndOfStream)));
}
