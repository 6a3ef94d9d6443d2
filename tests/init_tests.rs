// Host-side tests for audio start-up: voice creation, routing and the
// button's enabled state.

mod common;

use common::{EventLog, FakeButton, FakeFactory};
use sonic_canvas_core::*;

fn log() -> EventLog {
    EventLog::default()
}

fn events(log: &EventLog) -> Vec<String> {
    log.borrow().clone()
}

#[test]
fn ready_voice_is_connected_then_button_enabled() {
    let log = log();
    let factory = FakeFactory::new(&log);
    let button = FakeButton::new(&log);

    let ready = pollster::block_on(initialize(
        &factory,
        &button,
        DSP_UNIT_NAME,
        DSP_VOICE_MODE,
    ))
    .unwrap();

    assert_eq!(
        events(&log),
        vec!["disable", "create sounds", "connect", "enable"]
    );
    assert!(button.enabled.get());
    assert!(ready.voice.writes.borrow().is_empty());
}

#[test]
fn missing_node_is_dsp_unavailable_and_button_stays_disabled() {
    let log = log();
    let factory = FakeFactory {
        node_available: false,
        ..FakeFactory::new(&log)
    };
    let button = FakeButton::new(&log);

    let err = pollster::block_on(initialize(&factory, &button, "sounds", 0))
        .err()
        .unwrap();

    match err {
        AudioError::DspUnavailable { unit } => assert_eq!(unit, "sounds"),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(events(&log), vec!["disable", "create sounds"]);
    assert!(!button.enabled.get());
}

#[test]
fn connect_failure_keeps_button_disabled() {
    let log = log();
    let factory = FakeFactory {
        connect_fails: true,
        ..FakeFactory::new(&log)
    };
    let button = FakeButton::new(&log);

    let err = pollster::block_on(initialize(&factory, &button, "sounds", 0))
        .err()
        .unwrap();

    assert!(matches!(err, AudioError::Context(_)));
    assert_eq!(events(&log), vec!["disable", "create sounds", "connect"]);
    assert!(!button.enabled.get());
}

#[test]
fn unreadable_descriptors_still_enable_the_button() {
    let log = log();
    let factory = FakeFactory {
        descriptors: None,
        ..FakeFactory::new(&log)
    };
    let button = FakeButton::new(&log);

    let ready = pollster::block_on(initialize(&factory, &button, "sounds", 0)).unwrap();

    assert!(ready.descriptors.is_empty());
    assert!(button.enabled.get());
}

#[test]
fn descriptors_reach_the_ready_voice() {
    let log = log();
    let factory = FakeFactory {
        descriptors: Some(vec![ParamDescriptor {
            address: CUTOFF_ADDRESS.to_string(),
            label: "Cutoff".to_string(),
            min: Some(300.0),
            max: Some(2000.0),
        }]),
        ..FakeFactory::new(&log)
    };
    let button = FakeButton::new(&log);

    let ready = pollster::block_on(initialize(&factory, &button, "sounds", 0)).unwrap();
    assert_eq!(ready.descriptors.len(), 1);
    assert_eq!(ready.descriptors.clamp(CUTOFF_ADDRESS, 2400.0), 2000.0);
}
