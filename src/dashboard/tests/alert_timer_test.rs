use crate::dashboard::core::{Effect, Event};
use crate::dashboard::main::Dashboard;
use crate::dashboard::tests::fixture::Fixture;
use std::thread;
use std::time::Duration;

// The fixture's repeat rate is 20ms; these margins give each timer a few
// chances to fire without making the suite slow.
const SETTLE: Duration = Duration::from_millis(70);

fn drain_tick_epochs(dashboard: &Dashboard) -> Vec<u64> {
    let receiver = dashboard.event_receiver.lock().unwrap();
    let mut epochs = vec![];
    while let Ok(event) = receiver.try_recv() {
        if let Event::AlertTick { epoch } = event {
            epochs.push(epoch);
        }
    }
    epochs
}

#[test]
fn repeat_timer_ticks_until_stopped() {
    let f = Fixture::new();

    let runner = f.dashboard.clone();
    thread::spawn(move || runner.interpret_effect(Effect::StartAlertRepeat { epoch: 1 }));

    thread::sleep(SETTLE);
    let ticks = drain_tick_epochs(&f.dashboard);
    assert!(ticks.len() >= 2, "expected repeated ticks, got {:?}", ticks);
    assert!(ticks.iter().all(|&epoch| epoch == 1));

    f.dashboard
        .interpret_effect(Effect::StopAlertRepeat { epoch: 1 });
    drain_tick_epochs(&f.dashboard);

    thread::sleep(SETTLE);
    let after_stop = drain_tick_epochs(&f.dashboard);
    assert!(
        after_stop.is_empty(),
        "timer kept ticking after stop: {:?}",
        after_stop
    );
}

#[test]
fn start_for_a_stopped_epoch_is_ignored() {
    let f = Fixture::new();

    // The stop arrives first: its epoch becomes the floor, so the late
    // start must return without ever registering a timer.
    f.dashboard
        .interpret_effect(Effect::StopAlertRepeat { epoch: 2 });
    f.dashboard
        .interpret_effect(Effect::StartAlertRepeat { epoch: 1 });

    thread::sleep(SETTLE);
    let ticks = drain_tick_epochs(&f.dashboard);
    assert!(ticks.is_empty(), "stale timer ticked: {:?}", ticks);
}

#[test]
fn newer_timer_cancels_the_older_one() {
    let f = Fixture::new();

    let first = f.dashboard.clone();
    thread::spawn(move || first.interpret_effect(Effect::StartAlertRepeat { epoch: 1 }));
    let second = f.dashboard.clone();
    thread::spawn(move || second.interpret_effect(Effect::StartAlertRepeat { epoch: 2 }));

    thread::sleep(SETTLE);
    drain_tick_epochs(&f.dashboard);

    thread::sleep(SETTLE);
    let ticks = drain_tick_epochs(&f.dashboard);
    assert!(!ticks.is_empty());
    assert!(
        ticks.iter().all(|&epoch| epoch == 2),
        "old timer survived: {:?}",
        ticks
    );

    f.dashboard
        .interpret_effect(Effect::StopAlertRepeat { epoch: 2 });
}

#[test]
fn play_alert_uses_the_primary_device() {
    let f = Fixture::new();

    f.dashboard.interpret_effect(Effect::PlayAlert);

    assert_eq!(f.device_alert.plays(), 1);
    assert_eq!(f.device_alert.fallback_plays(), 0);
}

#[test]
fn play_alert_falls_back_when_the_primary_fails() {
    let f = Fixture::new();
    f.device_alert.set_fail_primary(true);

    f.dashboard.interpret_effect(Effect::PlayAlert);

    assert_eq!(f.device_alert.fallback_plays(), 1);
}
