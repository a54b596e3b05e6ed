use crate::dashboard::core::{Effect, Event};
use crate::dashboard::main::Dashboard;
use crate::dashboard::tests::fixture::Fixture;
use std::sync::mpsc::channel;
use std::thread;

/// Close the event channel the way a finished run loop does: the receiver
/// goes away and every pending send starts failing.
fn close_event_channel(dashboard: &Dashboard) {
    let (_sender, replacement) = channel::<Event>();
    let mut receiver = dashboard.event_receiver.lock().unwrap();
    drop(std::mem::replace(&mut *receiver, replacement));
}

#[test]
fn poll_loops_stop_when_the_event_channel_closes() {
    let f = Fixture::new();
    close_event_channel(&f.dashboard);

    let current = f.dashboard.clone();
    let current = thread::spawn(move || current.interpret_effect(Effect::SubscribeCurrentPoll));
    let camera = f.dashboard.clone();
    let camera = thread::spawn(move || camera.interpret_effect(Effect::SubscribeCameraHealthPoll));

    // Hangs here if either loop keeps polling a closed channel.
    current.join().unwrap();
    camera.join().unwrap();
}

#[test]
fn repeat_timer_stops_when_the_event_channel_closes() {
    let f = Fixture::new();
    close_event_channel(&f.dashboard);

    let runner = f.dashboard.clone();
    let runner = thread::spawn(move || {
        runner.interpret_effect(Effect::StartAlertRepeat { epoch: 1 })
    });
    runner.join().unwrap();

    assert_eq!(f.device_alert.plays(), 0);
    assert_eq!(f.device_alert.fallback_plays(), 0);
}
