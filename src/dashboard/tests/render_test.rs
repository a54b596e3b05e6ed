use crate::dashboard::core::{CameraFeedState, Model};
use crate::dashboard::render::{view, FeedView, Tone, ViewModel};
use crate::dashboard::tests::fixture::record;
use crate::inspection::{ComponentCheck, OverallStatus};

#[test]
fn no_record_renders_the_waiting_placeholder() {
    let model = Model::default();
    assert_eq!(view(&model), ViewModel::Waiting);
}

#[test]
fn defective_record_renders_an_alarm_banner_and_flags_the_cap() {
    let mut failed = record(OverallStatus::Defective);
    failed.bottle_number = 12;

    let model = Model {
        current: Some(failed),
        camera: CameraFeedState::Active,
        ..Model::default()
    };

    match view(&model) {
        ViewModel::Live {
            feed,
            feed_caption,
            banner_text,
            banner_tone,
            checks,
            bottle_number,
            timestamp,
        } => {
            assert_eq!(feed, FeedView::Stream);
            assert_eq!(feed_caption, "Live");
            assert_eq!(banner_text, "Defective");
            assert_eq!(banner_tone, Tone::Alarm);
            assert_eq!(bottle_number, 12);
            assert_eq!(timestamp, "Monday 04/08/25 14:03:21");

            assert_eq!(checks.len(), 3);
            assert_eq!(checks[0].name, "Cap");
            assert_eq!(checks[0].value, "Missing");
            assert_eq!(checks[0].tone, Tone::Alarm);
            assert_eq!(checks[1].name, "Label");
            assert_eq!(checks[1].value, "Detected");
            assert_eq!(checks[1].tone, Tone::Good);
            assert_eq!(checks[2].name, "Plastic Quality");
            assert_eq!(checks[2].value, "Good");
            assert_eq!(checks[2].tone, Tone::Good);
        }
        other => panic!("expected live view, got {:?}", other),
    }
}

#[test]
fn clean_record_renders_a_good_banner() {
    let model = Model {
        current: Some(record(OverallStatus::NonDefective)),
        camera: CameraFeedState::Active,
        ..Model::default()
    };

    match view(&model) {
        ViewModel::Live {
            banner_text,
            banner_tone,
            checks,
            ..
        } => {
            assert_eq!(banner_text, "Non-Defective");
            assert_eq!(banner_tone, Tone::Good);
            assert!(checks.iter().all(|c| c.tone == Tone::Good));
        }
        other => panic!("expected live view, got {:?}", other),
    }
}

#[test]
fn camera_error_renders_the_offline_feed() {
    let model = Model {
        current: Some(record(OverallStatus::NonDefective)),
        camera: CameraFeedState::Error,
        ..Model::default()
    };

    match view(&model) {
        ViewModel::Live {
            feed, feed_caption, ..
        } => {
            assert_eq!(feed, FeedView::Offline);
            assert_eq!(feed_caption, "Offline");
        }
        other => panic!("expected live view, got {:?}", other),
    }
}

#[test]
fn camera_loading_renders_the_connecting_feed() {
    let model = Model {
        current: Some(record(OverallStatus::NonDefective)),
        camera: CameraFeedState::Loading,
        ..Model::default()
    };

    match view(&model) {
        ViewModel::Live {
            feed, feed_caption, ..
        } => {
            assert_eq!(feed, FeedView::Connecting);
            assert_eq!(feed_caption, "Loading...");
        }
        other => panic!("expected live view, got {:?}", other),
    }
}

#[test]
fn pre_inspection_checks_render_with_caution_tone() {
    let mut pending = record(OverallStatus::NonDefective);
    pending.cap = ComponentCheck::Unknown;
    pending.label = ComponentCheck::Unknown;

    let model = Model {
        current: Some(pending),
        camera: CameraFeedState::Active,
        ..Model::default()
    };

    match view(&model) {
        ViewModel::Live { checks, .. } => {
            assert_eq!(checks[0].value, "Unknown");
            assert_eq!(checks[0].tone, Tone::Caution);
            assert_eq!(checks[1].tone, Tone::Caution);
        }
        other => panic!("expected live view, got {:?}", other),
    }
}
