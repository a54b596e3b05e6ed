use crate::dashboard::core::{CameraFeedState, Model};
use crate::inspection::{ComponentCheck, PlasticCheck};

/// Visual weight of a value, mapped to colors by the display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Good,
    Alarm,
    Caution,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedView {
    /// No camera-status response yet.
    Connecting,
    /// Camera healthy; show the live stream.
    Stream,
    Offline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckRow {
    pub name: &'static str,
    pub detail: &'static str,
    pub value: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewModel {
    /// No bottle inspected yet: placeholder only, no feed, no cards.
    Waiting,
    Live {
        feed: FeedView,
        feed_caption: &'static str,
        banner_text: String,
        banner_tone: Tone,
        checks: Vec<CheckRow>,
        bottle_number: u32,
        timestamp: String,
    },
}

/// Derive the whole visual state from the model. Stateless; every visual
/// decision lives here so displays only map tones to colors.
pub fn view(model: &Model) -> ViewModel {
    let record = match &model.current {
        Some(record) => record,
        None => return ViewModel::Waiting,
    };

    let (feed, feed_caption) = match model.camera {
        CameraFeedState::Active => (FeedView::Stream, "Live"),
        CameraFeedState::Loading => (FeedView::Connecting, "Loading..."),
        CameraFeedState::Error => (FeedView::Offline, "Offline"),
    };

    let banner_tone = if record.is_defective() {
        Tone::Alarm
    } else {
        Tone::Good
    };

    let checks = vec![
        CheckRow {
            name: "Cap",
            detail: "Bottle cap inspection",
            value: record.cap.to_string(),
            tone: component_tone(record.cap),
        },
        CheckRow {
            name: "Label",
            detail: "Label presence check",
            value: record.label.to_string(),
            tone: component_tone(record.label),
        },
        CheckRow {
            name: "Plastic Quality",
            detail: "Damage detection",
            value: record.plastic.to_string(),
            tone: plastic_tone(record.plastic),
        },
    ];

    ViewModel::Live {
        feed,
        feed_caption,
        banner_text: record.status.to_string(),
        banner_tone,
        checks,
        bottle_number: record.bottle_number,
        timestamp: format!("{} {} {}", record.day, record.date, record.time),
    }
}

fn component_tone(check: ComponentCheck) -> Tone {
    match check {
        ComponentCheck::Detected => Tone::Good,
        ComponentCheck::Missing => Tone::Alarm,
        ComponentCheck::Unknown => Tone::Caution,
    }
}

fn plastic_tone(check: PlasticCheck) -> Tone {
    match check {
        PlasticCheck::Good => Tone::Good,
        PlasticCheck::Damaged => Tone::Alarm,
    }
}
