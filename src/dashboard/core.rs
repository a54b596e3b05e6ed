use crate::backend::interface::CameraHealth;
use crate::inspection::ClassificationRecord;

#[derive(Debug, Clone, Default)]
pub struct Model {
    /// Most recently fetched non-null record. Replaced wholesale on every
    /// successful poll, retained on failure or null.
    pub current: Option<ClassificationRecord>,
    pub camera: CameraFeedState,
    pub alert: AlertState,
    /// Monotonic counter handing out alert timer epochs. A start or stop
    /// for an older epoch is ignored downstream, so stale timers can never
    /// displace a newer one.
    pub alert_seq: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CameraFeedState {
    #[default]
    Loading,
    Active,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertState {
    #[default]
    Idle,
    Looping {
        epoch: u64,
    },
}

#[derive(Debug)]
pub enum Event {
    CurrentFetchDone(
        Result<Option<ClassificationRecord>, Box<dyn std::error::Error + Send + Sync>>,
    ),
    CameraHealthFetchDone(Result<CameraHealth, Box<dyn std::error::Error + Send + Sync>>),
    AlertTick { epoch: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    SubscribeCurrentPoll,
    SubscribeCameraHealthPoll,
    SubscribeVideoFeed,
    PlayAlert,
    StartAlertRepeat { epoch: u64 },
    StopAlertRepeat { epoch: u64 },
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model::default(),
        vec![
            Effect::SubscribeCurrentPoll,
            Effect::SubscribeCameraHealthPoll,
            Effect::SubscribeVideoFeed,
        ],
    )
}

pub fn transition(model: Model, event: Event) -> (Model, Vec<Effect>) {
    match event {
        Event::CurrentFetchDone(Ok(Some(record))) => {
            let was_defective = model
                .current
                .as_ref()
                .map(|r| r.is_defective())
                .unwrap_or(false);
            let is_defective = record.is_defective();

            let mut next = Model {
                current: Some(record),
                ..model
            };

            // The alert loop reacts to the status edge, not to every poll
            // tick carrying the same status.
            if is_defective && !was_defective {
                let mut effects = stop_effects(&next.alert);
                next.alert_seq += 1;
                let epoch = next.alert_seq;
                next.alert = AlertState::Looping { epoch };
                effects.push(Effect::PlayAlert);
                effects.push(Effect::StartAlertRepeat { epoch });
                (next, effects)
            } else if !is_defective && was_defective {
                let effects = stop_effects(&next.alert);
                next.alert = AlertState::Idle;
                (next, effects)
            } else {
                (next, vec![])
            }
        }

        // A null record means no bottle has been inspected yet; keep
        // whatever was displayed before.
        Event::CurrentFetchDone(Ok(None)) => (model, vec![]),
        // Fetch failures retain the last known good record. The next poll
        // tick is the retry.
        Event::CurrentFetchDone(Err(_)) => (model, vec![]),

        Event::CameraHealthFetchDone(Ok(health)) => {
            let camera = if health.is_healthy() {
                CameraFeedState::Active
            } else {
                CameraFeedState::Error
            };
            (Model { camera, ..model }, vec![])
        }
        Event::CameraHealthFetchDone(Err(_)) => (
            Model {
                camera: CameraFeedState::Error,
                ..model
            },
            vec![],
        ),

        Event::AlertTick { epoch } => match model.alert {
            AlertState::Looping { epoch: active } if active == epoch => {
                (model, vec![Effect::PlayAlert])
            }
            // Ticks from a cancelled timer carry a stale epoch.
            _ => (model, vec![]),
        },
    }
}

fn stop_effects(alert: &AlertState) -> Vec<Effect> {
    match alert {
        AlertState::Looping { epoch } => vec![Effect::StopAlertRepeat { epoch: *epoch }],
        AlertState::Idle => vec![],
    }
}
