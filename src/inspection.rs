use serde::Deserialize;
use std::fmt;

/// One classification result as published by the detection backend.
/// The backend owns the shape; this side only reads it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassificationRecord {
    #[serde(rename = "Bottle Number")]
    pub bottle_number: u32,
    #[serde(rename = "Cap")]
    pub cap: ComponentCheck,
    #[serde(rename = "Label")]
    pub label: ComponentCheck,
    #[serde(rename = "Plastic")]
    pub plastic: PlasticCheck,
    #[serde(rename = "Status")]
    pub status: OverallStatus,
    #[serde(rename = "Day")]
    pub day: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    /// Hint published by the backend. The alert loop is driven by `status`
    /// alone and never reads this field.
    #[serde(rename = "play_alert", default)]
    pub play_alert: Option<bool>,
}

/// Cap and label checks. The backend reports "--" before the first
/// inspection completes; anything that is not a known value lands in
/// `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum ComponentCheck {
    Detected,
    Missing,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum PlasticCheck {
    Good,
    #[serde(other)]
    Damaged,
}

/// The backend's overall verdict, taken verbatim. Sub-checks are never
/// recombined on this side.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum OverallStatus {
    Defective,
    #[serde(other)]
    NonDefective,
}

impl ClassificationRecord {
    pub fn is_defective(&self) -> bool {
        self.status == OverallStatus::Defective
    }
}

impl fmt::Display for ComponentCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentCheck::Detected => write!(f, "Detected"),
            ComponentCheck::Missing => write!(f, "Missing"),
            ComponentCheck::Unknown => write!(f, "Unknown"),
        }
    }
}

impl fmt::Display for PlasticCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlasticCheck::Good => write!(f, "Good"),
            PlasticCheck::Damaged => write!(f, "Damaged"),
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverallStatus::Defective => write!(f, "Defective"),
            OverallStatus::NonDefective => write!(f, "Non-Defective"),
        }
    }
}
