use pw_events::types::Status;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    CheckCircle,
    XCircle,
    AlertCircle,
    Clock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Red,
    Amber,
    Blue,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DisplayCategory {
    pub icon: IconKind,
    pub label: &'static str,
    pub tone: Tone,
}

impl DisplayCategory {
    pub const SUCCESS: Self = Self {
        icon: IconKind::CheckCircle,
        label: "Success",
        tone: Tone::Green,
    };
    pub const ERROR: Self = Self {
        icon: IconKind::XCircle,
        label: "Error",
        tone: Tone::Red,
    };
    pub const WARNING: Self = Self {
        icon: IconKind::AlertCircle,
        label: "Warning",
        tone: Tone::Amber,
    };
    pub const INFO: Self = Self {
        icon: IconKind::Clock,
        label: "Info",
        tone: Tone::Blue,
    };
    pub const UNKNOWN: Self = Self {
        icon: IconKind::Clock,
        label: "Unknown",
        tone: Tone::Neutral,
    };
}

pub fn classify_status(status: Status) -> DisplayCategory {
    match status {
        Status::Success => DisplayCategory::SUCCESS,
        Status::Error => DisplayCategory::ERROR,
        Status::Warning => DisplayCategory::WARNING,
        Status::Info => DisplayCategory::INFO,
    }
}

/// Total over arbitrary strings; anything unrecognised renders as unknown.
pub fn classify(status: &str) -> DisplayCategory {
    status
        .parse::<Status>()
        .map_or(DisplayCategory::UNKNOWN, classify_status)
}
