//! The activity log the supervision dashboard starts with: one payroll period
//! run through collection, anomaly detection, policy checks, correction and a
//! Clockify outage.

use crate::error::PaywatchError;
use chrono::{DateTime, Utc};
use pw_events::store::ActivityStore;
use pw_events::timestamp;
use pw_events::types::{ActivityId, ActivityRecord, Status, Subject};

const AVATAR_PLACEHOLDER: &str = "/placeholder.svg?height=40&width=40";

struct SeedEntry {
    id: &'static str,
    at: &'static str,
    agent: &'static str,
    action: &'static str,
    description: &'static str,
    status: Status,
    subject: Option<(&'static str, &'static str)>,
}

const ENTRIES: [SeedEntry; 8] = [
    SeedEntry {
        id: "act-001",
        at: "2025-07-12 17:30:22",
        agent: "Timesheet Collector",
        action: "Data Collection",
        description: "Successfully pulled timesheet data from Clockify API for period July 1-15, 2025.",
        status: Status::Success,
        subject: None,
    },
    SeedEntry {
        id: "act-002",
        at: "2025-07-12 17:31:05",
        agent: "Anomaly Detector",
        action: "Anomaly Detection",
        description: "Detected 5 potential anomalies in timesheet data for period July 1-15, 2025.",
        status: Status::Info,
        subject: None,
    },
    SeedEntry {
        id: "act-003",
        at: "2025-07-12 17:32:18",
        agent: "Policy Enforcer",
        action: "Policy Validation",
        description: "Validated anomalies against company policies. 3 confirmed policy violations.",
        status: Status::Warning,
        subject: None,
    },
    SeedEntry {
        id: "act-004",
        at: "2025-07-12 17:33:42",
        agent: "Correction Proposer",
        action: "Correction Generation",
        description: "Generated correction proposals for 3 confirmed anomalies.",
        status: Status::Success,
        subject: None,
    },
    SeedEntry {
        id: "act-005",
        at: "2025-07-12 17:34:10",
        agent: "Workflow Orchestrator",
        action: "Human Intervention",
        description: "Requested human review for overtime anomaly for employee Michael Chen.",
        status: Status::Info,
        subject: Some(("Michael Chen", "emp-456")),
    },
    SeedEntry {
        id: "act-006",
        at: "2025-07-12 17:35:22",
        agent: "Workflow Orchestrator",
        action: "Correction Application",
        description: "Applied approved correction for missing time entry for employee Sarah Johnson.",
        status: Status::Success,
        subject: Some(("Sarah Johnson", "emp-123")),
    },
    SeedEntry {
        id: "act-007",
        at: "2025-07-12 17:36:15",
        agent: "Timesheet Collector",
        action: "API Error",
        description: "Failed to connect to Clockify API. Retrying in 5 minutes.",
        status: Status::Error,
        subject: None,
    },
    SeedEntry {
        id: "act-008",
        at: "2025-07-12 17:40:33",
        agent: "Timesheet Collector",
        action: "API Recovery",
        description: "Successfully reconnected to Clockify API after retry.",
        status: Status::Success,
        subject: None,
    },
];

pub fn activity_records() -> Result<Vec<ActivityRecord>, PaywatchError> {
    ENTRIES.iter().map(to_record).collect()
}

pub fn activity_log() -> Result<ActivityStore, PaywatchError> {
    Ok(ActivityStore::from_records(activity_records()?)?)
}

fn to_record(entry: &SeedEntry) -> Result<ActivityRecord, PaywatchError> {
    Ok(ActivityRecord {
        id: ActivityId::new(entry.id)?,
        timestamp: parse_timestamp(entry.at)?,
        agent: entry.agent.to_string(),
        action: entry.action.to_string(),
        description: entry.description.to_string(),
        status: entry.status,
        subject: entry.subject.map(|(name, id)| Subject {
            avatar: Some(AVATAR_PLACEHOLDER.to_string()),
            ..Subject::new(name, id)
        }),
    })
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, PaywatchError> {
    timestamp::parse(value).map_err(|err| PaywatchError::Internal {
        message: format!("bad seed entry: {err}"),
    })
}
