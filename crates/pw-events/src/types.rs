use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActivityId(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("activity id must not be empty")]
    Empty,
    #[error("activity id must not contain whitespace: {value:?}")]
    Whitespace { value: String },
}

impl ActivityId {
    pub const PREFIX: &'static str = "act-";

    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(IdError::Whitespace { value });
        }
        Ok(Self(value))
    }

    pub fn generate() -> Self {
        Self(format!(
            "{}{}",
            Self::PREFIX,
            Ulid::new().to_string().to_lowercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ActivityId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ActivityId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActivityId> for String {
    fn from(value: ActivityId) -> Self {
        value.0
    }
}

/// Outcome severity of a logged activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status: {value:?}")]
pub struct UnknownStatus {
    pub value: String,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Success,
        Status::Error,
        Status::Warning,
        Status::Info,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Success => "success",
            Status::Error => "error",
            Status::Warning => "warning",
            Status::Info => "info",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus {
                value: s.to_string(),
            })
    }
}

/// Person an activity concerns. Informational only; nothing checks that the
/// external id resolves anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub name: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Subject {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            avatar: None,
        }
    }

    /// First letter of each name part, e.g. "Sarah Johnson" -> "SJ".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActivityRecord {
    pub id: ActivityId,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub timestamp: DateTime<Utc>,
    pub agent: String,
    pub action: String,
    pub description: String,
    pub status: Status,
    #[serde(default, alias = "employee", skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
}

impl ActivityRecord {
    pub fn headline(&self) -> String {
        format!("{} - {}", self.agent, self.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_id_rejects_empty_and_whitespace() {
        assert_eq!(ActivityId::new(""), Err(IdError::Empty));
        assert!(matches!(
            ActivityId::new("act 001"),
            Err(IdError::Whitespace { .. })
        ));
        assert_eq!(ActivityId::new("act-001").unwrap().as_str(), "act-001");
    }

    #[test]
    fn test_generated_ids_are_prefixed_and_distinct() {
        let a = ActivityId::generate();
        let b = ActivityId::generate();
        assert!(a.as_str().starts_with(ActivityId::PREFIX));
        assert_eq!(a.as_str().len(), ActivityId::PREFIX.len() + 26);
        assert_ne!(a, b);
    }

    #[test]
    fn test_status_parses_lowercase_only() {
        assert_eq!("warning".parse::<Status>(), Ok(Status::Warning));
        assert!("Warning".parse::<Status>().is_err());
        assert!("pending".parse::<Status>().is_err());
    }

    #[test]
    fn test_subject_initials() {
        assert_eq!(Subject::new("Sarah Johnson", "emp-123").initials(), "SJ");
        assert_eq!(Subject::new("  Michael   Chen ", "emp-456").initials(), "MC");
        assert_eq!(Subject::new("", "emp-000").initials(), "");
    }

    #[test]
    fn test_record_json_shape() {
        let json = r#"{
            "id": "act-005",
            "timestamp": "2025-07-12T17:34:10Z",
            "agent": "Workflow Orchestrator",
            "action": "Human Intervention",
            "description": "Requested human review.",
            "status": "info",
            "subject": {"name": "Michael Chen", "id": "emp-456"}
        }"#;
        let record: ActivityRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, Status::Info);
        assert_eq!(record.headline(), "Workflow Orchestrator - Human Intervention");
        assert_eq!(record.subject.as_ref().map(Subject::initials).as_deref(), Some("MC"));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["status"], "info");
        assert_eq!(value["id"], "act-005");
        assert!(value["subject"].get("avatar").is_none());
    }

    #[test]
    fn test_record_accepts_employee_key_and_naive_timestamp() {
        let json = r#"{
            "id": "act-006",
            "timestamp": "2025-07-12 17:35:22",
            "agent": "Workflow Orchestrator",
            "action": "Correction Application",
            "description": "Applied approved correction.",
            "status": "success",
            "employee": {"name": "Sarah Johnson", "id": "emp-123", "avatar": "/placeholder.svg"}
        }"#;
        let record: ActivityRecord = serde_json::from_str(json).unwrap();
        let subject = record.subject.as_ref().unwrap();
        assert_eq!((subject.name.as_str(), subject.id.as_str()), ("Sarah Johnson", "emp-123"));
        assert_eq!(record.timestamp.to_rfc3339(), "2025-07-12T17:35:22+00:00");

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["subject"]["name"], "Sarah Johnson");
        assert!(value.get("employee").is_none());
    }

    #[test]
    fn test_record_rejects_unknown_fields() {
        let json = r#"{"id": "act-001", "timestamp": "2025-07-12T17:30:22Z", "agent": "a",
            "action": "b", "description": "c", "status": "info", "worker": {"name": "x"}}"#;
        let err = serde_json::from_str::<ActivityRecord>(json).unwrap_err();
        assert!(err.to_string().contains("worker"));
    }

    #[test]
    fn test_record_rejects_blank_id() {
        let json = r#"{"id": "", "timestamp": "2025-07-12T17:34:10Z", "agent": "a",
            "action": "b", "description": "c", "status": "info"}"#;
        assert!(serde_json::from_str::<ActivityRecord>(json).is_err());
    }
}
