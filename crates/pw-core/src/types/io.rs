use chrono::{DateTime, Utc};
use pw_events::types::{ActivityId, Status, Subject};
use serde::{Deserialize, Serialize};

/// Fields supplied by whoever reports an activity. Missing id and timestamp
/// are filled in at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivityInput {
    #[serde(default)]
    pub id: Option<ActivityId>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub agent: String,
    pub action: String,
    pub description: String,
    pub status: Status,
    #[serde(default)]
    pub subject: Option<Subject>,
}

impl NewActivityInput {
    pub fn new(
        agent: impl Into<String>,
        action: impl Into<String>,
        description: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            id: None,
            timestamp: None,
            agent: agent.into(),
            action: action.into(),
            description: description.into(),
            status,
            subject: None,
        }
    }

    #[must_use]
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subject = Some(subject);
        self
    }
}
