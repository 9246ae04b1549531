use crate::activity::ActivityRepository;
use crate::error::{ActivityError, PaywatchError};
use crate::query::{self, ActivityFilter, StatusSummary};
use crate::types::NewActivityInput;
use chrono::Utc;
use pw_events::types::{ActivityId, ActivityRecord};

/// Owns the activity repository and hands it to callers through narrow APIs:
/// `activity()` for reads, `activity_mut()` for appends.
pub struct Supervisor<R: ActivityRepository> {
    activities: R,
}

impl<R: ActivityRepository> Supervisor<R> {
    pub fn new(activities: R) -> Self {
        Self { activities }
    }

    pub fn activity(&self) -> ActivityApi<'_, R> {
        ActivityApi { core: self }
    }

    pub fn activity_mut(&mut self) -> ActivityLogger<'_, R> {
        ActivityLogger { core: self }
    }
}

pub struct ActivityApi<'a, R: ActivityRepository> {
    core: &'a Supervisor<R>,
}

impl<R: ActivityRepository> ActivityApi<'_, R> {
    pub fn all(&self) -> Vec<ActivityRecord> {
        self.core.activities.all()
    }

    pub fn query(&self, filter: &ActivityFilter) -> Vec<ActivityRecord> {
        let records = self.core.activities.all();
        let matched = query::query(&records, filter);
        tracing::debug!(
            text = %filter.text,
            agent = %filter.agent,
            status = %filter.status,
            scanned = records.len(),
            matched = matched.len(),
            "activity query"
        );
        matched
    }

    pub fn agents(&self) -> Vec<String> {
        self.core.activities.distinct_agents()
    }

    pub fn summary(&self, filter: &ActivityFilter) -> StatusSummary {
        StatusSummary::from_records(&self.query(filter))
    }
}

pub struct ActivityLogger<'a, R: ActivityRepository> {
    core: &'a mut Supervisor<R>,
}

impl<R: ActivityRepository> ActivityLogger<'_, R> {
    pub fn append(&mut self, record: ActivityRecord) -> Result<(), PaywatchError> {
        let id = record.id.clone();
        match self.core.activities.append(record) {
            Ok(()) => {
                tracing::info!(id = %id, "activity appended");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "activity rejected");
                Err(err)
            }
        }
    }

    /// Creates a record from reported fields, assigning an id and the current
    /// time where the reporter left them out.
    pub fn record(&mut self, input: NewActivityInput) -> Result<ActivityRecord, PaywatchError> {
        validate_new_activity(&input)?;
        let record = ActivityRecord {
            id: input.id.unwrap_or_else(ActivityId::generate),
            timestamp: input.timestamp.unwrap_or_else(Utc::now),
            agent: input.agent,
            action: input.action,
            description: input.description,
            status: input.status,
            subject: input.subject,
        };
        self.append(record.clone())?;
        Ok(record)
    }
}

fn validate_new_activity(input: &NewActivityInput) -> Result<(), ActivityError> {
    if input.agent.trim().is_empty() {
        return Err(ActivityError::InvalidInput {
            message: "agent must not be blank".to_string(),
        });
    }
    if input.action.trim().is_empty() {
        return Err(ActivityError::InvalidInput {
            message: "action must not be blank".to_string(),
        });
    }
    Ok(())
}
