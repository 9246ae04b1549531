use crate::types::{ActivityId, ActivityRecord};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("activity id already exists: {id}")]
pub struct DuplicateIdError {
    pub id: ActivityId,
}

/// Append-only, insertion-ordered activity log held in memory.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    records: Vec<ActivityRecord>,
    ids: HashSet<ActivityId>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Result<Self, DuplicateIdError>
    where
        I: IntoIterator<Item = ActivityRecord>,
    {
        let mut store = Self::new();
        for record in records {
            store.append(record)?;
        }
        Ok(store)
    }

    pub fn append(&mut self, record: ActivityRecord) -> Result<(), DuplicateIdError> {
        if self.ids.contains(&record.id) {
            return Err(DuplicateIdError { id: record.id });
        }
        self.ids.insert(record.id.clone());
        self.records.push(record);
        Ok(())
    }

    /// Owned snapshot in append order.
    pub fn all(&self) -> Vec<ActivityRecord> {
        self.records.clone()
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn get(&self, id: &ActivityId) -> Option<&ActivityRecord> {
        if !self.ids.contains(id) {
            return None;
        }
        self.records.iter().find(|record| &record.id == id)
    }

    pub fn contains(&self, id: &ActivityId) -> bool {
        self.ids.contains(id)
    }

    /// Unique agent names in first-seen order.
    pub fn distinct_agents(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut agents = Vec::new();
        for record in &self.records {
            if seen.insert(record.agent.as_str()) {
                agents.push(record.agent.clone());
            }
        }
        agents
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
