use crate::error::PaywatchError;
use pw_events::store::ActivityStore;
use pw_events::types::ActivityRecord;

pub trait ActivityRepository {
    fn append(&mut self, record: ActivityRecord) -> Result<(), PaywatchError>;
    fn all(&self) -> Vec<ActivityRecord>;
    fn distinct_agents(&self) -> Vec<String>;
}

impl ActivityRepository for ActivityStore {
    fn append(&mut self, record: ActivityRecord) -> Result<(), PaywatchError> {
        ActivityStore::append(self, record)?;
        Ok(())
    }

    fn all(&self) -> Vec<ActivityRecord> {
        ActivityStore::all(self)
    }

    fn distinct_agents(&self) -> Vec<String> {
        ActivityStore::distinct_agents(self)
    }
}
