use crate::error::PaywatchError;
use pw_events::types::ActivityRecord;
use std::path::Path;

/// Reads a JSON array of activity records.
pub fn load_activity_file(path: &Path) -> Result<Vec<ActivityRecord>, PaywatchError> {
    let raw = std::fs::read_to_string(path).map_err(|err| PaywatchError::Import {
        message: format!("{}: {err}", path.display()),
    })?;
    let records = parse_activity_json(&raw).map_err(|err| match err {
        PaywatchError::Import { message } => PaywatchError::Import {
            message: format!("{}: {message}", path.display()),
        },
        other => other,
    })?;
    tracing::debug!(path = %path.display(), count = records.len(), "loaded activity file");
    Ok(records)
}

pub fn parse_activity_json(raw: &str) -> Result<Vec<ActivityRecord>, PaywatchError> {
    serde_json::from_str(raw).map_err(|err| PaywatchError::Import {
        message: err.to_string(),
    })
}
