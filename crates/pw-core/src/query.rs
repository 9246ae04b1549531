//! Filtering over the activity log.
//!
//! A query is three predicates combined with AND: a case-insensitive substring
//! search over description, agent and subject name, an exact agent match and
//! an exact status match. The latter two accept the sentinel `"all"`. Results
//! keep store order.

use pw_events::types::{ActivityRecord, Status};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldFilter {
    #[default]
    All,
    Exactly(String),
}

impl FieldFilter {
    pub const ALL_SENTINEL: &'static str = "all";

    pub fn parse(value: &str) -> Self {
        if value == Self::ALL_SENTINEL {
            FieldFilter::All
        } else {
            FieldFilter::Exactly(value.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFilter::All => true,
            FieldFilter::Exactly(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FieldFilter::All)
    }
}

impl fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldFilter::All => f.write_str(Self::ALL_SENTINEL),
            FieldFilter::Exactly(value) => f.write_str(value),
        }
    }
}

impl FromStr for FieldFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for FieldFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for FieldFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Status> for FieldFilter {
    fn from(value: Status) -> Self {
        FieldFilter::Exactly(value.as_str().to_string())
    }
}

impl From<FieldFilter> for String {
    fn from(value: FieldFilter) -> Self {
        value.to_string()
    }
}

/// The default value is the reset state: empty text, every agent, every status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFilter {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub agent: FieldFilter,
    #[serde(default)]
    pub status: FieldFilter,
}

impl ActivityFilter {
    pub fn new(
        text: impl Into<String>,
        agent: impl Into<FieldFilter>,
        status: impl Into<FieldFilter>,
    ) -> Self {
        Self {
            text: text.into(),
            agent: agent.into(),
            status: status.into(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_agent(mut self, agent: impl Into<FieldFilter>) -> Self {
        self.agent = agent.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<FieldFilter>) -> Self {
        self.status = status.into();
        self
    }

    pub fn is_reset(&self) -> bool {
        self.text.is_empty() && self.agent.is_all() && self.status.is_all()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, record: &ActivityRecord) -> bool {
        Matcher::new(self).matches(record)
    }
}

/// Filter with the search needle lowercased once per query.
struct Matcher<'a> {
    needle: String,
    filter: &'a ActivityFilter,
}

impl<'a> Matcher<'a> {
    fn new(filter: &'a ActivityFilter) -> Self {
        Self {
            needle: filter.text.to_lowercase(),
            filter,
        }
    }

    fn matches(&self, record: &ActivityRecord) -> bool {
        self.matches_text(record)
            && self.filter.agent.matches(&record.agent)
            && self.filter.status.matches(record.status.as_str())
    }

    fn matches_text(&self, record: &ActivityRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let contains = |haystack: &str| haystack.to_lowercase().contains(&self.needle);
        contains(&record.description)
            || contains(&record.agent)
            || record
                .subject
                .as_ref()
                .is_some_and(|subject| contains(&subject.name))
    }
}

pub fn query(records: &[ActivityRecord], filter: &ActivityFilter) -> Vec<ActivityRecord> {
    let matcher = Matcher::new(filter);
    records
        .iter()
        .filter(|record| matcher.matches(record))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub success: usize,
    pub error: usize,
    pub warning: usize,
    pub info: usize,
}

impl StatusSummary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ActivityRecord>,
    {
        let mut summary = Self::default();
        for record in records {
            *summary.count_mut(record.status) += 1;
        }
        summary
    }

    pub fn count(&self, status: Status) -> usize {
        match status {
            Status::Success => self.success,
            Status::Error => self.error,
            Status::Warning => self.warning,
            Status::Info => self.info,
        }
    }

    pub fn total(&self) -> usize {
        self.success + self.error + self.warning + self.info
    }

    fn count_mut(&mut self, status: Status) -> &mut usize {
        match status {
            Status::Success => &mut self.success,
            Status::Error => &mut self.error,
            Status::Warning => &mut self.warning,
            Status::Info => &mut self.info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_events::types::{ActivityId, Subject};

    fn record(id: &str, agent: &str, description: &str, status: Status) -> ActivityRecord {
        ActivityRecord {
            id: ActivityId::new(id).unwrap(),
            timestamp: "2025-07-12T17:30:22Z".parse().unwrap(),
            agent: agent.to_string(),
            action: "Action".to_string(),
            description: description.to_string(),
            status,
            subject: None,
        }
    }

    fn sample() -> Vec<ActivityRecord> {
        let mut with_subject = record("c", "Orchestrator", "Applied correction", Status::Success);
        with_subject.subject = Some(Subject::new("Sarah Johnson", "emp-123"));
        vec![
            record("a", "Collector", "Pulled timesheets", Status::Success),
            record("b", "Detector", "Found anomalies", Status::Warning),
            with_subject,
            record("d", "Collector", "API error", Status::Error),
        ]
    }

    fn ids(records: &[ActivityRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_field_filter_sentinel() {
        assert_eq!(FieldFilter::parse("all"), FieldFilter::All);
        assert_eq!(
            FieldFilter::parse("All"),
            FieldFilter::Exactly("All".to_string())
        );
        assert_eq!(FieldFilter::All.to_string(), "all");
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let records = sample();
        let filter = ActivityFilter::default();
        assert!(filter.is_reset());
        assert_eq!(query(&records, &filter), records);
    }

    #[test]
    fn test_text_is_case_insensitive_across_fields() {
        let records = sample();
        assert_eq!(ids(&query(&records, &ActivityFilter::default().with_text("SARAH"))), ["c"]);
        assert_eq!(ids(&query(&records, &ActivityFilter::default().with_text("collect"))), ["a", "d"]);
        assert_eq!(ids(&query(&records, &ActivityFilter::default().with_text("anomal"))), ["b"]);
    }

    #[test]
    fn test_text_does_not_search_action_or_subject_id() {
        let records = sample();
        assert!(query(&records, &ActivityFilter::default().with_text("action")).is_empty());
        assert!(query(&records, &ActivityFilter::default().with_text("emp-123")).is_empty());
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let records = sample();
        let filter = ActivityFilter::new("api", "Collector", "error");
        assert_eq!(ids(&query(&records, &filter)), ["d"]);

        let filter = ActivityFilter::new("api", "Collector", Status::Success);
        assert!(query(&records, &filter).is_empty());
    }

    #[test]
    fn test_unknown_status_filter_matches_nothing() {
        let records = sample();
        let filter = ActivityFilter::default().with_status("pending");
        assert!(query(&records, &filter).is_empty());
    }

    #[test]
    fn test_agent_match_is_exact() {
        let records = sample();
        assert!(query(&records, &ActivityFilter::default().with_agent("collector")).is_empty());
        assert!(query(&records, &ActivityFilter::default().with_agent("Collect")).is_empty());
    }

    #[test]
    fn test_reset_restores_default() {
        let mut filter = ActivityFilter::new("x", "Collector", "error");
        assert!(!filter.is_reset());
        filter.reset();
        assert_eq!(filter, ActivityFilter::default());
    }

    #[test]
    fn test_filter_deserializes_sentinels() {
        let filter: ActivityFilter =
            serde_json::from_str(r#"{"text": "sarah", "agent": "all", "status": "info"}"#).unwrap();
        assert_eq!(filter.agent, FieldFilter::All);
        assert_eq!(filter.status, FieldFilter::Exactly("info".to_string()));

        let filter: ActivityFilter = serde_json::from_str("{}").unwrap();
        assert!(filter.is_reset());
    }

    #[test]
    fn test_status_summary() {
        let records = sample();
        let summary = StatusSummary::from_records(&records);
        assert_eq!(summary.count(Status::Success), 2);
        assert_eq!(summary.warning, 1);
        assert_eq!(summary.error, 1);
        assert_eq!(summary.info, 0);
        assert_eq!(summary.total(), records.len());
    }
}
