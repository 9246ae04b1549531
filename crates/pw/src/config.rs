use std::path::PathBuf;

pub const ACTIVITY_PATH_VAR: &str = "PAYWATCH_ACTIVITY_PATH";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON activity file to load instead of the built-in log.
    pub activity_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        Self {
            activity_path: non_empty(ACTIVITY_PATH_VAR).map(PathBuf::from),
            log_filter: non_empty(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    #[must_use]
    pub fn with_activity_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.activity_path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.activity_path, None);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_env_values() {
        let config = Config::from_lookup(lookup(&[
            (ACTIVITY_PATH_VAR, "/tmp/activity.json"),
            (LOG_FILTER_VAR, "pw_core=debug"),
        ]));
        assert_eq!(config.activity_path, Some(PathBuf::from("/tmp/activity.json")));
        assert_eq!(config.log_filter, "pw_core=debug");
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_lookup(lookup(&[(ACTIVITY_PATH_VAR, " "), (LOG_FILTER_VAR, "")]));
        assert_eq!(config.activity_path, None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_flag_overrides_env_path() {
        let config = Config::from_lookup(lookup(&[(ACTIVITY_PATH_VAR, "a.json")]))
            .with_activity_path(Some(PathBuf::from("b.json")));
        assert_eq!(config.activity_path, Some(PathBuf::from("b.json")));

        let config = config.with_activity_path(None);
        assert_eq!(config.activity_path, Some(PathBuf::from("b.json")));
    }
}
