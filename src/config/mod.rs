//! Configuration for the predictor.

use std::path::PathBuf;

/// Environment variable holding the model artifact path
pub const MODEL_PATH_VAR: &str = "HEART_MODEL_PATH";

/// Environment variable holding the log filter
pub const LOG_FILTER_VAR: &str = "HEART_LOG";

/// Configuration for the predictor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictorConfig {
    /// Path of the serialized classifier, loaded once at startup
    pub model_path: PathBuf,
    /// Filter passed to `env_logger` when no `RUST_LOG` is set
    pub log_filter: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("Heart.json"),
            log_filter: "info".to_string(),
        }
    }
}

impl PredictorConfig {
    /// Read overrides from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary key lookup
    ///
    /// Empty values are ignored.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(path) = lookup(MODEL_PATH_VAR) {
            config.model_path = PathBuf::from(path);
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            config.log_filter = filter;
        }
        config
    }

    /// Override the model path
    #[must_use]
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = PredictorConfig::from_lookup(|_| None);
        assert_eq!(config, PredictorConfig::default());
        assert_eq!(config.model_path, PathBuf::from("Heart.json"));
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (MODEL_PATH_VAR, "/srv/models/heart.json"),
            (LOG_FILTER_VAR, "debug"),
        ]
        .into_iter()
        .collect();
        let config = PredictorConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string()));
        assert_eq!(config.model_path, PathBuf::from("/srv/models/heart.json"));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = PredictorConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, PredictorConfig::default());
    }

    #[test]
    fn test_with_model_path() {
        let config = PredictorConfig::default().with_model_path("model.json");
        assert_eq!(config.model_path, PathBuf::from("model.json"));
    }
}
