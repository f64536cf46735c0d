//! Configuration for schema inference

use serde::{Deserialize, Serialize};

/// Name given to inferred schemas unless configured otherwise
pub const DEFAULT_SCHEMA_NAME: &str = "inferred";

/// Configuration for schema inference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InferenceConfig {
    /// Name of the emitted schema
    pub schema_name: String,

    /// Treat all fields as nullable regardless of observations
    pub assume_nullable: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            schema_name: DEFAULT_SCHEMA_NAME.to_string(),
            assume_nullable: false,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the schema name
    pub fn schema_name(mut self, name: impl Into<String>) -> Self {
        self.config.schema_name = name.into();
        self
    }

    /// Set whether to assume all fields are nullable
    pub fn assume_nullable(mut self, nullable: bool) -> Self {
        self.config.assume_nullable = nullable;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert_eq!(config.schema_name, "inferred");
        assert!(!config.assume_nullable);
    }

    #[test]
    fn test_builder() {
        let config = InferenceConfig::builder()
            .schema_name("events")
            .assume_nullable(true)
            .build();

        assert_eq!(config.schema_name, "events");
        assert!(config.assume_nullable);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: InferenceConfig = serde_json::from_str(r#"{"assumeNullable": true}"#).unwrap();
        assert_eq!(config.schema_name, DEFAULT_SCHEMA_NAME);
        assert!(config.assume_nullable);
    }
}
