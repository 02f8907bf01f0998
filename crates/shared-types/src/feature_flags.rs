use serde::{Deserialize, Serialize};

use crate::RoutingPolicy;

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    /// Assignment-idea generator on the teacher dashboard.
    #[serde(default)]
    pub ai_ideas: bool,
    #[serde(default)]
    pub telemetry: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NavigationConfig {
    #[serde(default)]
    pub routing: RoutingPolicy,
}

pub const DEFAULT_AI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_AI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_IDEA_COUNT: u8 = 3;

/// Generative-text service settings. The API key is never read from here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_idea_count")]
    pub idea_count: u8,
}

fn default_model() -> String {
    DEFAULT_AI_MODEL.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_AI_ENDPOINT.to_string()
}

fn default_idea_count() -> u8 {
    DEFAULT_IDEA_COUNT
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: default_endpoint(),
            idea_count: default_idea_count(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub ai: AiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_false() {
        let flags = FeatureFlags::default();
        assert!(!flags.ai_ideas);
        assert!(!flags.telemetry);
    }

    #[test]
    fn deserialize_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.navigation.routing, RoutingPolicy::Dedicated);
        assert_eq!(config.ai.model, DEFAULT_AI_MODEL);
        assert_eq!(config.ai.idea_count, 3);
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            ai_ideas = true

            [ai]
            idea_count = 5
            "#,
        )
        .unwrap();
        assert!(config.features.ai_ideas);
        assert!(!config.features.telemetry);
        assert_eq!(config.ai.idea_count, 5);
        assert_eq!(config.ai.endpoint, DEFAULT_AI_ENDPOINT);
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            ai_ideas = true
            telemetry = true

            [navigation]
            routing = "placeholder"

            [ai]
            model = "gemini-2.0-flash"
            endpoint = "http://localhost:9000"
            idea_count = 4
            "#,
        )
        .unwrap();
        assert!(config.features.ai_ideas);
        assert!(config.features.telemetry);
        assert_eq!(config.navigation.routing, RoutingPolicy::Placeholder);
        assert_eq!(config.ai.model, "gemini-2.0-flash");
        assert_eq!(config.ai.endpoint, "http://localhost:9000");
    }

    #[test]
    fn unknown_routing_policy_is_an_error() {
        let result: Result<AppConfig, _> = toml::from_str(
            r#"
            [navigation]
            routing = "sideways"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }
}
