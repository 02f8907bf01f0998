use shared_types::{AiConfig, AppConfig, FeatureFlags, RoutingPolicy};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents. Unparseable input yields the defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, path = CONFIG_PATH, "Failed to parse config, using defaults");
        AppConfig::default()
    })
}

/// Read `config.toml` and store it in the global `OnceLock`. Safe to call
/// multiple times; only the first call has effect.
///
/// A missing file means every flag is off and every setting is default.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let config = parse_config(&contents);
            tracing::info!(
                features = ?config.features,
                routing = ?config.navigation.routing,
                model = %config.ai.model,
                "Loaded {CONFIG_PATH}"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "{CONFIG_PATH} not found, using defaults");
            AppConfig::default()
        }
    })
}

/// The loaded config, or defaults if [`load_config`] hasn't run yet.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

pub fn feature_flags() -> &'static FeatureFlags {
    &app_config().features
}

pub fn routing_policy() -> RoutingPolicy {
    app_config().navigation.routing
}

pub fn ai_config() -> &'static AiConfig {
    &app_config().ai
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_config_falls_back_to_defaults() {
        assert_eq!(parse_config("[features\nai_ideas = "), AppConfig::default());
    }

    #[test]
    fn parses_routing_policy() {
        let config = parse_config("[navigation]\nrouting = \"placeholder\"\n");
        assert_eq!(config.navigation.routing, RoutingPolicy::Placeholder);
    }

    #[test]
    fn accessors_never_panic_before_load() {
        let _ = feature_flags();
        let _ = routing_policy();
        assert!(!ai_config().model.is_empty());
    }
}
