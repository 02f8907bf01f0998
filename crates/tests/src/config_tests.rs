use pretty_assertions::assert_eq;
use server::config::parse_config;
use shared_types::{resolve_view, RoutingPolicy, Tab, UserRole, ViewId, DEFAULT_AI_MODEL};

#[test]
fn shipped_config_enables_ideas_and_dedicated_views() {
    let config = parse_config(include_str!("../../../config.toml"));
    assert!(config.features.ai_ideas);
    assert_eq!(config.navigation.routing, RoutingPolicy::Dedicated);
}

#[test]
fn placeholder_routing_from_config_reaches_the_router() {
    let config = parse_config(
        r#"
        [navigation]
        routing = "placeholder"
        "#,
    );
    let view = resolve_view(UserRole::Admin, &Tab::new("users"), config.navigation.routing);
    assert_eq!(view, ViewId::WorkInProgress("users".to_string()));
}

#[test]
fn empty_config_turns_everything_off() {
    let config = parse_config("");
    assert!(!config.features.ai_ideas);
    assert!(!config.features.telemetry);
    assert_eq!(config.navigation.routing, RoutingPolicy::Dedicated);
    assert_eq!(config.ai.model, DEFAULT_AI_MODEL);
}

#[test]
fn malformed_config_falls_back_to_defaults() {
    let config = parse_config("[features\nai_ideas = maybe");
    assert!(!config.features.ai_ideas);
}
