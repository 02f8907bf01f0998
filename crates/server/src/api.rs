use dioxus::prelude::*;
use shared_types::{AssignmentIdea, FeatureFlags, RoutingPolicy};

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

/// Get the current feature flags. Flags are not sensitive.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}

/// Get the configured tab routing policy.
#[server]
pub async fn get_routing_policy() -> Result<RoutingPolicy, ServerFnError> {
    Ok(crate::config::routing_policy())
}

/// Ask the generative-text service for assignment ideas on a topic.
///
/// Fails with a serialized `AppError` when the topic is invalid, the
/// feature is off, the API key is missing, or the service misbehaves.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn generate_assignment_ideas(topic: String) -> Result<Vec<AssignmentIdea>, ServerFnError> {
    use shared_types::{AppError, IdeaRequest};

    let request = IdeaRequest::new(&topic);
    request
        .validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    if !crate::config::feature_flags().ai_ideas {
        return Err(
            AppError::not_configured("Assignment ideas are turned off.").into_server_fn_error(),
        );
    }

    let client = crate::ai::GeminiClient::from_env(crate::config::ai_config()).map_err(|e| {
        tracing::warn!(error = %e, "Idea generation requested without credentials");
        e.into_server_fn_error()
    })?;

    client.assignment_ideas(&request.topic).await.map_err(|e| {
        tracing::error!(error = %e, topic = %request.topic, "Idea generation failed");
        e.into_server_fn_error()
    })
}
