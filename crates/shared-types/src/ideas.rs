use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// A suggested assignment returned by the idea generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentIdea {
    pub title: String,
    pub description: String,
    #[serde(rename = "estimatedTime")]
    pub estimated_time: String,
}

/// Request DTO for generating assignment ideas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct IdeaRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, max = 200, message = "Topic must be 1 to 200 characters"))
    )]
    pub topic: String,
}

impl IdeaRequest {
    pub fn new(topic: &str) -> Self {
        Self {
            topic: topic.trim().to_string(),
        }
    }
}
