use serde::{Deserialize, Serialize};

pub const MISSING_DESCRIPTION_PATHWAY: &str =
    "Please tell me about your playing, goals, timeframe, and current frustrations.";

pub const EMPTY_COMPLETION_PATHWAY: &str =
    "I had trouble generating a pathway. Please try again with a bit more detail.";

pub const SERVER_ERROR_PATHWAY: &str =
    "Something glitched on the server side. Try again in a minute or rephrase your description.";

#[derive(Debug, Deserialize)]
pub struct PathwayRequest {
    #[serde(default)]
    pub description: String,
}

/// Always carries a `pathway` key, success or failure, so callers have a
/// uniform shape to render.
#[derive(Debug, Serialize)]
pub struct PathwayResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub pathway: String,
}

impl PathwayResponse {
    pub fn ok(pathway: String) -> Self {
        Self {
            error: None,
            pathway,
        }
    }

    pub fn error(error: &'static str, pathway: &'static str) -> Self {
        Self {
            error: Some(error),
            pathway: pathway.to_string(),
        }
    }
}
