use serde::{Deserialize, Serialize};

/// A server URL definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Server {
    pub fn new(url: &str, description: &str) -> Self {
        Self {
            url: url.to_string(),
            description: Some(description.to_string()),
        }
    }
}
