use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::media_type::{APPLICATION_JSON, MediaType};
use super::schema::SchemaOrRef;

/// A response definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
}

impl Response {
    /// A response carrying a single `application/json` body.
    pub fn json(description: &str, schema: impl Into<SchemaOrRef>) -> Self {
        let mut content = IndexMap::new();
        content.insert(APPLICATION_JSON.to_string(), MediaType::with_schema(schema));
        Self {
            description: description.to_string(),
            content,
        }
    }
}
