use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::media_type::{APPLICATION_JSON, MediaType};
use super::schema::SchemaOrRef;

/// A request body definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub required: bool,

    pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
    /// A required `application/json` body.
    pub fn json(schema: impl Into<SchemaOrRef>) -> Self {
        let mut content = IndexMap::new();
        content.insert(APPLICATION_JSON.to_string(), MediaType::with_schema(schema));
        Self {
            required: true,
            content,
        }
    }
}
