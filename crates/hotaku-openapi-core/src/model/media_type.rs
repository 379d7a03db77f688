use serde::{Deserialize, Serialize};

use super::schema::SchemaOrRef;

/// Content type used by every body in the document.
pub const APPLICATION_JSON: &str = "application/json";

/// A media type object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    pub schema: SchemaOrRef,
}

impl MediaType {
    pub fn with_schema(schema: impl Into<SchemaOrRef>) -> Self {
        Self {
            schema: schema.into(),
        }
    }
}
