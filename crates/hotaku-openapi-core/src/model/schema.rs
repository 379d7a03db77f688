use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Prefix of a pointer into `components.schemas`.
pub const COMPONENT_SCHEMA_PREFIX: &str = "#/components/schemas/";

/// A JSON Schema type keyword value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Integer,
    Object,
}

/// A reference or inline schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

impl SchemaOrRef {
    /// Pointer to a named entry of `components.schemas`.
    pub fn component(name: &str) -> Self {
        SchemaOrRef::Ref {
            ref_path: format!("{COMPONENT_SCHEMA_PREFIX}{name}"),
        }
    }
}

impl From<Schema> for SchemaOrRef {
    fn from(schema: Schema) -> Self {
        SchemaOrRef::Schema(Box::new(schema))
    }
}

/// A JSON Schema object (OpenAPI 3.0 subset).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    // Object properties
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<AdditionalProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

impl Schema {
    fn typed(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Self::default()
        }
    }

    pub fn string() -> Self {
        Self::typed(SchemaType::String)
    }

    pub fn integer() -> Self {
        Self::typed(SchemaType::Integer)
    }

    pub fn object() -> Self {
        Self::typed(SchemaType::Object)
    }

    pub fn format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn example(mut self, example: impl Into<serde_json::Value>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Append a property, keeping declaration order.
    pub fn property(mut self, name: &str, schema: impl Into<SchemaOrRef>) -> Self {
        self.properties.insert(name.to_string(), schema.into());
        self
    }

    pub fn required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn additional_properties(mut self, allowed: bool) -> Self {
        self.additional_properties = Some(AdditionalProperties::Bool(allowed));
        self
    }

    /// Constrain every additional property to `schema`.
    pub fn additional_properties_of(mut self, schema: impl Into<SchemaOrRef>) -> Self {
        let inner = Box::new(schema.into());
        self.additional_properties = Some(AdditionalProperties::Schema(inner));
        self
    }
}

/// `additionalProperties` can be a boolean or a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<SchemaOrRef>),
}
