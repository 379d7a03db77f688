use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::request_body::RequestBody;
use super::response::Response;
use super::security::SecurityRequirement;

/// An API operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// `Some(vec![])` is meaningful: it opts the operation out of the
    /// document-level requirement and must serialize as `security: []`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<SecurityRequirement>>,

    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    pub fn new(operation_id: &str, summary: &str, description: &str) -> Self {
        Self {
            operation_id: Some(operation_id.to_string()),
            summary: Some(summary.to_string()),
            description: Some(description.to_string()),
            tags: Vec::new(),
            security: None,
            request_body: None,
            responses: IndexMap::new(),
        }
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    pub fn security(mut self, requirements: Vec<SecurityRequirement>) -> Self {
        self.security = Some(requirements);
        self
    }

    pub fn request_body(mut self, body: RequestBody) -> Self {
        self.request_body = Some(body);
        self
    }

    pub fn response(mut self, status: &str, response: Response) -> Self {
        self.responses.insert(status.to_string(), response);
        self
    }
}

/// A path item, containing operations keyed by HTTP method.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
}

impl PathItem {
    pub fn get(operation: Operation) -> Self {
        Self {
            get: Some(operation),
            ..Self::default()
        }
    }

    pub fn post(operation: Operation) -> Self {
        Self {
            post: Some(operation),
            ..Self::default()
        }
    }

    /// Defined operations with their lowercase method names, in field order.
    pub fn operations(&self) -> impl Iterator<Item = (&'static str, &Operation)> {
        [("get", self.get.as_ref()), ("post", self.post.as_ref())]
            .into_iter()
            .filter_map(|(method, op)| op.map(|op| (method, op)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operations_in_method_order() {
        let item = PathItem {
            get: Some(Operation::new("read", "Read", "Read it")),
            post: Some(Operation::new("write", "Write", "Write it")),
        };
        let ids: Vec<(&str, &str)> = item
            .operations()
            .map(|(m, op)| (m, op.operation_id.as_deref().unwrap()))
            .collect();
        assert_eq!(ids, vec![("get", "read"), ("post", "write")]);
        assert_eq!(PathItem::default().operations().count(), 0);
    }
}
