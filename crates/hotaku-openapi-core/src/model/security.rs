use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A security scheme type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SecuritySchemeType {
    Http,
}

/// A security scheme definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: SecuritySchemeType,

    pub scheme: String,

    #[serde(rename = "bearerFormat", skip_serializing_if = "Option::is_none")]
    pub bearer_format: Option<String>,
}

impl SecurityScheme {
    /// HTTP bearer authentication with the given token format hint.
    pub fn bearer(format: &str) -> Self {
        Self {
            scheme_type: SecuritySchemeType::Http,
            scheme: "bearer".to_string(),
            bearer_format: Some(format.to_string()),
        }
    }
}

/// A security requirement: map of scheme name → required scopes.
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// A requirement naming one scheme with no scopes.
pub fn requirement(scheme: &str) -> SecurityRequirement {
    let mut req = SecurityRequirement::new();
    req.insert(scheme.to_string(), Vec::new());
    req
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_serialization() {
        let json = serde_json::to_value(SecurityScheme::bearer("JWT")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "http", "scheme": "bearer", "bearerFormat": "JWT"})
        );
    }

    #[test]
    fn test_requirement_has_no_scopes() {
        let json = serde_json::to_value(requirement("bearerAuth")).unwrap();
        assert_eq!(json, serde_json::json!({"bearerAuth": []}));
    }
}
