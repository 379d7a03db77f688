use crate::model::media_type::MediaType;
use crate::model::schema::{AdditionalProperties, COMPONENT_SCHEMA_PREFIX, SchemaOrRef};
use crate::model::spec::OpenApiSpec;

/// A `$ref` found in the document, with where it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefSite {
    /// Dotted location, e.g. `paths./health.get.responses.500.content.application/json.schema`.
    pub location: String,
    pub ref_path: String,
}

/// Name of the schema a `#/components/schemas/<Name>` pointer targets.
pub fn schema_name(ref_path: &str) -> Option<&str> {
    ref_path
        .strip_prefix(COMPONENT_SCHEMA_PREFIX)
        .filter(|name| !name.is_empty() && !name.contains('/'))
}

/// All references under `paths`, in document order.
pub fn collect_path_refs(spec: &OpenApiSpec) -> Vec<RefSite> {
    let mut sites = Vec::new();
    for (path, item) in &spec.paths {
        for (method, op) in item.operations() {
            let base = format!("paths.{path}.{method}");

            if let Some(body) = &op.request_body {
                for (mime, media) in &body.content {
                    let loc = format!("{base}.requestBody.content.{mime}");
                    walk_media(&mut sites, &loc, media);
                }
            }

            for (status, response) in &op.responses {
                for (mime, media) in &response.content {
                    let loc = format!("{base}.responses.{status}.content.{mime}");
                    walk_media(&mut sites, &loc, media);
                }
            }
        }
    }
    sites
}

/// All references in the document: `paths` first, then `components.schemas`.
pub fn collect_refs(spec: &OpenApiSpec) -> Vec<RefSite> {
    let mut sites = collect_path_refs(spec);
    if let Some(components) = &spec.components {
        for (name, schema) in &components.schemas {
            walk_schema(&mut sites, &format!("components.schemas.{name}"), schema);
        }
    }
    log::debug!("collected {} references", sites.len());
    sites
}

fn push(sites: &mut Vec<RefSite>, location: &str, ref_path: &str) {
    sites.push(RefSite {
        location: location.to_string(),
        ref_path: ref_path.to_string(),
    });
}

fn walk_media(sites: &mut Vec<RefSite>, location: &str, media: &MediaType) {
    walk_schema(sites, &format!("{location}.schema"), &media.schema);
}

fn walk_schema(sites: &mut Vec<RefSite>, location: &str, schema: &SchemaOrRef) {
    let s = match schema {
        SchemaOrRef::Ref { ref_path } => {
            push(sites, location, ref_path);
            return;
        }
        SchemaOrRef::Schema(s) => s,
    };

    for (name, prop) in &s.properties {
        walk_schema(sites, &format!("{location}.properties.{name}"), prop);
    }
    if let Some(AdditionalProperties::Schema(inner)) = &s.additional_properties {
        walk_schema(sites, &format!("{location}.additionalProperties"), inner);
    }
}
