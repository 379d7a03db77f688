use crate::error::ContractError;
use crate::model::spec::OpenApiSpec;
use crate::refs::{self, schema_name};

/// Check the structural contract of an emitted document.
///
/// This is not meta-schema validation: it covers the version string, the
/// non-empty `info` fields, the presence of paths, and that every schema
/// pointer resolves inside `components.schemas`.
pub fn check_contract(spec: &OpenApiSpec) -> Result<(), ContractError> {
    if !spec.openapi.starts_with("3.0.") {
        return Err(ContractError::UnsupportedVersion(spec.openapi.clone()));
    }
    if spec.info.title.trim().is_empty() {
        return Err(ContractError::EmptyTitle);
    }
    if spec.info.version.trim().is_empty() {
        return Err(ContractError::EmptyVersion);
    }
    if spec.paths.is_empty() {
        return Err(ContractError::NoPaths);
    }

    let schemas = spec.components.as_ref().map(|c| &c.schemas);
    for site in refs::collect_refs(spec) {
        let Some(name) = schema_name(&site.ref_path) else {
            return Err(ContractError::InvalidRefFormat {
                location: site.location,
                ref_path: site.ref_path,
            });
        };
        if !schemas.is_some_and(|s| s.contains_key(name)) {
            return Err(ContractError::DanglingRef {
                location: site.location,
                target: name.to_string(),
            });
        }
    }
    Ok(())
}
