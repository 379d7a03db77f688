use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}

/// A violation of the structural contract every emitted document must satisfy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContractError {
    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),

    #[error("info.title must not be empty")]
    EmptyTitle,

    #[error("info.version must not be empty")]
    EmptyVersion,

    #[error("document declares no paths")]
    NoPaths,

    #[error("invalid reference format at {location}: {ref_path}")]
    InvalidRefFormat { location: String, ref_path: String },

    #[error("dangling reference at {location}: no schema named {target}")]
    DanglingRef { location: String, target: String },
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("refusing to emit invalid document: {0}")]
    Contract(#[from] ContractError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
}
