pub mod config;
pub mod document;
pub mod emit;
pub mod error;
pub mod model;
pub mod refs;
pub mod validate;

use std::path::PathBuf;

/// Serialization format of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// A rendered document with its destination path.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub content: String,
}
