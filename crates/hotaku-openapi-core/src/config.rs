use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Output directory used when neither the config file nor the CLI names one:
/// `openapi/dist` at the workspace root.
pub const DEFAULT_OUTPUT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../openapi/dist");

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".hotaku-openapi.yaml";

/// Generator configuration loaded from `.hotaku-openapi.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory receiving both rendered files.
    pub output: PathBuf,
    pub yaml_file: String,
    pub json_file: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            yaml_file: "openapi.yaml".to_string(),
            json_file: "openapi.json".to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn yaml_path(&self) -> PathBuf {
        self.output.join(&self.yaml_file)
    }

    pub fn json_path(&self) -> PathBuf {
        self.output.join(&self.json_file)
    }
}

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<GeneratorConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: GeneratorConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# hotaku-openapi configuration
# output: openapi/dist   # directory receiving both files (default: <workspace>/openapi/dist)
yaml_file: openapi.yaml
json_file: openapi.json
"#
}
