use std::fs;
use std::path::{Path, PathBuf};

use crate::config::GeneratorConfig;
use crate::error::EmitError;
use crate::model::spec::OpenApiSpec;
use crate::validate::check_contract;
use crate::{GeneratedFile, OutputFormat};

/// Block-style YAML rendering.
pub fn render_yaml(spec: &OpenApiSpec) -> Result<String, EmitError> {
    Ok(serde_yaml_ng::to_string(spec)?)
}

/// Two-space indented JSON rendering, without a trailing newline.
pub fn render_json(spec: &OpenApiSpec) -> Result<String, EmitError> {
    Ok(serde_json::to_string_pretty(spec)?)
}

/// Create `path` and any missing ancestors. Succeeds if it already exists.
pub fn ensure_dir(path: &Path) -> Result<(), EmitError> {
    fs::create_dir_all(path).map_err(|source| EmitError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// Render both encodings in memory, YAML first.
pub fn render(
    spec: &OpenApiSpec,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedFile>, EmitError> {
    check_contract(spec)?;

    let yaml = render_yaml(spec)?;
    let json = render_json(spec)?;
    log::debug!(
        "rendered {} bytes of YAML, {} bytes of JSON",
        yaml.len(),
        json.len()
    );

    Ok(vec![
        GeneratedFile {
            path: config.yaml_path(),
            format: OutputFormat::Yaml,
            content: yaml,
        },
        GeneratedFile {
            path: config.json_path(),
            format: OutputFormat::Json,
            content: json,
        },
    ])
}

/// Write one rendered file, returning its canonical absolute path.
pub fn write_file(file: &GeneratedFile) -> Result<PathBuf, EmitError> {
    let write_error = |source| EmitError::Write {
        path: file.path.clone(),
        source,
    };
    fs::write(&file.path, &file.content).map_err(write_error)?;
    fs::canonicalize(&file.path).map_err(write_error)
}

/// Render, prepare the output directory, then write each file in turn.
///
/// Nothing touches the filesystem until both encodings are rendered.
/// `on_written` runs after each successful write; the first failure aborts
/// the remaining writes.
pub fn emit<F>(
    spec: &OpenApiSpec,
    config: &GeneratorConfig,
    mut on_written: F,
) -> Result<Vec<PathBuf>, EmitError>
where
    F: FnMut(&GeneratedFile, &Path),
{
    let files = render(spec, config)?;
    ensure_dir(&config.output)?;
    log::debug!("output directory ready: {}", config.output.display());

    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        let path = write_file(file)?;
        on_written(file, &path);
        written.push(path);
    }
    Ok(written)
}
