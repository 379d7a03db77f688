use std::fs;
use std::path::{Component, PathBuf};

use hotaku_openapi_core::config::GeneratorConfig;
use hotaku_openapi_core::document::hotaku_api;
use hotaku_openapi_core::emit::{emit, ensure_dir};
use hotaku_openapi_core::error::EmitError;
use hotaku_openapi_core::OutputFormat;

fn config_in(dir: PathBuf) -> GeneratorConfig {
    GeneratorConfig {
        output: dir,
        ..GeneratorConfig::default()
    }
}

#[test]
fn writes_both_files_into_a_fresh_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path().join("openapi").join("dist"));

    let mut seen = Vec::new();
    let written = emit(&hotaku_api(), &config, |file, path| {
        seen.push((file.format, path.to_path_buf()));
    })
    .expect("emit should succeed");

    assert_eq!(written.len(), 2);
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].0, OutputFormat::Yaml);
    assert_eq!(seen[1].0, OutputFormat::Json);
    for path in &written {
        assert!(path.is_absolute(), "{} should be absolute", path.display());
        assert!(path.is_file());
    }
    assert!(config.yaml_path().is_file());
    assert!(config.json_path().is_file());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path().join("dist"));

    emit(&hotaku_api(), &config, |_, _| {}).unwrap();
    let yaml_first = fs::read(config.yaml_path()).unwrap();
    let json_first = fs::read(config.json_path()).unwrap();

    emit(&hotaku_api(), &config, |_, _| {}).unwrap();
    assert_eq!(fs::read(config.yaml_path()).unwrap(), yaml_first);
    assert_eq!(fs::read(config.json_path()).unwrap(), json_first);
}

#[test]
fn written_files_parse_to_equal_values() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path().to_path_buf());
    emit(&hotaku_api(), &config, |_, _| {}).unwrap();

    let yaml: serde_json::Value =
        serde_yaml_ng::from_str(&fs::read_to_string(config.yaml_path()).unwrap()).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(config.json_path()).unwrap()).unwrap();
    assert_eq!(yaml, json);
}

#[test]
fn ensure_dir_is_idempotent() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("a").join("b");
    ensure_dir(&dir).unwrap();
    ensure_dir(&dir).unwrap();
    assert!(dir.is_dir());
}

#[test]
fn file_in_place_of_output_dir_aborts_without_writing() {
    let tmp = tempfile::tempdir().unwrap();
    let blocked = tmp.path().join("dist");
    fs::write(&blocked, "not a directory").unwrap();
    let config = config_in(blocked.clone());

    let mut calls = 0;
    let err = emit(&hotaku_api(), &config, |_, _| calls += 1).unwrap_err();

    assert!(matches!(err, EmitError::CreateDir { .. }), "got {err:?}");
    assert_eq!(calls, 0);
    assert_eq!(fs::read_to_string(&blocked).unwrap(), "not a directory");
    assert!(!config.yaml_path().exists());
    assert!(!config.json_path().exists());
}

#[test]
fn file_in_place_of_ancestor_aborts() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("openapi");
    fs::write(&blocker, "").unwrap();
    let config = config_in(blocker.join("dist"));

    let err = emit(&hotaku_api(), &config, |_, _| {}).unwrap_err();
    assert!(matches!(err, EmitError::CreateDir { .. }));
    assert!(err.to_string().starts_with("failed to create directory"));
}

#[test]
fn custom_file_names_are_honoured() {
    let tmp = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        output: tmp.path().to_path_buf(),
        yaml_file: "hotaku.yaml".to_string(),
        json_file: "hotaku.json".to_string(),
    };
    emit(&hotaku_api(), &config, |_, _| {}).unwrap();
    assert!(tmp.path().join("hotaku.yaml").is_file());
    assert!(tmp.path().join("hotaku.json").is_file());
}

#[test]
fn failed_first_write_stops_before_second() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config_in(tmp.path().to_path_buf());
    fs::create_dir(config.yaml_path()).unwrap();

    let mut calls = 0;
    let err = emit(&hotaku_api(), &config, |_, _| calls += 1).unwrap_err();

    match &err {
        EmitError::Write { path, .. } => assert_eq!(path, &config.yaml_path()),
        other => panic!("expected write error, got {other:?}"),
    }
    assert!(err.to_string().starts_with("failed to write"));
    assert_eq!(calls, 0);
    assert!(!config.json_path().exists());
}

#[test]
fn relative_output_dir_reports_absolute_paths() {
    let tmp = tempfile::tempdir_in(".").unwrap();
    assert!(tmp.path().is_relative());
    let config = config_in(tmp.path().join("dist"));

    let mut reported = Vec::new();
    emit(&hotaku_api(), &config, |_, path| reported.push(path.to_path_buf())).unwrap();

    assert_eq!(reported.len(), 2);
    for path in &reported {
        assert!(path.is_absolute(), "{} should be absolute", path.display());
        assert!(
            !path.components().any(|c| c == Component::CurDir),
            "{} should be normalized",
            path.display()
        );
    }
    assert!(reported[0].ends_with("dist/openapi.yaml"));
    assert!(reported[1].ends_with("dist/openapi.json"));
}
