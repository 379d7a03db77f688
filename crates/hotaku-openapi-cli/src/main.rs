use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use hotaku_openapi_core::config::{self, CONFIG_FILE_NAME, GeneratorConfig};
use hotaku_openapi_core::document::hotaku_api;
use hotaku_openapi_core::emit;
use hotaku_openapi_core::model::{self, spec::OpenApiSpec};
use hotaku_openapi_core::refs;
use hotaku_openapi_core::validate::check_contract;
use hotaku_openapi_core::{GeneratedFile, OutputFormat};

#[derive(Parser)]
#[command(
    name = "hotaku-openapi",
    about = "Generate the Hotaku API OpenAPI document",
    version
)]
struct Cli {
    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write openapi.yaml and openapi.json
    Generate {
        /// Output directory (overrides the config file)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Check a generated document against the output contract
    Check {
        /// Path to a generated openapi.yaml or openapi.json
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Initialize a new configuration file
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Generate { out_dir: None }) {
        Commands::Generate { out_dir } => cmd_generate(out_dir),

        Commands::Check { input } => cmd_check(input),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "hotaku-openapi", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn load_config() -> Result<GeneratorConfig> {
    let cfg = config::load_config(Path::new(CONFIG_FILE_NAME))?.unwrap_or_default();
    log::debug!("using config: {cfg:?}");
    Ok(cfg)
}

fn confirmation(file: &GeneratedFile, path: &Path) -> String {
    match file.format {
        OutputFormat::Yaml => format!("✅ OpenAPI specification generated at: {}", path.display()),
        OutputFormat::Json => format!(
            "✅ OpenAPI JSON specification generated at: {}",
            path.display()
        ),
    }
}

fn cmd_generate(out_dir: Option<PathBuf>) -> Result<()> {
    let mut cfg = load_config()?;
    if let Some(dir) = out_dir {
        cfg.output = dir;
    }

    let spec = hotaku_api();
    emit::emit(&spec, &cfg, |file, path| {
        println!("{}", confirmation(file, path));
    })
    .with_context(|| format!("failed to generate into {}", cfg.output.display()))?;
    Ok(())
}

fn read_spec(path: &Path) -> Result<OpenApiSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let parsed = match ext {
        "json" => model::from_json(&content)?,
        _ => model::from_yaml(&content)?,
    };
    Ok(parsed)
}

fn cmd_check(input: Option<PathBuf>) -> Result<()> {
    let input = match input {
        Some(path) => path,
        None => load_config()?.yaml_path(),
    };
    let spec = read_spec(&input)?;

    check_contract(&spec).with_context(|| format!("{} violates the contract", input.display()))?;

    eprintln!("Valid OpenAPI {} document: {}", spec.openapi, spec.info.title);
    eprintln!("  Version: {}", spec.info.version);
    eprintln!("  Paths: {}", spec.paths.len());
    let operations: usize = spec.paths.values().map(|p| p.operations().count()).sum();
    eprintln!("  Operations: {}", operations);
    if let Some(ref components) = spec.components {
        eprintln!("  Schemas: {}", components.schemas.len());
        eprintln!("  Security schemes: {}", components.security_schemes.len());
    }
    eprintln!("  References: {}", refs::collect_refs(&spec).len());
    eprintln!("Check successful.");
    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_means_generate() {
        let cli = Cli::try_parse_from(["hotaku-openapi"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_generate_out_dir() {
        let cli =
            Cli::try_parse_from(["hotaku-openapi", "generate", "--out-dir", "build"]).unwrap();
        match cli.command {
            Some(Commands::Generate { out_dir }) => {
                assert_eq!(out_dir, Some(PathBuf::from("build")))
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_confirmation_names_format() {
        let file = GeneratedFile {
            path: PathBuf::from("openapi.json"),
            format: OutputFormat::Json,
            content: String::new(),
        };
        assert_eq!(
            confirmation(&file, Path::new("/srv/openapi/dist/openapi.json")),
            "✅ OpenAPI JSON specification generated at: /srv/openapi/dist/openapi.json"
        );
    }

    #[test]
    fn test_check_accepts_generated_json() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = GeneratorConfig {
            output: tmp.path().to_path_buf(),
            ..GeneratorConfig::default()
        };
        emit::emit(&hotaku_api(), &cfg, |_, _| {}).unwrap();
        assert!(cmd_check(Some(cfg.json_path())).is_ok());
        assert!(cmd_check(Some(cfg.yaml_path())).is_ok());
    }

    #[test]
    fn test_check_rejects_dangling_reference() {
        let tmp = tempfile::tempdir().unwrap();
        let mut spec = hotaku_api();
        spec.components.as_mut().unwrap().schemas.shift_remove("User");
        let path = tmp.path().join("openapi.json");
        fs::write(&path, emit::render_json(&spec).unwrap()).unwrap();

        let err = cmd_check(Some(path)).unwrap_err();
        assert!(format!("{err:#}").contains("no schema named User"));
    }
}
