// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use fluentbit_manifests::{
    constants::DEFAULT_PROVIDER_TYPE_NAME,
    errors::{has_errors, Diagnostic, ManifestError},
    manifest,
    provider::Provider,
};
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "fluentbit-manifests")]
#[command(about = "Render fluentbit.fluent.io CRD manifests from data source configurations")]
#[command(version)]
struct Cli {
    /// Provider type name used as the data source type name prefix
    #[arg(long, global = true, default_value = DEFAULT_PROVIDER_TYPE_NAME)]
    provider_name: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the type names of all data sources
    List,

    /// Print the schema of a data source as JSON
    Schema {
        /// Data source type name, or its short form (e.g. `cluster_filter`)
        data_source: String,
    },

    /// Validate a configuration without rendering it
    Validate {
        /// Data source type name, or its short form (e.g. `cluster_filter`)
        data_source: String,

        /// Configuration file in JSON or YAML, `-` for stdin
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Validate a configuration and print the rendered manifest
    Render {
        /// Data source type name, or its short form (e.g. `cluster_filter`)
        data_source: String,

        /// Configuration file in JSON or YAML, `-` for stdin
        #[arg(short, long)]
        config: PathBuf,

        /// Print the resulting data source state as JSON instead of the YAML document
        #[arg(long)]
        state: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() -> Result<ExitCode> {
    init_logging();

    let cli = Cli::parse();
    let provider = Provider::new(&cli.provider_name);
    debug!(provider = %cli.provider_name, "Provider initialized");

    match cli.command {
        Commands::List => {
            for name in provider.data_source_names() {
                println!("{name}");
            }
        }
        Commands::Schema { data_source } => {
            let type_name = resolve_type_name(&provider, &data_source);
            let schema = provider.schema(&type_name)?;
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Commands::Validate {
            data_source,
            config,
        } => {
            let type_name = resolve_type_name(&provider, &data_source);
            let config = load_config(&config)?;
            let diagnostics = provider.validate(&type_name, &config)?;
            report(&diagnostics);
            if has_errors(&diagnostics) {
                return Ok(ExitCode::FAILURE);
            }
            info!(data_source = %type_name, "Configuration is valid");
        }
        Commands::Render {
            data_source,
            config,
            state,
        } => {
            let type_name = resolve_type_name(&provider, &data_source);
            let config = load_config(&config)?;
            match provider.read_data_source(&type_name, &config) {
                Ok(response) => {
                    report(&response.warnings);
                    if state {
                        println!("{}", serde_json::to_string_pretty(&response.state)?);
                    } else {
                        print!("{}", response.yaml);
                    }
                }
                Err(err @ ManifestError::UnknownDataSource { .. }) => return Err(err.into()),
                Err(err) => {
                    report(&err.diagnostics());
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(
                shell,
                &mut command,
                "fluentbit-manifests",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Initializes logging on stderr, keeping stdout for rendered output.
///
/// Respects `RUST_LOG` (default `info`) and `RUST_LOG_FORMAT` (`text` or `json`).
fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .compact()
                .init();
        }
    }
}

/// Accepts a full type name or the short form `cluster_filter`.
fn resolve_type_name(provider: &Provider, name: &str) -> String {
    if provider.data_source(name).is_ok() {
        return name.to_string();
    }
    manifest::type_name(provider.type_name(), name)
}

/// Reads a JSON or YAML configuration from a file, or stdin for `-`.
fn load_config(path: &Path) -> Result<Value> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read configuration from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?
    };

    parse_config(&content)
        .with_context(|| format!("Failed to parse configuration {}", path.display()))
}

/// Parses a configuration document. JSON is accepted as a subset of YAML.
fn parse_config(content: &str) -> Result<Value> {
    let config: Value = serde_yaml::from_str(content)?;
    if !config.is_object() {
        anyhow::bail!("configuration must be a mapping with `metadata` and `spec`");
    }
    Ok(config)
}

fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{diagnostic}");
    }
}
