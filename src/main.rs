//! Kilo Autocomplete - Main entrypoint.
//!
//! This is the main entry point for the Kilo autocomplete service.
//! It loads configuration, initializes the logging system, seeds the engine,
//! and then either serves requests over standard I/O or runs a one-shot command.

use clap::{Parser, Subcommand};
use kilo_autocomplete_lib::config::{self, ConfigLoader, KiloConfig, LogConfig, ENV_PREFIX};
use kilo_autocomplete_lib::engine::AutocompleteEngine;
use kilo_autocomplete_lib::error::{
    report_error, set_error_reporter, ErrorContext, KiloError, KiloResult, TracingErrorReporter,
};
use kilo_autocomplete_lib::protocol::{serve, RequestHandler};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the Kilo autocomplete service.
#[derive(Parser, Debug)]
#[clap(name = "Kilo Autocomplete", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Serve line-delimited JSON requests on standard input and output
    Serve,

    /// Print completions for a prefix and exit
    Query {
        /// Prefix to complete
        #[clap(default_value = "")]
        prefix: String,

        /// Maximum number of suggestions
        #[clap(short, long, value_parser)]
        limit: Option<usize>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// Logs go to standard error; standard output carries protocol responses.
fn init_logging(log: &LogConfig) -> KiloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| KiloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Build the engine and insert every configured seed vocabulary in order.
fn build_engine(config: &KiloConfig) -> KiloResult<Arc<AutocompleteEngine>> {
    let engine = Arc::new(AutocompleteEngine::with_options(config.engine_options()));

    for source in config.seed_sources() {
        if let Err(e) = engine.seed_from(source.as_ref()) {
            let description = source.describe();
            report_error(ErrorContext::new(e, "seed").with_details(description.clone()));
            return Err(KiloError::Custom(format!(
                "Failed to load seed vocabulary from {description}"
            )));
        }
    }

    info!(
        words = engine.word_count(),
        nodes = engine.node_count(),
        "Engine ready"
    );
    Ok(engine)
}

/// Write the default configuration as TOML.
fn generate_config(output: &Path) -> KiloResult<()> {
    let default_config = KiloConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| KiloError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() -> KiloResult<()> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Serve);

    if let Command::GenConfig { output } = &command {
        init_logging(&LogConfig::default())?;
        return generate_config(output);
    }

    // Load and validate configuration
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let loaded = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    init_logging(&loaded.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter));

    config::init_global_config(loaded);
    let config = config::get_global_config()
        .ok_or_else(|| KiloError::Custom("Global configuration not initialized".to_string()))?;

    match command {
        Command::Serve => {
            info!(name = %config.server.name, "Starting Kilo autocomplete server");
            let engine = build_engine(config)?;
            let handler = RequestHandler::new(engine, config.server.max_line_bytes);

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(config.server.worker_threads)
                .enable_all()
                .build()?;

            let summary = runtime.block_on(async {
                let stdin = tokio::io::BufReader::new(tokio::io::stdin());
                serve(&handler, stdin, tokio::io::stdout()).await
            })?;

            info!(
                requests = summary.requests,
                failures = summary.failures,
                "Server stopped"
            );
            Ok(())
        }
        Command::Query { prefix, limit } => {
            let engine = build_engine(config)?;
            let limit = limit.unwrap_or(config.engine.default_max_suggestions);
            let suggestions = engine.query(&prefix, limit);
            println!("{}", serde_json::to_string(&suggestions)?);
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { .. } => Ok(()),
    }
}
