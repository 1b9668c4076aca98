//! Produce catalog loader.
//!
//! Builds the in-memory catalog, seeds it from the init file and prints the
//! resulting items as JSON.
//!
//! # Usage
//!
//! ```bash
//! ramdb-produce --init-file items.json
//!
//! # Environment variables work too
//! RAMDB_INIT_FILE=items.json RAMDB_LOG_LEVEL=info ramdb-produce
//! ```

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ramdb_produce::{bootstrap, Catalog, Cli, Config, LogFormat, ProduceError, ProduceResult};

fn main() -> ExitCode {
    let config = Cli::parse().into_config();
    // Checked once, here; bootstrap trusts it
    if let Err(e) = config.validate().map_err(ProduceError::Config) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    init_logging(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "produce catalog failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> ProduceResult<()> {
    let app = bootstrap(config)?;
    let items = app.catalog.all()?;

    let out = serde_json::to_string_pretty(&items).map_err(|e| ProduceError::Encode {
        message: e.to_string(),
    })?;
    println!("{}", out);
    Ok(())
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_ascii_lowercase()));

    let use_json = match config.log_format {
        LogFormat::Json => true,
        LogFormat::Text => false,
        LogFormat::Auto => !std::io::stderr().is_terminal(),
    };

    // Logs go to stderr so stdout stays pure JSON output
    if use_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().flatten_event(true).with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
