//! # HWIO HAL Binary
//!
//! Loads the hardware configuration, registers all built-in hardware types
//! and creates one hardware instance per `[[hardware]]` entry.
//!
//! # Usage
//!
//! ```bash
//! # Create hardware from the default config path
//! hwio_hal
//!
//! # Explicit config, verbose logging, JSON report on stdout
//! hwio_hal --config config/hardware.toml -v --report
//!
//! # List registered hardware types
//! hwio_hal --list-types
//! ```

#![deny(warnings)]

use clap::Parser;
use hwio_common::config::{ConfigLoader, HardwareConfig, LogLevel};
use hwio_common::consts::{DEFAULT_CONFIG_PATH, HWIO_SERVICE_NAME};
use hwio_hal::{HardwareDispatcher, HardwareRegistry, register_all_hardware};
use std::path::PathBuf;
use tracing::{Level, error, info, info_span, warn};
use tracing_subscriber::EnvFilter;

/// HWIO HAL - dynamic hardware-interface registry
#[derive(Parser, Debug)]
#[command(name = "hwio_hal")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Create hardware interfaces from declarative configuration")]
#[command(long_about = None)]
struct Args {
    /// Path to the hardware configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,

    /// Print registered hardware types and exit
    #[arg(long)]
    list_types: bool,

    /// Print the setup report as JSON on stdout
    #[arg(long)]
    report: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = run() {
        error!("HWIO startup failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut registry = HardwareRegistry::new();
    register_all_hardware(&mut registry);

    if args.list_types {
        for tag in registry.list_types() {
            println!("{tag}");
        }
        return Ok(());
    }

    // Load before tracing so the configured level applies; report errors after.
    let loaded = HardwareConfig::load(&args.config);
    let configured_level = loaded
        .as_ref()
        .map(|config| config.shared.log_level)
        .unwrap_or_default();
    setup_tracing(&args, configured_level);

    let config = loaded.map_err(|e| format!("{}: {e}", args.config.display()))?;
    config.validate()?;

    let _span = info_span!(HWIO_SERVICE_NAME, service = %config.shared.service_name).entered();
    info!("HWIO HAL v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        "Loaded {} hardware entries from {}",
        config.hardware.len(),
        args.config.display()
    );

    let mut dispatcher = HardwareDispatcher::from_config(registry, &config.dispatcher);
    let report = dispatcher.setup_all(&config.hardware, config.dispatcher.abort_on_fault);

    for outcome in report.outcomes.iter().filter(|o| !o.created) {
        warn!(
            "Entry '{}' ({}) not created: {}",
            outcome.name.as_deref().unwrap_or("<unnamed>"),
            outcome.tag,
            outcome.log.fault().unwrap_or("unknown fault")
        );
    }

    if args.report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if report.aborted {
        return Err("hardware setup aborted on first fault".into());
    }

    for (name, handle) in dispatcher.table().iter() {
        info!(
            "Hardware '{}' ready: {} {}",
            name,
            handle.kind(),
            handle.diagnostics().unwrap_or_default()
        );
    }

    info!("HWIO HAL setup complete");
    Ok(())
}

/// Setup tracing subscriber based on CLI arguments and configured level.
fn setup_tracing(args: &Args, configured: LogLevel) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::from(configured)
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
