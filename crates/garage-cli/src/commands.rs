//! Command implementations

use std::path::{Path, PathBuf};

use garage_domain::Vehicle;
use garage_store::VehicleStore;
use garage_types::Result;
use tracing::debug;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::output;

pub fn execute(cli: Cli) -> Result<()> {
    execute_with(cli, &Config::config_path()?)
}

/// Run a command against the config file at `config_path`
pub fn execute_with(cli: Cli, config_path: &Path) -> Result<()> {
    // Reset must work even when the current file is unreadable
    if let Commands::Config { reset: true, .. } = cli.command {
        return cmd_reset(config_path);
    }

    let config = Config::load_from(config_path)?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Add { vehicle } => {
            let mut store = open_store(cli.store.as_deref(), &config)?;
            cmd_add(&mut store, vehicle.into_vehicle());
            Ok(())
        }
        Commands::List => {
            let store = open_store(cli.store.as_deref(), &config)?;
            output::output_listing(output_format, &store)
        }
        Commands::Acceleration => {
            let store = open_store(cli.store.as_deref(), &config)?;
            output::output_acceleration(output_format, &store)
        }
        Commands::Config {
            show,
            set_store,
            set_output,
            ..
        } => cmd_config(config_path, config, show, set_store, set_output),
    }
}

fn open_store(store_override: Option<&Path>, config: &Config) -> Result<VehicleStore> {
    let path = match store_override {
        Some(path) => path.to_path_buf(),
        None => config.store_path()?,
    };
    debug!(path = %path.display(), "Opening vehicle store");
    Ok(VehicleStore::open_file(path))
}

/// Returns whether the vehicle was saved
fn cmd_add(store: &mut VehicleStore, vehicle: Vehicle) -> bool {
    let description = vehicle.describe();

    let saved = store.add(vehicle);
    if saved {
        println!("Added: {}", description);
    } else {
        eprintln!(
            "Warning: {} was added but could not be saved to {}",
            description,
            store.storage().path().display()
        );
    }
    saved
}

fn cmd_reset(config_path: &Path) -> Result<()> {
    let config = Config::default();
    config.save_to(config_path)?;
    println!("Configuration reset to defaults");
    println!("\n{}", config);
    Ok(())
}

fn cmd_config(
    config_path: &Path,
    mut config: Config,
    show: bool,
    set_store: Option<PathBuf>,
    set_output: Option<OutputFormat>,
) -> Result<()> {
    let mut modified = false;

    if let Some(path) = set_store {
        config.store_path = Some(path);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
