//! Output formatting module

use crate::cli::OutputFormat;
use garage_store::{Report, Storage, VehicleStore};
use garage_types::Result;

pub fn output_listing<S: Storage>(output_format: OutputFormat, store: &VehicleStore<S>) -> Result<()> {
    println!("{}", render_listing(output_format, store)?);
    Ok(())
}

pub fn output_acceleration<S: Storage>(
    output_format: OutputFormat,
    store: &VehicleStore<S>,
) -> Result<()> {
    println!("{}", render_acceleration(output_format, store)?);
    Ok(())
}

/// Vehicle list as a table, or the stored records as JSON
pub fn render_listing<S: Storage>(
    output_format: OutputFormat,
    store: &VehicleStore<S>,
) -> Result<String> {
    match output_format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&store.records())?),
        OutputFormat::Table => Ok(render_report("Vehicle list:", &store.list_all())),
    }
}

/// Acceleration lines as a table, or as a JSON array of strings
pub fn render_acceleration<S: Storage>(
    output_format: OutputFormat,
    store: &VehicleStore<S>,
) -> Result<String> {
    let report = store.acceleration_report();
    match output_format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report.lines())?),
        OutputFormat::Table => Ok(render_report("Vehicle acceleration:", &report)),
    }
}

fn render_report(title: &str, report: &Report) -> String {
    if report.is_empty() {
        report.to_string()
    } else {
        format!("\n{}\n{}", title, report)
    }
}
