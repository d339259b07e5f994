// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: fit interior elevation crop boxes and mask regions for every
//! room of a JSON model and print the batch report as JSON.
//!
//! Usage:
//!   interior-elevations <model.json> [--pretty | --compact]
//!
//! Environment:
//!   RUST_LOG       tracing filter (default: info,interior_elevations_processing=debug)
//!   IELEV_PRETTY   pretty-print the report when set to 1/true/yes

use anyhow::Context;
use interior_elevations_geometry::ProjectNorth;
use interior_elevations_processing::{run_batch, ElevationContext, InMemoryModel};
use std::io::Write;

mod config;

use config::{Command, Config};

fn main() {
    let config = match Config::from_env_and_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print_usage();
            return;
        }
        Err(e) => {
            eprintln!("error: {e}");
            print_usage();
            std::process::exit(1);
        }
    };

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&config) {
        tracing::error!(error = %e, "elevation batch aborted");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&config.model_path)
        .with_context(|| format!("reading {}", config.model_path.display()))?;
    let mut model = InMemoryModel::from_json(&json)
        .with_context(|| format!("loading model {}", config.model_path.display()))?;

    let north = ProjectNorth::from_radians(model.north_offset_radians());
    tracing::info!(
        model = %config.model_path.display(),
        rooms = model.rooms().len(),
        north_offset_degrees = north.degrees(),
        "starting elevation batch"
    );

    let report = run_batch(&mut model, &ElevationContext::new(north));

    let out = if config.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{out}")?;
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: interior-elevations <model.json> [--pretty | --compact]");
    eprintln!();
    eprintln!("Reads a room model, places elevation views for every bound room,");
    eprintln!("fits their crop boxes and mask regions, and prints a JSON report.");
}
