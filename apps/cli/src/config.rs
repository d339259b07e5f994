// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables and arguments.

use std::path::PathBuf;

const DEFAULT_LOG_FILTER: &str = "info,interior_elevations_processing=debug";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Model file to process.
    pub model_path: PathBuf,
    /// Pretty-print the JSON report.
    pub pretty: bool,
    /// Tracing filter directive.
    pub log_filter: String,
}

/// What the command line asked for.
#[derive(Debug)]
pub enum Command {
    Run(Config),
    Help,
}

impl Config {
    /// Defaults from the environment, overridden by `args` (without argv[0]).
    pub fn from_env_and_args<I>(args: I) -> Result<Command, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut pretty = std::env::var("IELEV_PRETTY")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
        let mut model_path = None;

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--pretty" => pretty = true,
                "--compact" => pretty = false,
                other if other.starts_with('-') => {
                    return Err(format!("unknown option: {other}"));
                }
                path => {
                    if model_path.replace(PathBuf::from(path)).is_some() {
                        return Err("only one model file may be given".into());
                    }
                }
            }
        }

        let model_path = model_path.ok_or_else(|| "missing model file".to_string())?;
        Ok(Command::Run(Config {
            model_path,
            pretty,
            log_filter,
        }))
    }
}
