//! Show command - displays resolved configuration.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::Config;
use crate::stage::StagePaths;

#[derive(Serialize)]
struct ConfigView<'a> {
    #[serde(flatten)]
    config: &'a Config,
    stage: StagePaths,
    state_dir: std::path::PathBuf,
    launcher: std::path::PathBuf,
    command_link: std::path::PathBuf,
}

/// Print the resolved configuration, human-readable or as JSON.
pub fn cmd_show(config: &Config, json: bool) -> Result<()> {
    if json {
        let view = ConfigView {
            config,
            stage: config.stage_paths(),
            state_dir: config.state_dir(),
            launcher: config.launcher_path(),
            command_link: config.command_link(),
        };
        let out = serde_json::to_string_pretty(&view).context("serializing configuration")?;
        println!("{out}");
    } else {
        config.print();
    }
    Ok(())
}
