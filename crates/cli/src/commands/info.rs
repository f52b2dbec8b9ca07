//! `info` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{Cli, InfoArgs};
use contracts::{SyncConfig, SyncMode};

const MODES: [SyncMode; 4] = [
    SyncMode::Percentage,
    SyncMode::AbsoluteValue,
    SyncMode::Heading,
    SyncMode::Paragraph,
];

/// Engine info for JSON output
#[derive(Serialize)]
struct EngineInfo {
    version: String,
    config: ConfigInfo,
    modes: Vec<ModeInfo>,
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_path: Option<String>,
    log_level: String,
}

#[derive(Serialize)]
struct ModeInfo {
    command: String,
    mode: String,
    implemented: bool,
}

/// Execute the `info` command
pub fn run_info(args: &InfoArgs, cli: &Cli, config: &SyncConfig) -> Result<()> {
    let info = build_engine_info(cli, config);

    if args.json {
        let json =
            serde_json::to_string_pretty(&info).context("Failed to serialize engine info")?;
        println!("{}", json);
    } else {
        print_engine_info(&info);
    }

    Ok(())
}

fn build_engine_info(cli: &Cli, config: &SyncConfig) -> EngineInfo {
    EngineInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        config: ConfigInfo {
            config_path: cli.config.as_ref().map(|p| p.display().to_string()),
            log_level: observability::default_level_from(config),
        },
        modes: MODES
            .iter()
            .map(|mode| ModeInfo {
                command: mode.command_name().to_string(),
                mode: mode.to_string(),
                implemented: mode.is_implemented(),
            })
            .collect(),
    }
}

fn print_engine_info(info: &EngineInfo) {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                     ScrollSync Engine                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("⚙️  Configuration");
    println!("   ├─ Version: {}", info.version);
    match &info.config.config_path {
        Some(path) => println!("   ├─ Config file: {}", path),
        None => println!("   ├─ Config file: (none)"),
    }
    println!("   └─ Default log level: {}", info.config.log_level);

    println!("\n🔁 Sync Modes ({})", info.modes.len());
    for (i, mode) in info.modes.iter().enumerate() {
        let is_last = i == info.modes.len() - 1;
        let prefix = if is_last { "└─" } else { "├─" };
        let status = if mode.implemented {
            "implemented"
        } else {
            "not implemented"
        };
        println!("   {} {} ({}) - {}", prefix, mode.command, mode.mode, status);
    }

    println!();
}
