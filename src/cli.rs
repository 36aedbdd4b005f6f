// CLASSIFICATION: COMMUNITY
// Filename: cli.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-16

//! `inoutctl` command line: dry-run negotiation plans and config checks.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use serde::Serialize;

use crate::config::{load_config, BootConfig};
use crate::diag::{self, DiagnosticRecord};
use crate::firmware::{CallKind, FirmwareError, RecordedCall, RecordingFirmware};
use crate::geometry::{parse_console_mode, parse_screen_resolution};
use crate::mode::{KeyMode, PointerMode, RendererMode, SymbolicMode};
use crate::negotiate::{negotiate, NegotiationSummary};

#[derive(Parser, Debug)]
#[command(name = "inoutctl", version, about = "Boot input/output negotiation tools")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Dry-run both negotiation passes and print the firmware call plan
    Plan {
        /// Configuration file (.toml, .yaml, .yml or .json)
        config: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Make a firmware call fail, e.g. `set-resolution` or
        /// `pointer=not-found`
        #[arg(long = "fail", value_name = "KIND[=STATUS]", value_parser = parse_failure)]
        failures: Vec<(CallKind, FirmwareError)>,
    },
    /// Print resolved modes and geometries without calling firmware
    Check {
        /// Configuration file (.toml, .yaml, .yml or .json)
        config: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_failure(arg: &str) -> Result<(CallKind, FirmwareError), String> {
    let (kind, status) = match arg.split_once('=') {
        Some((kind, status)) => (kind, Some(status)),
        None => (arg, None),
    };
    let kind = CallKind::from_str(kind, false)?;
    let err = match status {
        Some(name) => FirmwareError::from_str(name, false)?,
        None => FirmwareError::Unsupported,
    };
    Ok((kind, err))
}

#[derive(Serialize)]
struct PlanDocument<'a> {
    calls: &'a [RecordedCall],
    #[serde(flatten)]
    summary: &'a NegotiationSummary,
    diagnostics: Vec<DiagnosticRecord>,
}

fn run_plan(
    config: &BootConfig,
    format: OutputFormat,
    failures: &[(CallKind, FirmwareError)],
) -> anyhow::Result<String> {
    let mut firmware = failures
        .iter()
        .fold(RecordingFirmware::new(), |fw, (kind, err)| fw.fail_with(*kind, *err));

    if format == OutputFormat::Json {
        diag::clear()?;
    }
    let summary = negotiate(&config.uefi, &mut firmware);

    match format {
        OutputFormat::Json => {
            let doc = PlanDocument {
                calls: firmware.calls(),
                summary: &summary,
                diagnostics: diag::drain()?,
            };
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for (idx, recorded) in firmware.calls().iter().enumerate() {
                let status = match recorded.error {
                    Some(err) => err.to_string(),
                    None => "Success".to_string(),
                };
                writeln!(out, "{:>2}. {:?} -> {}", idx + 1, recorded.call, status)?;
            }
            writeln!(
                out,
                "exit boot services early: {}",
                summary.exit_boot_services_early
            )?;
            Ok(out)
        }
    }
}

fn run_check(config: &BootConfig) -> anyhow::Result<String> {
    let input = &config.uefi.input;
    let output = &config.uefi.output;
    let mut out = String::new();
    if input.pointer_support {
        writeln!(out, "pointer mode: {:?}", PointerMode::resolve(&input.pointer_support_mode))?;
    } else {
        writeln!(out, "pointer mode: off")?;
    }
    if input.key_support {
        writeln!(out, "key mode: {:?}", KeyMode::resolve(&input.key_support_mode))?;
    } else {
        writeln!(out, "key mode: off")?;
    }
    writeln!(out, "renderer: {:?}", RendererMode::resolve(&output.text_renderer))?;
    let resolution = parse_screen_resolution(&output.resolution);
    writeln!(
        out,
        "resolution: {} (change: {})",
        resolution,
        resolution.requests_change()
    )?;
    let console_mode = parse_console_mode(&output.console_mode);
    writeln!(
        out,
        "console mode: {} (change: {})",
        console_mode,
        console_mode.requests_change()
    )?;
    Ok(out)
}

/// Execute a parsed command line and return the rendered report.
pub fn execute(cli: Cli) -> anyhow::Result<String> {
    match cli.cmd {
        Cmd::Plan {
            config,
            format,
            failures,
        } => {
            let cfg = load_config(&config)
                .with_context(|| format!("loading {}", config.display()))?;
            run_plan(&cfg, format, &failures)
        }
        Cmd::Check { config } => {
            let cfg = load_config(&config)
                .with_context(|| format!("loading {}", config.display()))?;
            run_check(&cfg)
        }
    }
}

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    match &cli.cmd {
        Cmd::Plan {
            format: OutputFormat::Json,
            ..
        } => diag::install(LevelFilter::Info).map_err(|e| anyhow!(e)),
        _ => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .try_init()
                .map_err(|e| anyhow!(e))
        }
    }
}

/// Parse `std::env::args`, run the command and print its report.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    let out = execute(cli)?;
    print!("{out}");
    Ok(())
}
