// CLASSIFICATION: COMMUNITY
// Filename: output.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-16

//! Console output negotiation.
//!
//! Steps run in a fixed order. GOP provisioning and the resolution change
//! must be committed before console setup, which renders against the final
//! display geometry.

use log::{info, log, warn, Level};
use serde::Serialize;

use super::StepOutcome;
use crate::config::OutputConfig;
use crate::firmware::{status_str, ConsoleFlags, ConsoleServices, FirmwareResult};
use crate::geometry::{parse_console_mode, parse_screen_resolution, Geometry};
use crate::mode::{RendererMode, SymbolicMode};

/// Per-step outcome of an output negotiation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutputReport {
    /// Console GOP provisioning.
    pub console_gop: StepOutcome,
    /// Geometry parsed from `Resolution`.
    pub requested_resolution: Geometry,
    /// Graphics resolution change.
    pub resolution: StepOutcome,
    /// Direct GOP rendering.
    pub direct_gop: StepOutcome,
    /// Console reconnection.
    pub reconnect: StepOutcome,
    /// Renderer resolved from `TextRenderer`.
    pub renderer: RendererMode,
    /// Console setup; always applied since it reports no status.
    pub console_setup: StepOutcome,
    /// Geometry parsed from `ConsoleMode`.
    pub requested_console_mode: Geometry,
    /// Text console mode change.
    pub console_mode: StepOutcome,
}

fn outcome_level(result: &FirmwareResult) -> Level {
    if result.is_err() {
        Level::Warn
    } else {
        Level::Info
    }
}

fn toggle_step(requested: bool, what: &str, call: impl FnOnce() -> FirmwareResult) -> StepOutcome {
    if !requested {
        return StepOutcome::Skipped;
    }
    let result = call();
    if let Err(err) = &result {
        warn!("Failed to {} - {}", what, err);
    }
    StepOutcome::from(result)
}

fn resolution_step<C: ConsoleServices + ?Sized>(
    raw: &str,
    geometry: &Geometry,
    console: &mut C,
) -> StepOutcome {
    info!(
        "Requested resolution is {}x{}@{} (max: {}) from {:?}",
        geometry.width, geometry.height, geometry.bits_per_pixel, geometry.use_maximum, raw
    );
    if !geometry.requests_change() {
        return StepOutcome::Skipped;
    }
    let result = console.set_console_resolution(geometry);
    log!(
        outcome_level(&result),
        "Changed resolution to {}x{}@{} (max: {}) from {:?} - {}",
        geometry.width,
        geometry.height,
        geometry.bits_per_pixel,
        geometry.use_maximum,
        raw,
        status_str(&result)
    );
    StepOutcome::from(result)
}

fn console_mode_step<C: ConsoleServices + ?Sized>(
    raw: &str,
    geometry: &Geometry,
    console: &mut C,
) -> StepOutcome {
    info!(
        "Requested console mode is {}x{} (max: {}) from {:?}",
        geometry.width, geometry.height, geometry.use_maximum, raw
    );
    if !geometry.requests_change() {
        return StepOutcome::Skipped;
    }
    let result = console.set_console_mode(geometry);
    log!(
        outcome_level(&result),
        "Changed console mode to {}x{} (max: {}) from {:?} - {}",
        geometry.width,
        geometry.height,
        geometry.use_maximum,
        raw,
        status_str(&result)
    );
    StepOutcome::from(result)
}

/// Run the output pass and return the per-step report.
pub fn negotiate_output_report<C: ConsoleServices + ?Sized>(
    config: &OutputConfig,
    console: &mut C,
) -> OutputReport {
    let console_gop = toggle_step(config.provide_console_gop, "provide console GOP", || {
        console.provide_console_gop(true)
    });

    let requested_resolution = parse_screen_resolution(&config.resolution);
    let resolution = resolution_step(&config.resolution, &requested_resolution, console);

    let direct_gop = toggle_step(config.direct_gop_rendering, "use direct GOP rendering", || {
        console.use_direct_gop()
    });

    let reconnect = toggle_step(config.reconnect_on_res_change, "reconnect console", || {
        console.reconnect_console()
    });

    let renderer = RendererMode::resolve(&config.text_renderer);
    let flags = ConsoleFlags::from_toggles(
        config.ignore_text_in_graphics,
        config.sanitise_clear_screen,
        config.clear_screen_on_mode_switch,
        config.replace_tab_with_space,
    );
    console.setup_console(renderer, flags);

    let requested_console_mode = parse_console_mode(&config.console_mode);
    let console_mode = console_mode_step(&config.console_mode, &requested_console_mode, console);

    OutputReport {
        console_gop,
        requested_resolution,
        resolution,
        direct_gop,
        reconnect,
        renderer,
        console_setup: StepOutcome::Applied,
        requested_console_mode,
        console_mode,
    }
}

/// Bring up console output as configured.
pub fn negotiate_output<C: ConsoleServices + ?Sized>(config: &OutputConfig, console: &mut C) {
    let _ = negotiate_output_report(config, console);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firmware::{CallKind, FirmwareCall, FirmwareError, RecordingFirmware};

    fn full_config() -> OutputConfig {
        OutputConfig {
            provide_console_gop: true,
            resolution: "1920x1080@32".into(),
            direct_gop_rendering: true,
            reconnect_on_res_change: true,
            text_renderer: "SystemGraphics".into(),
            ignore_text_in_graphics: true,
            sanitise_clear_screen: true,
            clear_screen_on_mode_switch: false,
            replace_tab_with_space: false,
            console_mode: "80x25".into(),
        }
    }

    #[test]
    fn default_config_only_sets_up_console() {
        let mut fw = RecordingFirmware::new();
        negotiate_output(&OutputConfig::default(), &mut fw);
        assert_eq!(
            fw.call_log(),
            vec![FirmwareCall::SetupConsole {
                renderer: RendererMode::BuiltinGraphics,
                flags: ConsoleFlags::empty(),
            }]
        );
    }

    #[test]
    fn fixed_call_order() {
        let mut fw = RecordingFirmware::new();
        negotiate_output(&full_config(), &mut fw);
        let kinds: Vec<CallKind> = fw.calls().iter().map(|c| c.call.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                CallKind::ProvideConsoleGop,
                CallKind::SetResolution,
                CallKind::DirectGop,
                CallKind::ReconnectConsole,
                CallKind::SetupConsole,
                CallKind::SetConsoleMode,
            ]
        );
        assert_eq!(fw.call_log()[0], FirmwareCall::ProvideConsoleGop { force: true });
    }

    #[test]
    fn failures_do_not_abort_sequence() {
        let mut fw = RecordingFirmware::new()
            .fail_with(CallKind::ProvideConsoleGop, FirmwareError::AlreadyStarted)
            .fail_with(CallKind::SetResolution, FirmwareError::Unsupported)
            .fail_with(CallKind::DirectGop, FirmwareError::NotFound);
        let report = negotiate_output_report(&full_config(), &mut fw);
        assert_eq!(report.console_gop, StepOutcome::Failed(FirmwareError::AlreadyStarted));
        assert_eq!(report.resolution, StepOutcome::Failed(FirmwareError::Unsupported));
        assert_eq!(report.direct_gop, StepOutcome::Failed(FirmwareError::NotFound));
        assert_eq!(report.reconnect, StepOutcome::Applied);
        assert_eq!(report.console_mode, StepOutcome::Applied);
        assert_eq!(fw.calls().len(), 6);
    }

    #[test]
    fn malformed_resolution_skips_setter() {
        let mut fw = RecordingFirmware::new();
        let cfg = OutputConfig {
            resolution: "1920x1080".into(),
            console_mode: "80xx25".into(),
            ..OutputConfig::default()
        };
        let report = negotiate_output_report(&cfg, &mut fw);
        assert_eq!(report.resolution, StepOutcome::Skipped);
        assert_eq!(report.console_mode, StepOutcome::Skipped);
        assert!(!fw.invoked(CallKind::SetResolution));
        assert!(!fw.invoked(CallKind::SetConsoleMode));
    }

    #[test]
    fn unknown_renderer_uses_builtin() {
        let mut fw = RecordingFirmware::new();
        let cfg = OutputConfig {
            text_renderer: "Fancy".into(),
            replace_tab_with_space: true,
            ..OutputConfig::default()
        };
        let report = negotiate_output_report(&cfg, &mut fw);
        assert_eq!(report.renderer, RendererMode::BuiltinGraphics);
        assert_eq!(
            fw.call_log(),
            vec![FirmwareCall::SetupConsole {
                renderer: RendererMode::BuiltinGraphics,
                flags: ConsoleFlags::REPLACE_TAB_WITH_SPACE,
            }]
        );
    }
}
