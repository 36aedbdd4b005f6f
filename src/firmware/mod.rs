// CLASSIFICATION: COMMUNITY
// Filename: mod.rs · firmware collaborators
// Author: Lukas Bower
// Date Modified: 2026-10-16
//
// ─────────────────────────────────────────────────────────────
// Cohesix · Firmware Service Seams
//
// The negotiators never touch firmware objects directly.  Quirk
// engines and console backends are reached through the traits
// below, which take plain configuration-derived values and
// report a firmware status.
//
// ## Sub-modules
// * `recording` – in-memory implementation used for dry runs.
// ─────────────────────────────────────────────────────────────

use bitflags::bitflags;
use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use crate::geometry::Geometry;
use crate::mode::{KeyMode, PointerMode, RendererMode};

/// Recording firmware for dry runs and tests.
pub mod recording;

pub use recording::{CallKind, FirmwareCall, RecordedCall, RecordingFirmware};

/// Failure status returned by a firmware service.
///
/// Command-line names are the kebab-case variant names (`not-found`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, ValueEnum)]
pub enum FirmwareError {
    /// The service or requested mode is not implemented.
    #[error("Unsupported")]
    Unsupported,
    /// No matching protocol, handle or mode exists.
    #[error("Not Found")]
    NotFound,
    /// The service was already installed.
    #[error("Already started")]
    AlreadyStarted,
    /// Allocation failed.
    #[error("Out of Resources")]
    OutOfResources,
    /// The hardware reported an error.
    #[error("Device Error")]
    DeviceError,
    /// An argument was rejected.
    #[error("Invalid Parameter")]
    InvalidParameter,
    /// The operation was cancelled.
    #[error("Aborted")]
    Aborted,
}

/// Result of a firmware service call.
pub type FirmwareResult = Result<(), FirmwareError>;

/// Render a firmware result the way firmware status codes are printed.
pub fn status_str(result: &FirmwareResult) -> String {
    match result {
        Ok(()) => "Success".to_string(),
        Err(err) => err.to_string(),
    }
}

bitflags! {
    /// Presentation flags handed to the console setup routine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
    #[serde(transparent)]
    pub struct ConsoleFlags: u8 {
        const IGNORE_TEXT_IN_GRAPHICS = 1 << 0;
        const SANITISE_CLEAR_SCREEN = 1 << 1;
        const CLEAR_SCREEN_ON_MODE_SWITCH = 1 << 2;
        const REPLACE_TAB_WITH_SPACE = 1 << 3;
    }
}

impl ConsoleFlags {
    /// Build the flag set from the four configuration toggles.
    pub fn from_toggles(
        ignore_text_in_graphics: bool,
        sanitise_clear_screen: bool,
        clear_screen_on_mode_switch: bool,
        replace_tab_with_space: bool,
    ) -> Self {
        let mut flags = ConsoleFlags::empty();
        flags.set(ConsoleFlags::IGNORE_TEXT_IN_GRAPHICS, ignore_text_in_graphics);
        flags.set(ConsoleFlags::SANITISE_CLEAR_SCREEN, sanitise_clear_screen);
        flags.set(ConsoleFlags::CLEAR_SCREEN_ON_MODE_SWITCH, clear_screen_on_mode_switch);
        flags.set(ConsoleFlags::REPLACE_TAB_WITH_SPACE, replace_tab_with_space);
        flags
    }
}

/// Input emulation quirk engines.
pub trait InputQuirks {
    /// Reprogram the firmware timer to `resolution` (100ns units).
    fn init_timer_quirk(&mut self, resolution: u32) -> FirmwareResult;
    /// Install pointer emulation for `mode`.
    fn init_pointer(&mut self, mode: PointerMode) -> FirmwareResult;
    /// Install keycode emulation.
    fn init_keycode(
        &mut self,
        mode: KeyMode,
        forget_threshold: u8,
        merge_threshold: u8,
        key_swap: bool,
    ) -> FirmwareResult;
}

/// Console and graphics output services.
pub trait ConsoleServices {
    /// Install a graphics output protocol on the console handle.
    fn provide_console_gop(&mut self, force: bool) -> FirmwareResult;
    /// Switch the graphics output to `geometry`.
    fn set_console_resolution(&mut self, geometry: &Geometry) -> FirmwareResult;
    /// Render directly to the graphics output framebuffer.
    fn use_direct_gop(&mut self) -> FirmwareResult;
    /// Reconnect console controllers after a mode change.
    fn reconnect_console(&mut self) -> FirmwareResult;
    /// Select the text renderer and presentation behaviour.
    fn setup_console(&mut self, renderer: RendererMode, flags: ConsoleFlags);
    /// Switch the text console to `geometry`.
    fn set_console_mode(&mut self, geometry: &Geometry) -> FirmwareResult;
}
