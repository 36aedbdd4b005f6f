// CLASSIFICATION: COMMUNITY
// Filename: recording.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-16

//! Firmware stand-in that records every service call in order.
//!
//! Calls succeed unless a failure has been injected for their [`CallKind`].

use std::collections::HashMap;

use clap::ValueEnum;
use log::debug;
use serde::Serialize;

use super::{ConsoleFlags, ConsoleServices, FirmwareError, FirmwareResult, InputQuirks};
use crate::geometry::Geometry;
use crate::mode::{KeyMode, PointerMode, RendererMode};

/// A single firmware service invocation with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum FirmwareCall {
    TimerQuirk {
        resolution: u32,
    },
    Pointer {
        mode: PointerMode,
    },
    Keycode {
        mode: KeyMode,
        forget_threshold: u8,
        merge_threshold: u8,
        key_swap: bool,
    },
    ProvideConsoleGop {
        force: bool,
    },
    SetResolution {
        geometry: Geometry,
    },
    DirectGop,
    ReconnectConsole,
    SetupConsole {
        renderer: RendererMode,
        flags: ConsoleFlags,
    },
    SetConsoleMode {
        geometry: Geometry,
    },
}

/// Argument-free identity of a [`FirmwareCall`], used for failure injection.
///
/// Command-line names are kebab-case (`set-resolution`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CallKind {
    TimerQuirk,
    Pointer,
    Keycode,
    ProvideConsoleGop,
    SetResolution,
    DirectGop,
    ReconnectConsole,
    SetupConsole,
    SetConsoleMode,
}

impl FirmwareCall {
    /// Kind of this call.
    pub fn kind(&self) -> CallKind {
        match self {
            FirmwareCall::TimerQuirk { .. } => CallKind::TimerQuirk,
            FirmwareCall::Pointer { .. } => CallKind::Pointer,
            FirmwareCall::Keycode { .. } => CallKind::Keycode,
            FirmwareCall::ProvideConsoleGop { .. } => CallKind::ProvideConsoleGop,
            FirmwareCall::SetResolution { .. } => CallKind::SetResolution,
            FirmwareCall::DirectGop => CallKind::DirectGop,
            FirmwareCall::ReconnectConsole => CallKind::ReconnectConsole,
            FirmwareCall::SetupConsole { .. } => CallKind::SetupConsole,
            FirmwareCall::SetConsoleMode { .. } => CallKind::SetConsoleMode,
        }
    }
}

/// A recorded call and the status it returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedCall {
    #[serde(flatten)]
    pub call: FirmwareCall,
    /// `None` for calls without a status (console setup) or on success.
    pub error: Option<FirmwareError>,
}

/// In-memory firmware implementing every collaborator trait.
#[derive(Debug, Default)]
pub struct RecordingFirmware {
    calls: Vec<RecordedCall>,
    failures: HashMap<CallKind, FirmwareError>,
}

impl RecordingFirmware {
    /// Firmware on which every call succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call of `kind` fail with `err`.
    ///
    /// Console setup reports no status, so injecting a failure for it has no
    /// effect.
    pub fn fail_with(mut self, kind: CallKind, err: FirmwareError) -> Self {
        self.failures.insert(kind, err);
        self
    }

    /// Calls recorded so far, oldest first.
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    /// Recorded calls without their outcomes.
    pub fn call_log(&self) -> Vec<FirmwareCall> {
        self.calls.iter().map(|c| c.call.clone()).collect()
    }

    /// Returns `true` if a call of `kind` was recorded.
    pub fn invoked(&self, kind: CallKind) -> bool {
        self.calls.iter().any(|c| c.call.kind() == kind)
    }

    /// Forget recorded calls, keeping injected failures.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: FirmwareCall) -> FirmwareResult {
        let result = match self.failures.get(&call.kind()) {
            Some(err) => Err(*err),
            None => Ok(()),
        };
        debug!("firmware call {:?} -> {}", call, super::status_str(&result));
        self.calls.push(RecordedCall {
            call,
            error: result.err(),
        });
        result
    }
}

impl InputQuirks for RecordingFirmware {
    fn init_timer_quirk(&mut self, resolution: u32) -> FirmwareResult {
        self.record(FirmwareCall::TimerQuirk { resolution })
    }

    fn init_pointer(&mut self, mode: PointerMode) -> FirmwareResult {
        self.record(FirmwareCall::Pointer { mode })
    }

    fn init_keycode(
        &mut self,
        mode: KeyMode,
        forget_threshold: u8,
        merge_threshold: u8,
        key_swap: bool,
    ) -> FirmwareResult {
        self.record(FirmwareCall::Keycode {
            mode,
            forget_threshold,
            merge_threshold,
            key_swap,
        })
    }
}

impl ConsoleServices for RecordingFirmware {
    fn provide_console_gop(&mut self, force: bool) -> FirmwareResult {
        self.record(FirmwareCall::ProvideConsoleGop { force })
    }

    fn set_console_resolution(&mut self, geometry: &Geometry) -> FirmwareResult {
        self.record(FirmwareCall::SetResolution {
            geometry: *geometry,
        })
    }

    fn use_direct_gop(&mut self) -> FirmwareResult {
        self.record(FirmwareCall::DirectGop)
    }

    fn reconnect_console(&mut self) -> FirmwareResult {
        self.record(FirmwareCall::ReconnectConsole)
    }

    fn setup_console(&mut self, renderer: RendererMode, flags: ConsoleFlags) {
        let call = FirmwareCall::SetupConsole { renderer, flags };
        debug!("firmware call {:?}", call);
        self.calls.push(RecordedCall { call, error: None });
    }

    fn set_console_mode(&mut self, geometry: &Geometry) -> FirmwareResult {
        self.record(FirmwareCall::SetConsoleMode {
            geometry: *geometry,
        })
    }
}
