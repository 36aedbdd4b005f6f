// CLASSIFICATION: COMMUNITY
// Filename: input.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-16

//! Input quirk negotiation.
//!
//! Timer, pointer and keycode quirks are activated independently. The pass
//! reports whether any of them is now live, which tells the boot sequencer
//! to exit boot services early.

use log::error;
use serde::Serialize;

use super::StepOutcome;
use crate::config::InputConfig;
use crate::firmware::InputQuirks;
use crate::mode::{KeyMode, PointerMode, SymbolicMode};

/// Per-step outcome of an input negotiation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InputReport {
    /// Timer resolution quirk.
    pub timer: StepOutcome,
    /// Pointer emulation.
    pub pointer: StepOutcome,
    /// Keycode emulation.
    pub keycode: StepOutcome,
    /// Resolved pointer mode, `None` when pointer support is off.
    pub pointer_mode: Option<PointerMode>,
    /// Resolved key mode, `None` when key support is off.
    pub key_mode: Option<KeyMode>,
}

impl InputReport {
    /// Returns `true` if at least one quirk was activated.
    pub fn activated_any(&self) -> bool {
        self.timer.is_applied() || self.pointer.is_applied() || self.keycode.is_applied()
    }
}

fn timer_step<Q: InputQuirks + ?Sized>(config: &InputConfig, quirks: &mut Q) -> StepOutcome {
    if config.timer_resolution == 0 {
        return StepOutcome::Skipped;
    }
    let outcome = StepOutcome::from(quirks.init_timer_quirk(config.timer_resolution));
    if let StepOutcome::Failed(err) = outcome {
        error!("Failed to initialize timer quirk - {}", err);
    }
    outcome
}

fn pointer_step<Q: InputQuirks + ?Sized>(mode: Option<PointerMode>, quirks: &mut Q) -> StepOutcome {
    let Some(mode) = mode.filter(|m| m.is_enabled()) else {
        return StepOutcome::Skipped;
    };
    let outcome = StepOutcome::from(quirks.init_pointer(mode));
    if let StepOutcome::Failed(err) = outcome {
        error!("Failed to initialize pointer - {}", err);
    }
    outcome
}

fn keycode_step<Q: InputQuirks + ?Sized>(
    config: &InputConfig,
    mode: Option<KeyMode>,
    quirks: &mut Q,
) -> StepOutcome {
    let Some(mode) = mode.filter(|m| m.is_enabled()) else {
        return StepOutcome::Skipped;
    };
    let outcome = StepOutcome::from(quirks.init_keycode(
        mode,
        config.key_forget_threshold,
        config.key_merge_threshold,
        config.key_swap,
    ));
    if let StepOutcome::Failed(err) = outcome {
        error!("Failed to initialize keycode - {}", err);
    }
    outcome
}

/// Run the input pass and return the per-step report.
pub fn negotiate_input_report<Q: InputQuirks + ?Sized>(
    config: &InputConfig,
    quirks: &mut Q,
) -> InputReport {
    let timer = timer_step(config, quirks);

    let pointer_mode = config
        .pointer_support
        .then(|| PointerMode::resolve(&config.pointer_support_mode));
    let pointer = pointer_step(pointer_mode, quirks);

    let key_mode = config
        .key_support
        .then(|| KeyMode::resolve(&config.key_support_mode));
    let keycode = keycode_step(config, key_mode, quirks);

    InputReport {
        timer,
        pointer,
        keycode,
        pointer_mode,
        key_mode,
    }
}

/// Activate the configured input quirks.
///
/// Returns `true` when at least one quirk is active and boot services have
/// to be exited early.
pub fn negotiate_input<Q: InputQuirks + ?Sized>(config: &InputConfig, quirks: &mut Q) -> bool {
    negotiate_input_report(config, quirks).activated_any()
}
