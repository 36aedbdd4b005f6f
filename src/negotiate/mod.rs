// CLASSIFICATION: COMMUNITY
// Filename: mod.rs · negotiate
// Author: Lukas Bower
// Date Modified: 2026-10-16
//
// ─────────────────────────────────────────────────────────────
// Cohesix · Boot Input/Output Negotiation
//
// Turns the `Uefi.Input` and `Uefi.Output` configuration into
// firmware service calls.  Every step is attempted at most once
// and a failing step never stops the ones after it.
//
// ## Public API
// * [`negotiate_input`]  – quirk activation, returns exit-BS hint
// * [`negotiate_output`] – ordered console bring-up
// * [`negotiate`]        – both passes against one firmware
// ─────────────────────────────────────────────────────────────

use log::info;
use serde::Serialize;

use crate::config::UefiConfig;
use crate::firmware::{ConsoleServices, FirmwareError, FirmwareResult, InputQuirks};

/// Input quirk negotiation.
pub mod input;
/// Console output negotiation.
pub mod output;

pub use input::{negotiate_input, negotiate_input_report, InputReport};
pub use output::{negotiate_output, negotiate_output_report, OutputReport};

/// What happened to one negotiation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepOutcome {
    /// Not requested by the configuration.
    #[default]
    Skipped,
    /// The firmware call succeeded.
    Applied,
    /// The firmware call failed; later steps still ran.
    Failed(FirmwareError),
}

impl StepOutcome {
    /// Returns `true` if the firmware call succeeded.
    pub fn is_applied(self) -> bool {
        self == StepOutcome::Applied
    }
}

impl From<FirmwareResult> for StepOutcome {
    fn from(result: FirmwareResult) -> Self {
        match result {
            Ok(()) => StepOutcome::Applied,
            Err(err) => StepOutcome::Failed(err),
        }
    }
}

/// Result of a full input and output negotiation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NegotiationSummary {
    /// At least one input quirk is active, so boot services must be exited
    /// early to tear it down.
    pub exit_boot_services_early: bool,
    /// Outcome of the input quirk pass.
    pub input: InputReport,
    /// Outcome of the console output pass.
    pub output: OutputReport,
}

/// Run input negotiation followed by output negotiation.
pub fn negotiate<F>(config: &UefiConfig, firmware: &mut F) -> NegotiationSummary
where
    F: InputQuirks + ConsoleServices + ?Sized,
{
    let input = negotiate_input_report(&config.input, firmware);
    let output = negotiate_output_report(&config.output, firmware);
    let exit_boot_services_early = input.activated_any();
    info!("Boot negotiation done, exit boot services early: {}", exit_boot_services_early);
    NegotiationSummary {
        exit_boot_services_early,
        input,
        output,
    }
}
