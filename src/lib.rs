// CLASSIFICATION: COMMUNITY
// Filename: lib.rs v0.1
// Date Modified: 2026-10-16
// Author: Lukas Bower

//! Boot-time input/output negotiation for Cohesix UEFI images.
//!
//! Reads the `Uefi.Input` / `Uefi.Output` configuration, activates input
//! quirks and brings up the console through injected firmware services.

/// Boot configuration schema and loaders
pub mod config;

/// Resolution and console mode string parsing
pub mod geometry;

/// Symbolic pointer, key and renderer modes
pub mod mode;

/// Firmware service traits and the recording implementation
pub mod firmware;

/// Input and output negotiation passes
pub mod negotiate;

/// In-memory diagnostic capture for the `log` facade
pub mod diag;

/// `inoutctl` command line
pub mod cli;

pub use config::{load_config, BootConfig, InputConfig, OutputConfig, UefiConfig};
pub use geometry::{parse_console_mode, parse_screen_resolution, Geometry};
pub use mode::{KeyMode, PointerMode, RendererMode, SymbolicMode};
pub use negotiate::{negotiate, negotiate_input, negotiate_output, NegotiationSummary, StepOutcome};
