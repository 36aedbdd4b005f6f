// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-16

//! Boot configuration consumed by the input and output negotiators.
//!
//! Keys follow the firmware configuration schema (`Uefi.Input.*`,
//! `Uefi.Output.*`). Missing keys take zero, `false` or empty-string values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported configuration format for {0}")]
    UnsupportedFormat(PathBuf),
}

/// Serialisation format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Infer the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

/// Root of the boot configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BootConfig {
    pub uefi: UefiConfig,
}

/// `Uefi` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UefiConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// `Uefi.Input` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct InputConfig {
    /// Timer resolution in 100ns units; zero leaves the timer untouched.
    pub timer_resolution: u32,
    pub pointer_support: bool,
    pub pointer_support_mode: String,
    pub key_support: bool,
    pub key_support_mode: String,
    /// Window in timer ticks after which a held key is forgotten.
    pub key_forget_threshold: u8,
    /// Window in timer ticks in which presses merge into one combination.
    pub key_merge_threshold: u8,
    /// Swap the command and option modifiers.
    pub key_swap: bool,
}

/// `Uefi.Output` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OutputConfig {
    pub provide_console_gop: bool,
    /// `WxH@BPP`, `Max` or empty.
    pub resolution: String,
    pub direct_gop_rendering: bool,
    pub reconnect_on_res_change: bool,
    pub text_renderer: String,
    pub ignore_text_in_graphics: bool,
    pub sanitise_clear_screen: bool,
    pub clear_screen_on_mode_switch: bool,
    pub replace_tab_with_space: bool,
    /// `WxH`, `Max` or empty.
    pub console_mode: String,
}

impl BootConfig {
    /// Parse a configuration document in the given format.
    pub fn from_str_with(text: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let cfg = match format {
            ConfigFormat::Toml => toml::from_str(text)?,
            ConfigFormat::Yaml => serde_yaml::from_str(text)?,
            ConfigFormat::Json => serde_json::from_str(text)?,
        };
        Ok(cfg)
    }
}

/// Load a configuration file, picking the parser from its extension.
pub fn load_config(path: &Path) -> Result<BootConfig, ConfigError> {
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    BootConfig::from_str_with(&text, format)
}
